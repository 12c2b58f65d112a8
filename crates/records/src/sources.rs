//! Well-known reading vocabulary.
//!
//! `source` labels which service a reading belongs to and `desc` carries a
//! free-text qualifier. Both come from the store, but the selection rules
//! key on the values below, so they are named once here.

/// The liturgy Gospel reading.
pub const GOSPEL: &str = "Gospel";

/// The liturgy Epistle reading.
pub const EPISTLE: &str = "Epistle";

/// The Matins Gospel (distinct from the Sunday Eothinon cycle).
pub const MATINS_GOSPEL: &str = "Matins Gospel";

/// Old Testament readings appointed for Vespers.
pub const VESPERS: &str = "Vespers";

/// `desc` on memorial readings for the departed, dropped when a Memorial
/// Saturday is cancelled.
pub const DEPARTED: &str = "Departed";

/// `desc` on Theotokos readings, dropped at the leavetaking of
/// Annunciation on non-liturgy weekdays.
pub const THEOTOKOS: &str = "Theotokos";
