//! Liturgical year tables.
//!
//! A [`Year`] spans one Paschal cycle: from the last days anchored to the
//! previous Pascha (offset -77) through the January days that still read
//! with this Pascha in the next civil year. Everything is computed up
//! front in the constructor, so a `Year` is immutable and safe to share.

use std::collections::{BTreeMap, BTreeSet};

use typikon_computus::{
    pascha_jdn, surrounding_weekends, Calendar, ComputusError, Date, SurroundingWeekends, Weekday,
};
use typikon_records::FloatIndex;

/// Minor feasts whose Lenten-weekday paremias move to the previous day.
#[rustfmt::skip]
const PAREMIA_FEASTS: [(u8, u8); 8] = [
    (2, 24),  // First and Second Finding of the Head of the Forerunner
    (2, 27),  // St Raphael of Brooklyn
    (3, 9),   // Holy Forty Martyrs of Sebaste
    (3, 31),  // Repose of St Innocent of Moscow
    (4, 7),   // Repose of St Tikhon of Moscow
    (4, 23),  // Greatmartyr George
    (4, 25),  // Apostle and Evangelist Mark
    (4, 30),  // Apostle James, brother of St John
];

/// One liturgical year's worth of precomputed tables.
///
/// All offsets are days from this year's Pascha. Fixed-cycle dates are
/// located under the year's reckoning: for the Julian kind, a (month, day)
/// names the Julian calendar date.
#[derive(Debug, Clone)]
pub struct Year {
    year: i32,
    calendar: Calendar,
    pascha_jdn: i64,
    previous_pascha_jdn: i64,
    next_pascha_jdn: i64,

    // Fixed anchors.
    theophany: i32,
    finding: i32,
    annunciation: i32,
    peter_and_paul: i32,
    beheading: i32,
    nativity_theotokos: i32,
    elevation: i32,
    nativity: i32,

    // Weekday-snapped anchors.
    fathers_six: i32,
    fathers_seven: i32,
    demetrius_saturday: i32,
    synaxis_unmercenaries: i32,
    forefathers: i32,
    new_martyrs_russia: i32,

    elevation_weekends: SurroundingWeekends,
    theophany_weekends: SurroundingWeekends,
    nativity_weekends: SurroundingWeekends,

    lukan_jump: i32,
    first_sun_luke: i32,
    extra_sundays: i32,
    reserves: Vec<i32>,
    floats: BTreeMap<i32, FloatIndex>,
    paremias: BTreeMap<i32, bool>,
    no_daily: BTreeSet<i32>,
}

impl Year {
    /// Computes the full table set for a year.
    ///
    /// Needs the Paschas of the surrounding years too, so the constructible
    /// window is 1584..=4098.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError::UnsupportedYear`] if `year - 1` or
    /// `year + 1` falls outside the computus window.
    pub fn new(year: i32, calendar: Calendar) -> Result<Self, ComputusError> {
        let pascha = pascha_jdn(year)?;
        let previous_pascha_jdn = pascha_jdn(year - 1)?;
        let next_pascha_jdn = pascha_jdn(year + 1)?;

        let to_pdist = |month: u8, day: u8, y: i32| -> Result<i32, ComputusError> {
            Ok((Date::new(calendar, y, month, day)?.jdn() - pascha) as i32)
        };

        let theophany = to_pdist(1, 6, year + 1)?;
        let finding = to_pdist(2, 24, year)?;
        let annunciation = to_pdist(3, 25, year)?;
        let peter_and_paul = to_pdist(6, 29, year)?;
        let beheading = to_pdist(8, 29, year)?;
        let nativity_theotokos = to_pdist(9, 8, year)?;
        let elevation = to_pdist(9, 14, year)?;
        let nativity = to_pdist(12, 25, year)?;

        // Fathers of the Sixth Council: the Sunday nearest July 16.
        let fathers_six = {
            let pdist = to_pdist(7, 16, year)?;
            let weekday = Weekday::from_pdist(pdist);
            let w = i32::from(weekday.index());
            if weekday < Weekday::Thursday {
                pdist - w
            } else {
                pdist + 7 - w
            }
        };

        // Fathers of the Seventh Council: October 11 if a Sunday, else the
        // Sunday after.
        let fathers_seven = {
            let pdist = to_pdist(10, 11, year)?;
            let weekday = Weekday::from_pdist(pdist);
            if weekday > Weekday::Sunday {
                pdist + 7 - i32::from(weekday.index())
            } else {
                pdist
            }
        };

        // Demetrius Saturday: the Saturday before October 26.
        let demetrius_saturday = {
            let pdist = to_pdist(10, 26, year)?;
            pdist - i32::from(Weekday::from_pdist(pdist).index()) - 1
        };

        // Synaxis of the Unmercenaries: the Sunday after November 1.
        let synaxis_unmercenaries = {
            let pdist = to_pdist(11, 1, year)?;
            pdist + 7 - i32::from(Weekday::from_pdist(pdist).index())
        };

        // Forefathers Sunday: the Sunday of the week before Nativity's week.
        let forefathers = {
            let w = i32::from(Weekday::from_pdist(nativity).index());
            nativity - 14 + (7 - w) % 7
        };

        // New Martyrs of Russia: the Sunday nearest January 25.
        let new_martyrs_russia = {
            let pdist = to_pdist(1, 25, year + 1)?;
            let weekday = Weekday::from_pdist(pdist);
            let w = i32::from(weekday.index());
            if weekday < Weekday::Thursday {
                pdist - w
            } else {
                pdist - w + 7
            }
        };

        let elevation_weekends = surrounding_weekends(elevation);
        let theophany_weekends = surrounding_weekends(theophany);
        let nativity_weekends = surrounding_weekends(nativity);

        // The Gospel for the Monday of the eighteenth week after Pentecost
        // must be read on the Monday after the Sunday after the Elevation,
        // which syncs the Gospel cycle to the festal calendar.
        let eighteenth_monday = 49 + 1 + 7 * 17;
        let lukan_jump = eighteenth_monday - (elevation_weekends.sun_after + 1);
        let first_sun_luke = elevation_weekends.sun_after + 7;

        // Sundays between the Sunday after Theophany and the Triodion.
        let sun_before_zaccheus = next_pascha_jdn - 12 * 7;
        let sun_after_theophany_jdn = pascha + i64::from(theophany_weekends.sun_after);
        let extra_sundays = (sun_before_zaccheus - sun_after_theophany_jdn).div_euclid(7) as i32;

        let reserves = build_reserves(extra_sundays, forefathers, lukan_jump);
        let floats = build_floats(&FloatInput {
            fathers_six,
            fathers_seven,
            demetrius_saturday,
            synaxis_unmercenaries,
            forefathers,
            new_martyrs_russia,
            nativity_theotokos,
            elevation,
            theophany,
            nativity,
            annunciation,
            elevation_weekends,
            theophany_weekends,
            nativity_weekends,
        });

        let mut paremias = BTreeMap::new();
        for (month, day) in PAREMIA_FEASTS {
            let pdist = to_pdist(month, day, year)?;
            let weekday = Weekday::from_pdist(pdist);
            if pdist > -44 && pdist < -7 && weekday > Weekday::Monday {
                paremias.insert(pdist, false);
                paremias.insert(pdist - 1, true);
            }
        }

        let mut no_daily = BTreeSet::from([
            theophany_weekends.sun_before,
            theophany_weekends.sun_after,
            theophany - 5,
            theophany - 1,
            theophany,
            forefathers,
            nativity_weekends.sun_before,
            nativity - 1,
            nativity,
            nativity + 1,
            nativity_weekends.sun_after,
        ]);
        if theophany_weekends.sat_after == theophany + 1 {
            no_daily.insert(theophany_weekends.sat_after);
        }
        if Weekday::from_pdist(annunciation) == Weekday::Saturday {
            no_daily.insert(annunciation);
        }

        Ok(Self {
            year,
            calendar,
            pascha_jdn: pascha,
            previous_pascha_jdn,
            next_pascha_jdn,
            theophany,
            finding,
            annunciation,
            peter_and_paul,
            beheading,
            nativity_theotokos,
            elevation,
            nativity,
            fathers_six,
            fathers_seven,
            demetrius_saturday,
            synaxis_unmercenaries,
            forefathers,
            new_martyrs_russia,
            elevation_weekends,
            theophany_weekends,
            nativity_weekends,
            lukan_jump,
            first_sun_luke,
            extra_sundays,
            reserves,
            floats,
            paremias,
            no_daily,
        })
    }

    /// Returns the civil year this Pascha falls in.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the reckoning fixed-cycle dates are located under.
    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Returns the Julian day number of this year's Pascha.
    pub fn pascha_jdn(&self) -> i64 {
        self.pascha_jdn
    }

    /// Returns the Julian day number of the previous year's Pascha.
    pub fn previous_pascha_jdn(&self) -> i64 {
        self.previous_pascha_jdn
    }

    /// Returns the Julian day number of the next year's Pascha.
    pub fn next_pascha_jdn(&self) -> i64 {
        self.next_pascha_jdn
    }

    /// Theophany of the following civil year (January 6).
    pub fn theophany(&self) -> i32 {
        self.theophany
    }

    /// Finding of the Head of the Forerunner (February 24).
    pub fn finding(&self) -> i32 {
        self.finding
    }

    /// Annunciation (March 25).
    pub fn annunciation(&self) -> i32 {
        self.annunciation
    }

    /// Peter and Paul (June 29), the end of the Apostles' fast.
    pub fn peter_and_paul(&self) -> i32 {
        self.peter_and_paul
    }

    /// Beheading of the Forerunner (August 29).
    pub fn beheading(&self) -> i32 {
        self.beheading
    }

    /// Nativity of the Theotokos (September 8).
    pub fn nativity_theotokos(&self) -> i32 {
        self.nativity_theotokos
    }

    /// Elevation of the Cross (September 14).
    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    /// Nativity of Christ (December 25).
    pub fn nativity(&self) -> i32 {
        self.nativity
    }

    /// Fathers of the Sixth Ecumenical Council.
    pub fn fathers_six(&self) -> i32 {
        self.fathers_six
    }

    /// Fathers of the Seventh Ecumenical Council.
    pub fn fathers_seven(&self) -> i32 {
        self.fathers_seven
    }

    /// Demetrius Saturday.
    pub fn demetrius_saturday(&self) -> i32 {
        self.demetrius_saturday
    }

    /// Synaxis of the Unmercenaries.
    pub fn synaxis_unmercenaries(&self) -> i32 {
        self.synaxis_unmercenaries
    }

    /// Sunday of the Forefathers.
    pub fn forefathers(&self) -> i32 {
        self.forefathers
    }

    /// New Martyrs and Confessors of Russia.
    pub fn new_martyrs_russia(&self) -> i32 {
        self.new_martyrs_russia
    }

    /// The weekend days bracketing the Elevation.
    pub fn elevation_weekends(&self) -> SurroundingWeekends {
        self.elevation_weekends
    }

    /// The weekend days bracketing Theophany.
    pub fn theophany_weekends(&self) -> SurroundingWeekends {
        self.theophany_weekends
    }

    /// The weekend days bracketing Nativity.
    pub fn nativity_weekends(&self) -> SurroundingWeekends {
        self.nativity_weekends
    }

    /// The Sunday after the Elevation, where the Lukan jump anchors.
    pub fn sun_after_elevation(&self) -> i32 {
        self.elevation_weekends.sun_after
    }

    /// The Saturday before Theophany, where the Gospel cycle wraps.
    pub fn sat_before_theophany(&self) -> i32 {
        self.theophany_weekends.sat_before
    }

    /// The Sunday after Theophany, where the reserve Gospels begin.
    pub fn sun_after_theophany(&self) -> i32 {
        self.theophany_weekends.sun_after
    }

    /// Days the Gospel cycle jumps forward after the Elevation. A multiple
    /// of seven.
    pub fn lukan_jump(&self) -> i32 {
        self.lukan_jump
    }

    /// The first Sunday of Luke, after the jump.
    pub fn first_sun_luke(&self) -> i32 {
        self.first_sun_luke
    }

    /// Sundays between the Sunday after Theophany and the Triodion.
    pub fn extra_sundays(&self) -> i32 {
        self.extra_sundays
    }

    /// Offsets of Sunday Gospels left unread, reused after Theophany.
    pub fn reserves(&self) -> &[i32] {
        &self.reserves
    }

    /// The floating-feast table: offset observed this year to store key.
    pub fn floats(&self) -> &BTreeMap<i32, FloatIndex> {
        &self.floats
    }

    /// Returns the floating-feast key observed at `pdist`, if any.
    pub fn float_at(&self, pdist: i32) -> Option<FloatIndex> {
        self.floats.get(&pdist).copied()
    }

    /// The moved-paremias table: `false` on the stripped feast day, `true`
    /// on the day before, which receives the readings.
    pub fn paremias(&self) -> &BTreeMap<i32, bool> {
        &self.paremias
    }

    /// Offsets whose daily readings are suppressed.
    pub fn no_daily(&self) -> &BTreeSet<i32> {
        &self.no_daily
    }

    /// Returns whether daily readings run on this offset.
    pub fn has_daily_readings(&self, pdist: i32) -> bool {
        !self.no_daily.contains(&pdist)
    }

    /// Returns whether this offset receives the next day's paremias.
    pub fn has_moved_paremias(&self, pdist: i32) -> bool {
        self.paremias.get(&pdist) == Some(&true)
    }

    /// Returns whether this offset's own paremias were moved away.
    pub fn has_no_paremias(&self, pdist: i32) -> bool {
        self.paremias.get(&pdist) == Some(&false)
    }

    /// Converts a fixed-cycle date to an offset from this year's Pascha.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError`] if the month/day pair is invalid under
    /// this year's reckoning.
    pub fn date_to_pdist(&self, month: u8, day: u8, year: i32) -> Result<i32, ComputusError> {
        Ok((Date::new(self.calendar, year, month, day)?.jdn() - self.pascha_jdn) as i32)
    }
}

/// Anchor values the float table is built from.
struct FloatInput {
    fathers_six: i32,
    fathers_seven: i32,
    demetrius_saturday: i32,
    synaxis_unmercenaries: i32,
    forefathers: i32,
    new_martyrs_russia: i32,
    nativity_theotokos: i32,
    elevation: i32,
    theophany: i32,
    nativity: i32,
    annunciation: i32,
    elevation_weekends: SurroundingWeekends,
    theophany_weekends: SurroundingWeekends,
    nativity_weekends: SurroundingWeekends,
}

// Keep the Python-dict insert semantics explicit: later rules overwrite
// earlier ones on the same key.
fn build_floats(input: &FloatInput) -> BTreeMap<i32, FloatIndex> {
    let mut floats = BTreeMap::new();

    floats.insert(input.fathers_six, FloatIndex::FathersSix);
    floats.insert(input.fathers_seven, FloatIndex::FathersSeventh);
    floats.insert(input.demetrius_saturday, FloatIndex::DemetriusSaturday);
    floats.insert(input.synaxis_unmercenaries, FloatIndex::SynaxisUnmercenaries);
    floats.insert(input.elevation_weekends.sun_before, FloatIndex::SunBeforeElevation);
    floats.insert(input.elevation_weekends.sat_after, FloatIndex::SatAfterElevation);
    floats.insert(input.elevation_weekends.sun_after, FloatIndex::SunAfterElevation);
    floats.insert(input.forefathers, FloatIndex::SunForefathers);
    floats.insert(input.theophany_weekends.sat_after, FloatIndex::SatAfterTheophany);
    floats.insert(input.theophany_weekends.sun_after, FloatIndex::SunAfterTheophany);
    floats.insert(input.new_martyrs_russia, FloatIndex::NewMartyrsRussia);

    if input.elevation_weekends.sat_before == input.nativity_theotokos {
        // The Saturday-before service cannot displace the Nativity of the
        // Theotokos; its readings move to the eve of the Elevation.
        floats.insert(input.elevation - 1, FloatIndex::SatBeforeElevationMoved);
    } else {
        floats.insert(input.elevation_weekends.sat_before, FloatIndex::SatBeforeElevation);
    }

    let nativity_eve = input.nativity - 1;
    if nativity_eve == input.nativity_weekends.sat_before {
        // Nativity on Sunday: Royal Hours retreat to Friday.
        floats.insert(input.nativity - 2, FloatIndex::RoyalHoursNativityFriday);
        floats.insert(input.nativity_weekends.sun_before, FloatIndex::SunBeforeNativity);
        floats.insert(nativity_eve, FloatIndex::SatBeforeNativityEve);
    } else if nativity_eve == input.nativity_weekends.sun_before {
        // Nativity on Monday: Royal Hours retreat to Friday.
        floats.insert(input.nativity - 3, FloatIndex::RoyalHoursNativityFriday);
        floats.insert(input.nativity_weekends.sat_before, FloatIndex::SatBeforeNativity);
        floats.insert(nativity_eve, FloatIndex::SunBeforeNativityEve);
    } else {
        floats.insert(nativity_eve, FloatIndex::EveNativity);
        floats.insert(input.nativity_weekends.sat_before, FloatIndex::SatBeforeNativity);
        floats.insert(input.nativity_weekends.sun_before, FloatIndex::SunBeforeNativity);
    }

    match Weekday::from_pdist(input.nativity) {
        Weekday::Sunday => {
            floats.insert(
                input.nativity_weekends.sat_after,
                FloatIndex::SatAfterNativityBeforeTheophany,
            );
            floats.insert(input.nativity + 1, FloatIndex::SunAfterNativityMonday);
            floats.insert(input.theophany_weekends.sun_before, FloatIndex::SunBeforeTheophany);
            floats.insert(input.theophany - 1, FloatIndex::TheophanyEve);
        }
        Weekday::Monday => {
            floats.insert(
                input.nativity_weekends.sat_after,
                FloatIndex::SatAfterNativityBeforeTheophany,
            );
            floats.insert(input.nativity_weekends.sun_after, FloatIndex::SunAfterNativity);
            floats.insert(input.theophany - 5, FloatIndex::SatBeforeTheophanyJan);
            floats.insert(input.theophany - 1, FloatIndex::TheophanyEve);
        }
        Weekday::Tuesday => {
            floats.insert(input.nativity_weekends.sat_after, FloatIndex::SatAfterNativity);
            floats.insert(input.nativity_weekends.sun_after, FloatIndex::SunAfterNativity);
            floats.insert(
                input.theophany_weekends.sat_before,
                FloatIndex::SatBeforeTheophanyEve,
            );
            floats.insert(input.theophany - 5, FloatIndex::SatBeforeTheophanyJan);
            floats.insert(input.theophany - 2, FloatIndex::RoyalHoursTheophanyFriday);
        }
        Weekday::Wednesday => {
            floats.insert(input.nativity_weekends.sat_after, FloatIndex::SatAfterNativity);
            floats.insert(input.nativity_weekends.sun_after, FloatIndex::SunAfterNativity);
            floats.insert(input.theophany_weekends.sat_before, FloatIndex::SatBeforeTheophany);
            floats.insert(
                input.theophany_weekends.sun_before,
                FloatIndex::SunBeforeTheophanyEve,
            );
            floats.insert(input.theophany - 3, FloatIndex::RoyalHoursTheophanyFriday);
        }
        Weekday::Thursday | Weekday::Friday => {
            floats.insert(input.nativity_weekends.sat_after, FloatIndex::SatAfterNativity);
            floats.insert(input.nativity_weekends.sun_after, FloatIndex::SunAfterNativity);
            floats.insert(input.theophany_weekends.sat_before, FloatIndex::SatBeforeTheophany);
            floats.insert(input.theophany_weekends.sun_before, FloatIndex::SunBeforeTheophany);
            floats.insert(input.theophany - 1, FloatIndex::TheophanyEve);
        }
        Weekday::Saturday => {
            floats.insert(input.nativity + 6, FloatIndex::SatAfterNativityFriday);
            floats.insert(input.nativity_weekends.sun_after, FloatIndex::SunAfterNativity);
            floats.insert(input.theophany_weekends.sat_before, FloatIndex::SatBeforeTheophany);
            floats.insert(input.theophany_weekends.sun_before, FloatIndex::SunBeforeTheophany);
            floats.insert(input.theophany - 1, FloatIndex::TheophanyEve);
        }
    }

    match Weekday::from_pdist(input.annunciation) {
        Weekday::Saturday => {
            floats.insert(input.annunciation - 1, FloatIndex::AnnunciationParemFriday);
            floats.insert(input.annunciation, FloatIndex::AnnunciationSat);
        }
        Weekday::Sunday => {
            floats.insert(input.annunciation, FloatIndex::AnnunciationSun);
        }
        Weekday::Monday => {
            floats.insert(input.annunciation, FloatIndex::AnnunciationMon);
        }
        _ => {
            floats.insert(input.annunciation - 1, FloatIndex::AnnunciationParemEve);
            floats.insert(input.annunciation, FloatIndex::AnnunciationWeekday);
        }
    }

    floats
}

// Sunday Gospels skipped over during the festal season, in the order they
// are taken back up after Theophany.
fn build_reserves(extra_sundays: i32, forefathers: i32, lukan_jump: i32) -> Vec<i32> {
    let mut reserves = Vec::new();
    if extra_sundays == 0 {
        return reserves;
    }

    // The Gospel of the first Sunday of Luke belongs to the eighteenth
    // Sunday after Pentecost; the thirteenth Sunday of Luke closes the
    // pre-festal stretch.
    let first_luke = 49 + 7 * 18;
    let thirteenth_luke = first_luke + 7 * 13;

    let start = forefathers + lukan_jump + 7;
    reserves.extend((start..=thirteenth_luke).step_by(7));

    let remainder = extra_sundays - reserves.len() as i32;
    if remainder > 0 {
        let start = first_luke - remainder * 7;
        let end = first_luke - 6;
        reserves.extend((start..end).step_by(7));
    }

    reserves
}
