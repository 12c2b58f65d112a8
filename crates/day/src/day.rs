//! The composite liturgical day.
//!
//! A [`Day`] merges every record that lands on one date: movable-cycle
//! rows keyed by offset from Pascha, the floating feast observed there
//! if any, and fixed-cycle rows keyed by month and day. The merged
//! scalars (feast level, fast level, fast exception) take the maximum
//! across records, then the fasting adjustments rewrite them in place.

use typikon_computus::{Date, Weekday};
use typikon_records::levels::{
    fast_exception_desc, feast_level_desc, FastLevel, FAST_FREE, NO_OVERRIDES,
};
use typikon_records::query::{CommemorationQuery, DayKey, ReadingClause, ReadingQuery};
use typikon_records::{
    sources, PassageResolver, ReadingRecord, RecordStore, StoreError, SupplementalCommemoration,
    SupplementalSource, Verse,
};
use typikon_year::Year;

use crate::error::DayError;
use crate::position::DayPosition;

/// A selected lectionary reading, with its verse text once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub record: ReadingRecord,
    /// Verse text, filled by [`Day::fetch_passages`].
    pub passage: Option<Vec<Verse>>,
}

impl Reading {
    fn new(record: ReadingRecord) -> Self {
        Self { record, passage: None }
    }
}

/// A fully composed liturgical day.
///
/// Built by [`DayPosition::resolve`]; everything except the two reading
/// lists is final from that point. Readings are selected on first request
/// and memoized.
#[derive(Debug, Clone)]
pub struct Day {
    position: DayPosition,

    titles: Vec<String>,
    saints: Vec<String>,
    minimal_saints: Vec<String>,
    feasts: Vec<String>,
    service_notes: Vec<String>,
    stories: Vec<SupplementalCommemoration>,

    feast_level: i8,
    fast_level: FastLevel,
    fast_exception: u8,

    readings: Option<Vec<Reading>>,
    abbreviated_readings: Option<Vec<Reading>>,
}

impl Day {
    /// Queries the store under all three day keys and folds the rows into
    /// one composite.
    pub(crate) fn collect(position: DayPosition, store: &dyn RecordStore) -> Result<Self, DayError> {
        let mut query = CommemorationQuery::new().key(DayKey::Pdist(position.pdist()));
        if let Some(float_index) = position.float_index() {
            query = query.key(DayKey::Pdist(float_index.value()));
        }
        query = query.key(DayKey::MonthDay { month: position.month(), day: position.day() });

        let records = store.commemorations(&query)?;

        let mut titles = Vec::new();
        let mut saints = Vec::new();
        let mut minimal_saints = Vec::new();
        let mut feasts = Vec::new();
        let mut service_notes = Vec::new();
        for record in &records {
            if let Some(title) = record.full_title() {
                titles.push(title);
            }
            for saint in record.saint.split(';') {
                let saint = saint.trim();
                if !saint.is_empty() {
                    saints.push(saint.to_string());
                }
            }
            if !record.saint.is_empty() {
                minimal_saints.push(record.saint.clone());
            }
            if !record.feast_name.is_empty() {
                feasts.push(record.feast_name.clone());
            }
            if !record.service_note.is_empty() {
                service_notes.push(record.service_note.clone());
            }
        }

        // A day with no records at all sits at the floor of every scale.
        let feast_level = records.iter().map(|r| r.feast_level).max().unwrap_or(0);
        let fast_level = records.iter().map(|r| r.fast).max().unwrap_or_default();
        let fast_exception = records.iter().map(|r| r.fast_exception).max().unwrap_or(0);

        Ok(Self {
            position,
            titles,
            saints,
            minimal_saints,
            feasts,
            service_notes,
            stories: Vec::new(),
            feast_level,
            fast_level,
            fast_exception,
            readings: None,
            abbreviated_readings: None,
        })
    }

    /// Folds in rows from a supplemental source, dropping those whose
    /// short title already appears inside a collected commemoration.
    pub(crate) fn merge_supplement(
        &mut self,
        supplement: &dyn SupplementalSource,
    ) -> Result<(), DayError> {
        let stories = supplement.by_month_day(self.position.month(), self.position.day())?;
        if stories.is_empty() {
            return Ok(());
        }

        let known: Vec<&String> = self
            .titles
            .iter()
            .chain(&self.feasts)
            .chain(&self.saints)
            .collect();

        let mut additions = Vec::new();
        for story in &stories {
            let already_known = match &story.alt_title {
                Some(alt) if !alt.is_empty() => known.iter().any(|c| c.contains(alt.as_str())),
                _ => false,
            };
            if !already_known {
                additions.push(story.title.clone());
            }
        }
        self.saints.extend(additions);
        self.stories = stories;
        Ok(())
    }

    /// Rewrites the merged fast level and exception for the weekday and
    /// season. Must run after collection since it reads the merged values.
    pub(crate) fn apply_fasting_adjustments(&mut self) {
        if self.fast_exception == FAST_FREE {
            self.fast_level = FastLevel::NoFast;
            return;
        }

        // The Apostles' fast cannot come from the records: it begins on
        // the movable cycle but ends on the fixed feast of Peter and Paul.
        if self.position.pdist() > 56 && self.position.pdist() < self.year().peter_and_paul() {
            self.fast_level = FastLevel::ApostlesFast;
            if self.position.pdist() == 57 {
                self.service_notes.push("Beginning of Apostles' Fast".to_string());
            }
        }

        match self.fast_level {
            FastLevel::GreatLent => {
                // No fish on minor feast days in Lent.
                if self.fast_exception == 2 {
                    self.fast_exception -= 1;
                }
            }
            FastLevel::DormitionFast => {
                if matches!(self.position.weekday(), Weekday::Sunday | Weekday::Saturday)
                    && self.fast_exception == 0
                {
                    self.fast_exception += 1;
                }
            }
            FastLevel::ApostlesFast | FastLevel::NativityFast => {
                match self.position.weekday() {
                    Weekday::Tuesday | Weekday::Thursday => {
                        if self.fast_exception == 0 {
                            self.fast_exception += 1;
                        }
                    }
                    Weekday::Wednesday | Weekday::Friday => {
                        if self.feast_level < 4 && self.fast_exception > 1 {
                            self.fast_exception = 1;
                        }
                    }
                    Weekday::Sunday | Weekday::Saturday => {
                        self.fast_exception = 2;
                    }
                    Weekday::Monday => {}
                }

                // No fish in the week right before Nativity.
                let nativity = self.year().nativity();
                if self.position.pdist() > nativity - 6
                    && self.position.pdist() < nativity - 1
                    && self.fast_exception > 1
                {
                    self.fast_exception = 1;
                }
            }
            FastLevel::NoFast | FastLevel::Fast => {}
        }

        // The eves of Nativity and Theophany are wine and oil days when
        // they fall on a weekend.
        if (self.position.pdist() == self.year().nativity() - 1
            || self.position.pdist() == self.year().theophany() - 1)
            && matches!(self.position.weekday(), Weekday::Sunday | Weekday::Saturday)
        {
            self.fast_exception = 1;
        }
    }

    /// The date under this day's reckoning.
    pub fn date(&self) -> Date {
        self.position.date()
    }

    /// The civil Gregorian date.
    pub fn gregorian_date(&self) -> Date {
        self.position.gregorian_date()
    }

    pub fn jdn(&self) -> i64 {
        self.position.jdn()
    }

    /// Days from this liturgical year's Pascha.
    pub fn pdist(&self) -> i32 {
        self.position.pdist()
    }

    pub fn weekday(&self) -> Weekday {
        self.position.weekday()
    }

    /// Fixed-cycle month under this reckoning.
    pub fn month(&self) -> u8 {
        self.position.month()
    }

    /// Fixed-cycle day of month under this reckoning.
    pub fn day(&self) -> u8 {
        self.position.day()
    }

    /// The liturgical year tables this day resolved against.
    pub fn year(&self) -> &Year {
        self.position.year()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Saint names, split on the record delimiter, plus any supplemental
    /// additions.
    pub fn saints(&self) -> &[String] {
        &self.saints
    }

    /// Saint entries as the records carry them, unsplit.
    pub fn minimal_saints(&self) -> &[String] {
        &self.minimal_saints
    }

    pub fn feasts(&self) -> &[String] {
        &self.feasts
    }

    pub fn service_notes(&self) -> &[String] {
        &self.service_notes
    }

    /// Supplemental commemorations with their hagiographies.
    pub fn stories(&self) -> &[SupplementalCommemoration] {
        &self.stories
    }

    pub fn feast_level(&self) -> i8 {
        self.feast_level
    }

    pub fn feast_level_desc(&self) -> &'static str {
        feast_level_desc(self.feast_level)
    }

    pub fn fast_level(&self) -> FastLevel {
        self.fast_level
    }

    pub fn fast_level_desc(&self) -> &'static str {
        self.fast_level.desc()
    }

    pub fn fast_exception(&self) -> u8 {
        self.fast_exception
    }

    pub fn fast_exception_desc(&self) -> &'static str {
        fast_exception_desc(self.fast_exception)
    }

    /// A one-line title summarizing the day's commemorations.
    pub fn summary_title(&self) -> Option<String> {
        if self.position.weekday() == Weekday::Sunday
            || (self.position.pdist() > -9 && self.position.pdist() < 7)
        {
            if !self.titles.is_empty() {
                return Some(self.titles.join("; "));
            }
        }
        if !self.feasts.is_empty() {
            return Some(self.feasts.join("; "));
        }
        if !self.saints.is_empty() {
            return Some(self.minimal_saints.join("; "));
        }
        if !self.titles.is_empty() {
            return Some(self.titles.join("; "));
        }
        None
    }

    /// Days from the Pascha preceding this day.
    ///
    /// Equal to `pdist` from Pascha onward; before Pascha it measures back
    /// to the previous year's Pascha instead, so the Sunday cycles keep
    /// counting across the year boundary.
    fn preceding_pdist(&self) -> i32 {
        if self.position.pdist() >= 0 {
            self.position.pdist()
        } else {
            (self.position.jdn() - self.year().previous_pascha_jdn()) as i32
        }
    }

    /// The tone of the week, 0 when the octoechos is not sung.
    pub fn tone(&self) -> u8 {
        let pdist = self.position.pdist();

        // From Lazarus Saturday through Holy Saturday the octoechos rests.
        if pdist > -9 && pdist < 0 {
            return 0;
        }

        // Bright Week cycles a tone a day, skipping somber tone 7.
        if (0..7).contains(&pdist) {
            const BRIGHT_TONES: [u8; 7] = [1, 2, 3, 4, 5, 6, 8];
            return BRIGHT_TONES[pdist as usize];
        }

        // Thomas Sunday (pdist 7) starts the cycle as the first Sunday.
        let nth_sunday = self.preceding_pdist().div_euclid(7);
        ((nth_sunday - 1).rem_euclid(8) + 1) as u8
    }

    /// The Sunday Eothinon Gospel number, 1..=11, if one is appointed.
    pub fn eothinon_gospel(&self) -> Option<u8> {
        if self.position.weekday() != Weekday::Sunday {
            return None;
        }
        // None from Holy Week through Pentecost.
        if self.position.pdist() > -8 && self.position.pdist() < 50 {
            return None;
        }
        // High-ranking feasts preempt the Eothinon.
        if self.feast_level >= 7 {
            return None;
        }

        // An 11-cycle from the first Sunday after Pentecost.
        let nth_sunday = (self.preceding_pdist() - 49).div_euclid(7);
        Some(((nth_sunday - 1).rem_euclid(11) + 1) as u8)
    }

    /// Returns whether the Memorial Saturday readings are cancelled.
    ///
    /// Happens when one of the Lenten memorial Saturdays collides with the
    /// Forty Martyrs or the days around Annunciation.
    pub fn has_no_memorial(&self) -> bool {
        matches!(self.position.pdist(), -36 | -29 | -22)
            && self.position.month() == 3
            && matches!(self.position.day(), 9 | 24 | 25 | 26)
    }

    /// Returns whether a fixed-cycle Matins Gospel may be read today.
    ///
    /// On Sundays the Eothinon normally takes its place unless a great
    /// feast intervenes.
    pub fn has_matins_gospel(&self) -> bool {
        if self.position.weekday() != Weekday::Sunday {
            return true;
        }
        if self.position.pdist() > -8 && self.position.pdist() < 50 {
            return false;
        }
        if self.feast_level < 7 {
            return false;
        }
        true
    }

    /// Returns whether this day's paremias were moved to the previous day.
    pub fn has_no_paremias(&self) -> bool {
        self.year().has_no_paremias(self.position.pdist())
    }

    /// Returns whether this day hosts the next day's paremias.
    pub fn has_moved_paremias(&self) -> bool {
        self.year().has_moved_paremias(self.position.pdist())
    }

    /// Returns whether the daily readings run today.
    pub fn has_daily_readings(&self) -> bool {
        self.year().has_daily_readings(self.position.pdist())
    }

    /// The movable-cycle offset the Epistle is read from, if any.
    ///
    /// Late in the cycle the offsets wrap into the next year's records,
    /// since the data does not extend a full civil year past Pascha.
    pub fn epistle_pdist(&self) -> Option<i32> {
        if !self.has_daily_readings() {
            return None;
        }
        let pdist = self.position.pdist();

        // The 29th Sunday after Pentecost takes the Forefathers Epistle.
        if pdist == 49 + 29 * 7 {
            return Some(self.year().forefathers());
        }

        // From the 32nd week the cycle wraps to the next year's records.
        if pdist >= 49 + 32 * 7 {
            return Some((self.position.jdn() - self.year().next_pascha_jdn()) as i32);
        }

        Some(pdist)
    }

    /// The movable-cycle offset the Gospel is read from, if any.
    ///
    /// Carries the Lukan jump, the Forefathers collision, the reserve
    /// Gospels after Theophany, and the next-year wraparound.
    pub fn gospel_pdist(&self) -> Option<i32> {
        if !self.has_daily_readings() {
            return None;
        }
        let year = self.year();
        let pdist = self.position.pdist();

        // The 11th Sunday of Luke reads the Forefathers Gospel; on
        // Forefathers Sunday itself the festal float supplies the Gospel.
        if pdist == year.first_sun_luke() + 10 * 7 {
            return Some(year.forefathers() + year.lukan_jump());
        }

        // Sundays after Theophany take the Gospels left unread at the jump.
        if self.position.weekday() == Weekday::Sunday
            && pdist > year.sun_after_theophany()
            && year.extra_sundays() > 1
        {
            let nth = (pdist - year.sun_after_theophany()).div_euclid(7);
            let reserve = year.reserves().get(nth as usize - 1).copied();
            if reserve.is_none() {
                tracing::warn!(
                    pdist,
                    nth,
                    reserves = year.reserves().len(),
                    "no reserve gospel for this sunday"
                );
            }
            return reserve;
        }

        // Past the Saturday before Theophany, wrap to the next year.
        if pdist > year.sat_before_theophany() {
            return Some((self.position.jdn() - year.next_pascha_jdn()) as i32);
        }

        // After the Sunday after the Elevation, jump into Luke.
        if pdist > year.sun_after_elevation() {
            return Some(pdist + year.lukan_jump());
        }

        Some(pdist)
    }

    /// Selects the full ordered reading list, memoized after the first
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::Store`] if the store cannot be read.
    pub fn readings(&mut self, store: &dyn RecordStore) -> Result<&[Reading], DayError> {
        if self.readings.is_none() {
            let selected = self.select_readings(store)?;
            self.readings = Some(selected);
        }
        Ok(self.readings.as_deref().unwrap_or_default())
    }

    /// Selects the abbreviated reading list (at most one Epistle and one
    /// Gospel), memoized after the first call.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::Store`] if the store cannot be read.
    pub fn abbreviated_readings(&mut self, store: &dyn RecordStore) -> Result<&[Reading], DayError> {
        if self.abbreviated_readings.is_none() {
            let selected = self.select_abbreviated_readings(store)?;
            self.abbreviated_readings = Some(selected);
        }
        Ok(self.abbreviated_readings.as_deref().unwrap_or_default())
    }

    /// Fills in the verse text for every selected reading that does not
    /// have it yet.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::Store`] if a passage cannot be resolved.
    pub fn fetch_passages(&mut self, resolver: &dyn PassageResolver) -> Result<(), DayError> {
        let selected = self
            .readings
            .iter_mut()
            .flatten()
            .chain(self.abbreviated_readings.iter_mut().flatten());
        for reading in selected {
            if reading.passage.is_none() {
                reading.passage = Some(resolver.passage(&reading.record.pericope)?);
            }
        }
        Ok(())
    }

    /// Positions of the abbreviated readings inside the full list, matched
    /// by display citation.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::ReadingsNotSelected`] until both lists have
    /// been selected.
    pub fn abbreviated_reading_indices(&self) -> Result<Vec<usize>, DayError> {
        let (Some(full), Some(abbreviated)) = (&self.readings, &self.abbreviated_readings) else {
            return Err(DayError::ReadingsNotSelected);
        };
        let displays: Vec<&str> =
            full.iter().map(|r| r.record.pericope.display.as_str()).collect();
        abbreviated
            .iter()
            .map(|r| {
                displays
                    .iter()
                    .position(|d| *d == r.record.pericope.display)
                    .ok_or_else(|| {
                        StoreError::Data {
                            reason: format!(
                                "abbreviated reading {} missing from the full list",
                                r.record.pericope.display
                            ),
                        }
                        .into()
                    })
            })
            .collect()
    }

    fn select_readings(&self, store: &dyn RecordStore) -> Result<Vec<Reading>, DayError> {
        // Movable cycle, minus the Epistle and Gospel which come from
        // their own adjusted offsets below.
        let mut query = ReadingQuery::new().clause(
            ReadingClause::at(DayKey::Pdist(self.position.pdist()))
                .except_source(sources::GOSPEL)
                .except_source(sources::EPISTLE),
        );

        if let Some(gospel_pdist) = self.gospel_pdist() {
            let mut clause =
                ReadingClause::at(DayKey::Pdist(gospel_pdist)).only_sources(&[sources::GOSPEL]);
            if self.has_no_memorial() {
                clause = clause.except_desc(sources::DEPARTED);
            }
            query = query.clause(clause);
        }

        if let Some(epistle_pdist) = self.epistle_pdist() {
            let mut clause =
                ReadingClause::at(DayKey::Pdist(epistle_pdist)).only_sources(&[sources::EPISTLE]);
            if self.has_no_memorial() {
                clause = clause.except_desc(sources::DEPARTED);
            }
            query = query.clause(clause);
        }

        if let Some(float_index) = self.position.float_index() {
            query = query.clause(ReadingClause::at(DayKey::Pdist(float_index.value())));
        }

        // The Eothinon readings live at a synthetic offset block.
        if let Some(eothinon) = self.eothinon_gospel() {
            query = query.clause(ReadingClause::at(DayKey::Pdist(i32::from(eothinon) + 700)));
        }

        if self.has_moved_paremias() {
            let next = Date::from_jdn(self.date().calendar(), self.jdn() + 1);
            query = query.clause(
                ReadingClause::at(DayKey::MonthDay { month: next.month(), day: next.day() })
                    .only_sources(&[sources::VESPERS]),
            );
        }

        let mut fixed =
            ReadingClause::at(DayKey::MonthDay { month: self.month(), day: self.day() });
        if !self.has_matins_gospel() {
            fixed = fixed.except_source(sources::MATINS_GOSPEL);
        }
        if self.has_no_paremias() {
            fixed = fixed.except_source(sources::VESPERS);
        }
        if self.annunciation_leavetaking_without_liturgy() {
            fixed = fixed.except_desc(sources::THEOTOKOS);
        }
        query = query.clause(fixed);

        let records = store.readings(&query)?;
        let mut readings: Vec<Reading> = Vec::with_capacity(records.len());
        for record in records {
            let lenten_matins_gospel = self.position.pdist() > -42
                && self.position.pdist() < -7
                && self.feast_level < 7
                && record.source == sources::MATINS_GOSPEL;
            if lenten_matins_gospel {
                // The Lenten Matins Gospel is read first.
                readings.insert(0, Reading::new(record));
            } else {
                readings.push(Reading::new(record));
            }
        }
        Ok(readings)
    }

    fn select_abbreviated_readings(
        &self,
        store: &dyn RecordStore,
    ) -> Result<Vec<Reading>, DayError> {
        // The weekday Old Testament readings in Lent ride along here.
        let mut query = ReadingQuery::new().clause(
            ReadingClause::at(DayKey::Pdist(self.position.pdist()))
                .except_source(sources::GOSPEL)
                .except_source(sources::EPISTLE),
        );

        if let Some(gospel_pdist) = self.gospel_pdist() {
            let mut clause =
                ReadingClause::at(DayKey::Pdist(gospel_pdist)).only_sources(&[sources::GOSPEL]);
            if self.has_no_memorial() {
                clause = clause.except_desc(sources::DEPARTED);
            }
            query = query.clause(clause);
        }

        if let Some(epistle_pdist) = self.epistle_pdist() {
            let mut clause =
                ReadingClause::at(DayKey::Pdist(epistle_pdist)).only_sources(&[sources::EPISTLE]);
            if self.has_no_memorial() {
                clause = clause.except_desc(sources::DEPARTED);
            }
            query = query.clause(clause);
        }

        // Fixed-cycle Epistles and Gospels, but not during Clean Week or
        // Holy Week and not for the most minor commemorations.
        if self.feast_level >= 2 && self.fast_exception != NO_OVERRIDES {
            let mut fixed =
                ReadingClause::at(DayKey::MonthDay { month: self.month(), day: self.day() })
                    .only_sources(&[sources::EPISTLE, sources::GOSPEL]);
            if self.annunciation_leavetaking_without_liturgy() {
                fixed = fixed.except_desc(sources::THEOTOKOS);
            }
            query = query.clause(fixed);
        }

        if let Some(float_index) = self.position.float_index() {
            query = query.clause(
                ReadingClause::at(DayKey::Pdist(float_index.value()))
                    .only_sources(&[sources::EPISTLE, sources::GOSPEL]),
            );
        }

        let records = store.readings(&query)?;

        // Collapse to the first Epistle and the Gospel that follows it.
        let epistle_pos = records.iter().position(|r| r.source == sources::EPISTLE);
        let first_gospel_pos = records.iter().position(|r| r.source == sources::GOSPEL);
        if let (Some(epistle), Some(first_gospel)) = (epistle_pos, first_gospel_pos) {
            let gospel = records[epistle..]
                .iter()
                .position(|r| r.source == sources::GOSPEL)
                .map(|offset| epistle + offset)
                .unwrap_or_else(|| {
                    // Known data defect: some epistles are filed after
                    // their gospel. Take the first gospel and flag it.
                    tracing::warn!(
                        pdist = self.position.pdist(),
                        date = %self.date(),
                        "no gospel follows the selected epistle; taking the first"
                    );
                    first_gospel
                });
            return Ok(vec![
                Reading::new(records[epistle].clone()),
                Reading::new(records[gospel].clone()),
            ]);
        }

        Ok(records.into_iter().map(Reading::new).collect())
    }

    // The leavetaking of Annunciation (March 26 under this reckoning) has
    // no Theotokos readings on weekdays without a liturgy.
    fn annunciation_leavetaking_without_liturgy(&self) -> bool {
        self.position.month() == 3
            && self.position.day() == 26
            && matches!(
                self.position.weekday(),
                Weekday::Monday | Weekday::Tuesday | Weekday::Thursday
            )
    }
}
