//! Float-table construction across the branchy parts of the calendar:
//! every weekday Nativity can fall on, and every Annunciation placement.

use typikon_computus::{Calendar, Weekday};
use typikon_records::FloatIndex;
use typikon_year::Year;

fn year(y: i32) -> Year {
    Year::new(y, Calendar::Gregorian).unwrap()
}

#[test]
fn nativity_on_sunday_2022() {
    let year = year(2022);
    assert_eq!(year.nativity(), 245);
    assert_eq!(Weekday::from_pdist(year.nativity()), Weekday::Sunday);

    // Royal Hours retreat to Friday and the eve absorbs the Saturday
    // service.
    assert_eq!(year.float_at(243), Some(FloatIndex::RoyalHoursNativityFriday));
    assert_eq!(year.float_at(244), Some(FloatIndex::SatBeforeNativityEve));
    assert_eq!(year.float_at(238), Some(FloatIndex::SunBeforeNativity));
    assert_eq!(year.float_at(251), Some(FloatIndex::SatAfterNativityBeforeTheophany));
    assert_eq!(year.float_at(246), Some(FloatIndex::SunAfterNativityMonday));
    assert_eq!(year.float_at(252), Some(FloatIndex::SunBeforeTheophany));
    assert_eq!(year.float_at(256), Some(FloatIndex::TheophanyEve));
}

#[test]
fn nativity_on_monday_2023() {
    let year = year(2023);
    assert_eq!(year.nativity(), 253);
    assert_eq!(Weekday::from_pdist(year.nativity()), Weekday::Monday);

    assert_eq!(year.float_at(250), Some(FloatIndex::RoyalHoursNativityFriday));
    assert_eq!(year.float_at(251), Some(FloatIndex::SatBeforeNativity));
    assert_eq!(year.float_at(252), Some(FloatIndex::SunBeforeNativityEve));
    assert_eq!(year.float_at(258), Some(FloatIndex::SatAfterNativityBeforeTheophany));
    assert_eq!(year.float_at(259), Some(FloatIndex::SunAfterNativity));
    assert_eq!(year.float_at(260), Some(FloatIndex::SatBeforeTheophanyJan));
    assert_eq!(year.float_at(264), Some(FloatIndex::TheophanyEve));
}

#[test]
fn nativity_on_wednesday_2019() {
    let year = year(2019);
    assert_eq!(year.nativity(), 241);
    assert_eq!(Weekday::from_pdist(year.nativity()), Weekday::Wednesday);

    assert_eq!(year.float_at(240), Some(FloatIndex::EveNativity));
    assert_eq!(year.float_at(237), Some(FloatIndex::SatBeforeNativity));
    assert_eq!(year.float_at(238), Some(FloatIndex::SunBeforeNativity));
    assert_eq!(year.float_at(244), Some(FloatIndex::SatAfterNativity));
    assert_eq!(year.float_at(245), Some(FloatIndex::SunAfterNativity));
    assert_eq!(year.float_at(251), Some(FloatIndex::SatBeforeTheophany));
    assert_eq!(year.float_at(252), Some(FloatIndex::SunBeforeTheophanyEve));
    assert_eq!(year.float_at(250), Some(FloatIndex::RoyalHoursTheophanyFriday));
}

#[test]
fn nativity_on_thursday_2025() {
    let year = year(2025);
    assert_eq!(year.nativity(), 249);
    assert_eq!(Weekday::from_pdist(year.nativity()), Weekday::Thursday);

    assert_eq!(year.float_at(248), Some(FloatIndex::EveNativity));
    assert_eq!(year.float_at(251), Some(FloatIndex::SatAfterNativity));
    assert_eq!(year.float_at(252), Some(FloatIndex::SunAfterNativity));
    assert_eq!(year.float_at(258), Some(FloatIndex::SatBeforeTheophany));
    assert_eq!(year.float_at(259), Some(FloatIndex::SunBeforeTheophany));
    assert_eq!(year.float_at(260), Some(FloatIndex::TheophanyEve));
}

#[test]
fn nativity_on_friday_2020() {
    let year = year(2020);
    assert_eq!(year.nativity(), 250);
    assert_eq!(Weekday::from_pdist(year.nativity()), Weekday::Friday);

    assert_eq!(year.float_at(249), Some(FloatIndex::EveNativity));
    assert_eq!(year.float_at(251), Some(FloatIndex::SatAfterNativity));
    assert_eq!(year.float_at(252), Some(FloatIndex::SunAfterNativity));
    assert_eq!(year.float_at(258), Some(FloatIndex::SatBeforeTheophany));
    assert_eq!(year.float_at(259), Some(FloatIndex::SunBeforeTheophany));
    assert_eq!(year.float_at(261), Some(FloatIndex::TheophanyEve));
}

#[test]
fn nativity_on_saturday_2021() {
    let year = year(2021);
    assert_eq!(year.nativity(), 237);
    assert_eq!(Weekday::from_pdist(year.nativity()), Weekday::Saturday);

    // The Saturday after Nativity would be January 1; its service moves
    // back to Friday.
    assert_eq!(year.float_at(243), Some(FloatIndex::SatAfterNativityFriday));
    assert_eq!(year.float_at(236), Some(FloatIndex::EveNativity));
    assert_eq!(year.float_at(238), Some(FloatIndex::SunAfterNativity));
    assert_eq!(year.float_at(244), Some(FloatIndex::SatBeforeTheophany));
    assert_eq!(year.float_at(245), Some(FloatIndex::SunBeforeTheophany));
    assert_eq!(year.float_at(248), Some(FloatIndex::TheophanyEve));
}

#[test]
fn annunciation_on_saturday_2017() {
    let year = year(2017);
    assert_eq!(year.annunciation(), -22);
    assert_eq!(Weekday::from_pdist(year.annunciation()), Weekday::Saturday);

    assert_eq!(year.float_at(-23), Some(FloatIndex::AnnunciationParemFriday));
    assert_eq!(year.float_at(-22), Some(FloatIndex::AnnunciationSat));
    assert!(
        !year.has_daily_readings(-22),
        "a Saturday Annunciation suppresses the daily readings"
    );
}

#[test]
fn annunciation_on_monday_2019() {
    let year = year(2019);
    assert_eq!(year.annunciation(), -34);
    assert_eq!(Weekday::from_pdist(year.annunciation()), Weekday::Monday);
    assert_eq!(year.float_at(-34), Some(FloatIndex::AnnunciationMon));
    assert_eq!(year.float_at(-35), None);
}

#[test]
fn annunciation_on_a_lenten_weekday_2020() {
    let year = year(2020);
    assert_eq!(year.annunciation(), -25);
    assert_eq!(Weekday::from_pdist(year.annunciation()), Weekday::Wednesday);
    assert_eq!(year.float_at(-26), Some(FloatIndex::AnnunciationParemEve));
    assert_eq!(year.float_at(-25), Some(FloatIndex::AnnunciationWeekday));
}

#[test]
fn structural_invariants_across_centuries() {
    for civil_year in (1584..=4098).step_by(97).chain([1584, 2100, 2400, 4098]) {
        for calendar in [Calendar::Gregorian, Calendar::Julian] {
            let year = Year::new(civil_year, calendar).unwrap();

            assert!(
                year.previous_pascha_jdn() < year.pascha_jdn()
                    && year.pascha_jdn() < year.next_pascha_jdn(),
                "{civil_year}: Paschas must be strictly ordered"
            );
            assert_eq!(
                Weekday::from_jdn(year.pascha_jdn()),
                Weekday::Sunday,
                "{civil_year}: Pascha must be a Sunday"
            );

            assert_eq!(year.lukan_jump() % 7, 0, "{civil_year}: jump is whole weeks");
            assert_eq!(year.first_sun_luke(), year.sun_after_elevation() + 7);

            assert_eq!(Weekday::from_pdist(year.fathers_six()), Weekday::Sunday);
            assert_eq!(Weekday::from_pdist(year.fathers_seven()), Weekday::Sunday);
            assert_eq!(Weekday::from_pdist(year.demetrius_saturday()), Weekday::Saturday);
            assert_eq!(Weekday::from_pdist(year.synaxis_unmercenaries()), Weekday::Sunday);
            assert_eq!(Weekday::from_pdist(year.forefathers()), Weekday::Sunday);
            assert_eq!(Weekday::from_pdist(year.new_martyrs_russia()), Weekday::Sunday);

            for reserve in year.reserves() {
                assert_eq!(reserve % 7, 0, "{civil_year}: reserves hold Sunday offsets");
            }
            let mut sorted = year.reserves().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), year.reserves().len(), "{civil_year}: duplicate reserve");

            for (&pdist, _) in year.floats() {
                assert!(
                    pdist > -78 && pdist < 320,
                    "{civil_year}: float offset {pdist} outside the plausible window"
                );
            }
            assert_eq!(year.float_at(year.forefathers()), Some(FloatIndex::SunForefathers));
            assert_eq!(
                year.float_at(year.sun_after_theophany()),
                Some(FloatIndex::SunAfterTheophany),
            );

            for (&pdist, &moved_here) in year.paremias() {
                if !moved_here {
                    assert_eq!(
                        year.paremias().get(&(pdist - 1)),
                        Some(&true),
                        "{civil_year}: stripped day {pdist} needs a receiving eve"
                    );
                }
            }

            assert!(year.no_daily().contains(&year.nativity()));
            assert!(year.no_daily().contains(&year.theophany()));
            assert!(year.no_daily().contains(&year.forefathers()));
        }
    }
}

#[test]
fn pdist_weekdays_agree_with_jdn_weekdays() {
    let year = year(2033);
    for pdist in [-70, -1, 0, 50, year.nativity(), year.theophany()] {
        assert_eq!(
            Weekday::from_pdist(pdist),
            Weekday::from_jdn(year.pascha_jdn() + i64::from(pdist)),
        );
    }
}
