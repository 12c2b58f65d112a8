use typikon_computus::{
    pascha_distance, pascha_gregorian_date, pascha_jdn, surrounding_weekends, Calendar,
    ComputusError, Date, Weekday,
};

#[test]
fn calendar_roundtrip_every_day_of_2018() {
    // Every Gregorian day of a year survives the Julian round trip.
    for month in 1u8..=12 {
        let days = Calendar::Gregorian.days_in_month(2018, month).unwrap();
        for day in 1..=days {
            let date = Date::gregorian(2018, month, day).unwrap();
            let back = date.to_julian().unwrap().to_gregorian().unwrap();
            assert_eq!(
                back, date,
                "roundtrip failed for 2018-{month:02}-{day:02}"
            );
        }
    }
}

#[test]
fn julian_reckoning_runs_behind() {
    // 13 days behind through 2099, 14 from March 2100.
    let pairs: &[((i32, u8, u8), (i32, u8, u8))] = &[
        ((2018, 4, 8), (2018, 3, 26)),
        ((2019, 1, 7), (2018, 12, 25)),
        ((2100, 5, 2), (2100, 4, 18)),
    ];
    for &((gy, gm, gd), (jy, jm, jd)) in pairs {
        let greg = Date::gregorian(gy, gm, gd).unwrap();
        let julian = greg.to_julian().unwrap();
        assert_eq!(
            (julian.year(), julian.month(), julian.day()),
            (jy, jm, jd),
            "unexpected Julian label for {greg}"
        );
    }
}

#[test]
fn pascha_falls_on_sunday_every_supported_year() {
    for year in (1583..=4099).step_by(97) {
        let jdn = pascha_jdn(year).unwrap();
        assert_eq!(
            Weekday::from_jdn(jdn),
            Weekday::Sunday,
            "Pascha of {year} not on a Sunday"
        );
    }
}

#[test]
fn distance_agrees_with_weekday() {
    // The offset modulo 7 names the same weekday as the Julian day number.
    for offset in [-70, -48, -1, 0, 31, 49, 169, 260] {
        let jdn = pascha_jdn(2018).unwrap() + i64::from(offset);
        let date = Date::from_jdn(Calendar::Gregorian, jdn);
        let d = pascha_distance(date).unwrap();
        assert_eq!(
            Weekday::from_pdist(d.pdist),
            date.weekday(),
            "weekday mismatch at offset {offset}"
        );
    }
}

#[test]
fn year_boundary_reanchoring_is_continuous() {
    // Walking across the cutoff never skips or repeats a day.
    let pascha = pascha_gregorian_date(2018).unwrap();
    let mut prev: Option<(i32, i32)> = None;
    for offset in -90i64..=-60 {
        let date = Date::from_jdn(Calendar::Gregorian, pascha.jdn() + offset);
        let d = pascha_distance(date).unwrap();
        if let Some((py, pp)) = prev {
            if d.year == py {
                assert_eq!(d.pdist, pp + 1, "gap at offset {offset}");
            } else {
                assert_eq!(d.year, py + 1, "year jumped at offset {offset}");
                assert_eq!(d.pdist, -77, "re-anchor must land on the cutoff");
            }
        }
        prev = Some((d.year, d.pdist));
    }
    let last = prev.unwrap();
    assert_eq!(last.0, 2018);
}

#[test]
fn surrounding_weekends_bracket_feasts() {
    // Elevation of the Cross 2018 fell on a Friday, 159 days after Pascha.
    let elevation = pascha_distance(Date::gregorian(2018, 9, 14).unwrap()).unwrap();
    assert_eq!(elevation.pdist, 159);
    assert_eq!(Weekday::from_pdist(elevation.pdist), Weekday::Friday);
    let w = surrounding_weekends(elevation.pdist);
    assert_eq!((w.sat_before, w.sun_before), (153, 154));
    assert_eq!((w.sat_after, w.sun_after), (160, 161));
}

#[test]
fn unsupported_years_are_rejected_at_every_entry_point() {
    let errs = [
        pascha_jdn(1582).unwrap_err(),
        pascha_gregorian_date(4100).unwrap_err(),
        Date::gregorian(1582, 1, 1).unwrap().to_julian().unwrap_err(),
        pascha_distance(Date::julian(4100, 6, 1).unwrap()).unwrap_err(),
    ];
    for err in errs {
        assert!(
            matches!(err, ComputusError::UnsupportedYear { .. }),
            "expected UnsupportedYear, got {err:?}"
        );
    }
}
