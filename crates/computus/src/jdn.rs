//! Raw Julian day number conversions.
//!
//! All conversions are pure integer arithmetic. The forward directions
//! follow the Fliegel & Van Flandern formulas; the inverses recover the
//! calendar date from a Julian day number by base-146097 (Gregorian) or
//! base-1461 (Julian) cycle decomposition.

/// Converts a proleptic Gregorian calendar date to a Julian day number.
pub(crate) fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let mut y = i64::from(year);
    let mut m = i64::from(month);
    if m > 2 {
        m -= 3;
    } else {
        m += 9;
        y -= 1;
    }
    let century = y.div_euclid(100);
    let ya = y - 100 * century;
    146097 * century / 4 + 1461 * ya / 4 + (153 * m + 2) / 5 + i64::from(day) + 1721119
}

/// Converts a Julian calendar date to a Julian day number.
pub(crate) fn julian_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    367 * y - 7 * (y + 5001 + (m - 9) / 7) / 4 + 275 * m / 9 + i64::from(day) + 1729777
}

/// Converts a Julian day number to a proleptic Gregorian calendar date.
pub(crate) fn jdn_to_gregorian(jdn: i64) -> (i32, u8, u8) {
    let mut l = jdn + 68569;
    let n = 4 * l / 146097;
    l -= (146097 * n + 3) / 4;
    let i = 4000 * (l + 1) / 1461001;
    l = l - 1461 * i / 4 + 31;
    let j = 80 * l / 2447;
    let day = l - 2447 * j / 80;
    let l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year as i32, month as u8, day as u8)
}

/// Converts a Julian day number to a Julian calendar date.
pub(crate) fn jdn_to_julian(jdn: i64) -> (i32, u8, u8) {
    let j = jdn + 1402;
    let k = (j - 1) / 1461;
    let l = j - 1461 * k;
    let n = (l - 1) / 365 - l / 1461;
    let mut i = l - 365 * n + 30;
    let j = 80 * i / 2447;
    let day = i - 2447 * j / 80;
    i = j / 11;
    let month = j + 2 - 12 * i;
    let year = 4 * k + n + i - 4716;
    (year as i32, month as u8, day as u8)
}
