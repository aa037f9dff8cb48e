use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

const MONTHS_PER_YEAR: u32 = 12;
const QUADRENNIAL: i32 = 4;
const CENTENNIAL: i32 = 100;
const QUATERCENTENNIAL: i32 = 400;
const ADULT_AGE: i32 = 18;

/// A calendar date as typed by the operator, in `M/D/YYYY` form.
///
/// A `Date` is not guaranteed to exist on the calendar: `2/30/2003` parses
/// fine and is only rejected by [`Date::is_valid`]. Ordering is chronological
/// because the fields are declared year first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{raw}' is not a M/D/YYYY date")]
pub struct DateParseError {
    pub raw: String,
}

impl Date {
    pub const fn new(month: u32, day: u32, year: i32) -> Self {
        Self { year, month, day }
    }

    /// The local calendar date of the machine running the session.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub fn is_valid(&self) -> bool {
        if self.year <= 0 || self.month == 0 || self.month > MONTHS_PER_YEAR {
            return false;
        }

        self.day >= 1 && self.day <= days_in_month(self.year, self.month)
    }

    /// Strictly after `today`.
    pub fn is_future(&self, today: Date) -> bool {
        *self > today
    }

    /// Completed years between this date, taken as a birth date, and `today`.
    pub fn age_on(&self, today: Date) -> i32 {
        let mut age = today.year - self.year;
        if (today.month, today.day) < (self.month, self.day) {
            age -= 1;
        }
        age
    }

    pub fn is_adult(&self, today: Date) -> bool {
        self.age_on(today) >= ADULT_AGE
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    if year % QUADRENNIAL != 0 {
        false
    } else if year % CENTENNIAL != 0 {
        true
    } else {
        year % QUATERCENTENNIAL == 0
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self::new(value.month(), value.day(), value.year())
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let error = || DateParseError {
            raw: raw.to_owned(),
        };

        let mut parts = raw.trim().split('/');
        let (Some(month), Some(day), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(error());
        };

        Ok(Self::new(
            month.parse().map_err(|_| error())?,
            day.parse().map_err(|_| error())?,
            year.parse().map_err(|_| error())?,
        ))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> Date {
        raw.parse().expect("date parses")
    }

    #[test]
    fn february_follows_gregorian_leap_rules() {
        assert!(date("2/29/2024").is_valid());
        assert!(date("2/29/2000").is_valid());
        assert!(!date("2/29/1900").is_valid());
        assert!(!date("2/29/2023").is_valid());
        assert!(date("2/28/2023").is_valid());
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(!date("13/1/2000").is_valid());
        assert!(!date("0/10/2000").is_valid());
        assert!(!date("4/31/2000").is_valid());
        assert!(!date("1/0/2000").is_valid());
        assert!(!date("1/1/0").is_valid());
        assert!(date("12/31/1999").is_valid());
    }

    #[test]
    fn validity_agrees_with_chrono() {
        for year in [1900, 1999, 2000, 2023, 2024] {
            for month in 1..=12 {
                for day in 1..=31 {
                    let candidate = Date::new(month, day, year);
                    assert_eq!(
                        candidate.is_valid(),
                        candidate.to_naive_date().is_some(),
                        "{candidate}"
                    );
                }
            }
        }
    }

    #[test]
    fn parse_accepts_padding_and_displays_without_it() {
        let parsed = date("01/05/1990");
        assert_eq!(parsed, Date::new(1, 5, 1990));
        assert_eq!(parsed.to_string(), "1/5/1990");
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        for raw in ["1-1-1990", "1/1", "1/1/1990/1", "a/b/c", "", "-1/2/1990"] {
            assert!(raw.parse::<Date>().is_err(), "{raw}");
        }
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(date("12/31/1999") < date("1/1/2000"));
        assert!(date("1/31/2000") < date("2/1/2000"));
        assert!(date("2/1/2000") < date("2/2/2000"));
    }

    #[test]
    fn age_uses_calendar_subtraction() {
        let today = date("6/15/2024");
        assert_eq!(date("6/15/2006").age_on(today), 18);
        assert_eq!(date("6/16/2006").age_on(today), 17);
        assert_eq!(date("7/1/2006").age_on(today), 17);
        assert!(date("6/15/2006").is_adult(today));
        assert!(!date("6/16/2006").is_adult(today));
    }

    #[test]
    fn future_means_strictly_after_today() {
        let today = date("6/15/2024");
        assert!(!today.is_future(today));
        assert!(date("6/16/2024").is_future(today));
        assert!(!date("6/14/2024").is_future(today));
    }

    #[test]
    fn converts_from_chrono() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
        assert_eq!(Date::from(naive), Date::new(2, 29, 2024));
    }
}
