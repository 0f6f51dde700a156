use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// A document's issue number: the issue date plus a three digit suffix,
/// displayed as `YYMMDDNNN`. A number is issued once per composition, so
/// every page and the filename of one document agree on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DocumentNumber {
    date: NaiveDate,
    suffix: u16,
}

impl DocumentNumber {
    pub fn new(date: NaiveDate, suffix: u16) -> DocumentNumber {
        DocumentNumber {
            date,
            suffix: suffix % 1000,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn suffix(&self) -> u16 {
        self.suffix
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}{:03}",
            self.date.year() % 100,
            self.date.month(),
            self.date.day(),
            self.suffix,
        )
    }
}

/// A suffix drawn from the wall clock's sub-second digits
pub(crate) fn clock_suffix() -> u16 {
    (Local::now().nanosecond() / 1_000 % 1_000) as u16
}

/// `{prefix}_{number}_{YYYYMMDD}_{HHMM}.pdf`
pub(crate) fn filename(prefix: &str, number: DocumentNumber, now: NaiveDateTime) -> String {
    format!("{prefix}_{number}_{}.pdf", now.format("%Y%m%d_%H%M"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_yymmddnnn() {
        let number = DocumentNumber::new(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(), 42);
        assert_eq!(number.to_string(), "260823042");

        let number = DocumentNumber::new(NaiveDate::from_ymd_opt(2030, 1, 5).unwrap(), 7);
        assert_eq!(number.to_string(), "300105007");
    }

    #[test]
    fn suffixes_wrap_to_three_digits() {
        let number = DocumentNumber::new(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(), 1234);
        assert_eq!(number.suffix(), 234);
        assert_eq!(number.to_string(), "260823234");
    }

    #[test]
    fn filenames_carry_number_and_timestamp() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let number = DocumentNumber::new(date, 42);
        let now = date.and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(filename("OS", number, now), "OS_260823042_20260823_1430.pdf");
    }
}
