use std::num::ParseIntError;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::GenericResult;
use crate::time;
use crate::types::Date;

pub const SEPARATOR: &str = " - ";

// chrono accepts one-digit days and months and years of any width, so the exact layout is
// checked first.
pub fn parse_date(date: &str) -> GenericResult<Date> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap();
    }

    if !DATE_REGEX.is_match(date) {
        return Err!("Invalid date: {:?}", date);
    }

    time::parse_date(date, "%d/%m/%Y")
}

pub fn parse_short_date(date: &str) -> GenericResult<Date> {
    lazy_static! {
        static ref SHORT_DATE_REGEX: Regex = Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{2}$").unwrap();
    }

    if !SHORT_DATE_REGEX.is_match(date) {
        return Err!("Invalid date: {:?}", date);
    }

    time::parse_date(date, "%d/%m/%y")
}

/// Parses a monetary amount as an integer number of minor currency units: all punctuation is
/// dropped, so "2.550" and "25,50" both become 2550.
pub fn parse_cash(value: &str) -> Result<i64, ParseIntError> {
    lazy_static! {
        static ref NON_DIGIT_REGEX: Regex = Regex::new(r"[^0-9]").unwrap();
    }

    NON_DIGIT_REGEX.replace_all(value, "").parse()
}

pub fn normalize_whitespace(value: &str) -> String {
    lazy_static! {
        static ref WHITESPACE_REGEX: Regex = Regex::new(r"[\t\n\x0C\r ]+").unwrap();
    }

    WHITESPACE_REGEX.replace_all(value, " ").into_owned()
}
