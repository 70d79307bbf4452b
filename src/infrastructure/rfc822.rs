// RFC 822 date parser for feed timestamps
//
// Accepts `[day-of-week ","] day month year hh:mm[:ss] [zone]` with any
// amount of whitespace between tokens.
use crate::domain::error::DashboardError;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
];

const HOUR: i32 = 3600;

/// Flags adjusting how strictly input is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStyles {
    /// Reject leading/trailing whitespace and runs of more than one whitespace character
    pub no_extra_whitespace: bool,
    /// Treat a date without a zone as UTC instead of unspecified
    pub assume_universal: bool,
}

impl ParseStyles {
    pub const STRICT: Self = Self {
        no_extra_whitespace: true,
        assume_universal: false,
    };
}

/// A parsed date. Dates that carried a zone are normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDateTime {
    Utc(DateTime<Utc>),
    /// No zone was given; the wall-clock value is kept as-is
    Unspecified(NaiveDateTime),
}

impl ParsedDateTime {
    /// The instant, if the input named a zone
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Utc(dt) => Some(dt),
            Self::Unspecified(_) => None,
        }
    }

    /// The instant, reading an unspecified value as UTC
    pub fn assume_utc(self) -> DateTime<Utc> {
        match self {
            Self::Utc(dt) => dt,
            Self::Unspecified(naive) => naive.and_utc(),
        }
    }
}

pub fn parse(text: &str) -> Result<ParsedDateTime, DashboardError> {
    parse_with_styles(text, ParseStyles::default())
}

pub fn parse_with_styles(text: &str, styles: ParseStyles) -> Result<ParsedDateTime, DashboardError> {
    if text.trim().is_empty() {
        return Err(DashboardError::invalid_argument("text", "date text must not be blank"));
    }

    let fail = |reason: &str| DashboardError::format(text, reason);

    if styles.no_extra_whitespace {
        if text.trim() != text {
            return Err(fail("leading or trailing whitespace"));
        }
        if has_repeated_whitespace(text) {
            return Err(fail("repeated whitespace between tokens"));
        }
    }

    let (weekday, rest) = split_weekday(text.trim()).ok_or_else(|| fail("unknown day of week"))?;

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let (day, month, year, time, zone) = match tokens.as_slice() {
        [day, month, year, time] => (*day, *month, *year, *time, None),
        [day, month, year, time, zone] => (*day, *month, *year, *time, Some(*zone)),
        _ => return Err(fail("expected day, month, year, time and an optional zone")),
    };

    let day = parse_digits(day, 1, 2).ok_or_else(|| fail("invalid day"))?;
    let month = parse_month(month).ok_or_else(|| fail("invalid month"))?;
    let year = parse_year(year).ok_or_else(|| fail("invalid year"))?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| fail("date does not exist"))?;

    if let Some(expected) = weekday {
        if date.weekday() != expected {
            return Err(fail(&format!(
                "day of week {:?} does not match date (actually {:?})",
                expected,
                date.weekday()
            )));
        }
    }

    let time = parse_time(time).ok_or_else(|| fail("invalid time"))?;
    let naive = NaiveDateTime::new(date, time);

    match zone {
        Some(zone) => {
            let seconds = parse_zone(zone).ok_or_else(|| fail("invalid time zone"))?;
            let offset = FixedOffset::east_opt(seconds).ok_or_else(|| fail("invalid time zone"))?;
            let local = offset
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| fail("invalid time zone"))?;
            Ok(ParsedDateTime::Utc(local.with_timezone(&Utc)))
        }
        None if styles.assume_universal => Ok(ParsedDateTime::Utc(naive.and_utc())),
        None => Ok(ParsedDateTime::Unspecified(naive)),
    }
}

fn has_repeated_whitespace(text: &str) -> bool {
    text.chars()
        .zip(text.chars().skip(1))
        .any(|(a, b)| a.is_whitespace() && b.is_whitespace())
}

/// Split off an optional leading day-of-week. `None` when one is present but unknown.
fn split_weekday(text: &str) -> Option<(Option<Weekday>, &str)> {
    if let Some((name, rest)) = text.split_once(',') {
        return Some((Some(parse_weekday(name.trim())?), rest));
    }

    // Tolerate a missing comma after the day name
    match text.split_whitespace().next() {
        Some(first) if first.chars().all(|c| c.is_ascii_alphabetic()) => {
            let weekday = parse_weekday(first)?;
            let rest = text.trim_start()[first.len()..].trim_start();
            Some((Some(weekday), rest))
        }
        _ => Some((None, text)),
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|(abbrev, _)| abbrev.eq_ignore_ascii_case(name))
        .map(|(_, weekday)| *weekday)
}

fn parse_month(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
}

/// Two-digit years: 00-49 are 20xx, 50-99 are 19xx
fn parse_year(token: &str) -> Option<i32> {
    let year = parse_digits(token, 2, 4)? as i32;
    match token.len() {
        2 if year < 50 => Some(2000 + year),
        2 => Some(1900 + year),
        4 => Some(year),
        _ => None,
    }
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = token.split(':').collect();
    let (hour, minute, second) = match parts.as_slice() {
        [h, m] => (*h, *m, "00"),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };

    NaiveTime::from_hms_opt(
        parse_digits(hour, 2, 2)?,
        parse_digits(minute, 2, 2)?,
        parse_digits(second, 2, 2)?,
    )
}

/// Offset east of UTC in seconds
fn parse_zone(token: &str) -> Option<i32> {
    let upper = token.to_ascii_uppercase();
    let hours = match upper.as_str() {
        "GMT" | "UT" | "UTC" => 0,
        "EST" => -5,
        "EDT" => -4,
        "CST" => -6,
        "CDT" => -5,
        "MST" => -7,
        "MDT" => -6,
        "PST" => -8,
        "PDT" => -7,
        _ if upper.len() == 1 => military_zone(upper.chars().next()?)?,
        _ => return parse_numeric_zone(token),
    };
    Some(hours * HOUR)
}

/// Single-letter military zones: A-I and K-M are +1..+12, N-Y are -1..-12, Z is UTC
fn military_zone(letter: char) -> Option<i32> {
    match letter {
        'A'..='I' => Some(letter as i32 - 'A' as i32 + 1),
        'K'..='M' => Some(letter as i32 - 'K' as i32 + 10),
        'N'..='Y' => Some(-(letter as i32 - 'N' as i32 + 1)),
        'Z' => Some(0),
        _ => None,
    }
}

fn parse_numeric_zone(token: &str) -> Option<i32> {
    let (sign, digits) = match token.as_bytes().first()? {
        b'+' => (1, &token[1..]),
        b'-' => (-1, &token[1..]),
        _ => return None,
    };
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours = parse_digits(digits.get(..2)?, 2, 2)? as i32;
    let minutes = parse_digits(digits.get(2..)?, 2, 2)? as i32;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * HOUR + minutes * 60))
}

fn parse_digits(token: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if token.len() < min_len || token.len() > max_len || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(text: &str) -> String {
        parse(text).unwrap().to_utc().unwrap().to_rfc3339()
    }

    fn assert_format_error(result: Result<ParsedDateTime, DashboardError>) {
        assert!(
            matches!(result, Err(DashboardError::Format { .. })),
            "expected format error, got {:?}",
            result
        );
    }

    #[test]
    fn test_gmt_and_numeric_offset() {
        assert_eq!(utc("Thu, 06 Aug 2009 11:36:44 GMT"), "2009-08-06T11:36:44+00:00");
        assert_eq!(utc("Thu, 06 Aug 2009 15:53:44 +0200"), "2009-08-06T13:53:44+00:00");
        assert_eq!(utc("Thu, 06 Aug 2009 08:23:44 -0530"), "2009-08-06T13:53:44+00:00");
    }

    #[test]
    fn test_mismatched_day_of_week_is_rejected() {
        assert_format_error(parse("Wed, 06 Aug 2009 11:36:44 GMT"));
    }

    #[test]
    fn test_unknown_day_of_week_is_rejected() {
        assert_format_error(parse("Thx, 06 Aug 2009 11:36:44 GMT"));
    }

    #[test]
    fn test_optional_parts() {
        // No day of week, one digit day, no seconds
        assert_eq!(utc("6 Aug 2009 11:36 UT"), "2009-08-06T11:36:00+00:00");
        // Day name without the comma
        assert_eq!(utc("Thu 06 Aug 2009 11:36:44 UTC"), "2009-08-06T11:36:44+00:00");
        // Case does not matter for names
        assert_eq!(utc("thu, 06 AUG 2009 11:36:44 gmt"), "2009-08-06T11:36:44+00:00");
    }

    #[test]
    fn test_two_digit_years() {
        assert_eq!(utc("Thu, 06 Aug 09 11:36:44 GMT"), "2009-08-06T11:36:44+00:00");
        assert_eq!(utc("Wed, 06 Aug 97 11:36:44 GMT"), "1997-08-06T11:36:44+00:00");
        assert_format_error(parse("06 Aug 200 11:36:44 GMT"));
    }

    #[test]
    fn test_north_american_zones() {
        let cases = [
            ("EST", "2009-08-06T17:00:00+00:00"),
            ("EDT", "2009-08-06T16:00:00+00:00"),
            ("CST", "2009-08-06T18:00:00+00:00"),
            ("CDT", "2009-08-06T17:00:00+00:00"),
            ("MST", "2009-08-06T19:00:00+00:00"),
            ("MDT", "2009-08-06T18:00:00+00:00"),
            ("PST", "2009-08-06T20:00:00+00:00"),
            ("PDT", "2009-08-06T19:00:00+00:00"),
        ];
        for (zone, expected) in cases {
            assert_eq!(utc(&format!("06 Aug 2009 12:00:00 {}", zone)), expected, "zone {}", zone);
        }
    }

    #[test]
    fn test_military_zones() {
        assert_eq!(utc("06 Aug 2009 12:00:00 A"), "2009-08-06T11:00:00+00:00");
        assert_eq!(utc("06 Aug 2009 12:00:00 I"), "2009-08-06T03:00:00+00:00");
        assert_eq!(utc("06 Aug 2009 12:00:00 K"), "2009-08-06T02:00:00+00:00");
        assert_eq!(utc("06 Aug 2009 12:00:00 M"), "2009-08-06T00:00:00+00:00");
        assert_eq!(utc("06 Aug 2009 12:00:00 N"), "2009-08-06T13:00:00+00:00");
        assert_eq!(utc("06 Aug 2009 12:00:00 Y"), "2009-08-07T00:00:00+00:00");
        assert_eq!(utc("06 Aug 2009 12:00:00 Z"), "2009-08-06T12:00:00+00:00");
        assert_format_error(parse("06 Aug 2009 12:00:00 J"));
    }

    #[test]
    fn test_missing_zone_is_unspecified() {
        let parsed = parse("Thu, 06 Aug 2009 11:36:44").unwrap();
        assert!(parsed.to_utc().is_none());
        assert!(matches!(parsed, ParsedDateTime::Unspecified(_)));
        assert_eq!(parsed.assume_utc().to_rfc3339(), "2009-08-06T11:36:44+00:00");

        let styles = ParseStyles {
            assume_universal: true,
            ..ParseStyles::default()
        };
        let parsed = parse_with_styles("Thu, 06 Aug 2009 11:36:44", styles).unwrap();
        assert!(parsed.to_utc().is_some());
    }

    #[test]
    fn test_irregular_whitespace_is_tolerated() {
        assert_eq!(
            utc("  Thu,\n06   Aug\t2009 \r\n 11:36:44    GMT \n"),
            "2009-08-06T11:36:44+00:00"
        );
        assert_eq!(utc("Thu,06 Aug 2009 11:36:44 GMT"), "2009-08-06T11:36:44+00:00");
    }

    #[test]
    fn test_strict_whitespace_style() {
        assert!(parse_with_styles("Thu, 06 Aug 2009 11:36:44 GMT", ParseStyles::STRICT).is_ok());
        assert_format_error(parse_with_styles(" Thu, 06 Aug 2009 11:36:44 GMT", ParseStyles::STRICT));
        assert_format_error(parse_with_styles("Thu, 06 Aug 2009 11:36:44 GMT\n", ParseStyles::STRICT));
        assert_format_error(parse_with_styles("Thu, 06  Aug 2009 11:36:44 GMT", ParseStyles::STRICT));
        assert_format_error(parse_with_styles("Thu,\n\t06 Aug 2009 11:36:44 GMT", ParseStyles::STRICT));
    }

    #[test]
    fn test_blank_text_is_invalid_argument() {
        for text in ["", "   ", "\n\t"] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.parameter(), Some("text"));
        }
    }

    #[test]
    fn test_malformed_input() {
        let cases = [
            "06 Foo 2009 11:36:44 GMT",
            "32 Aug 2009 11:36:44 GMT",
            "29 Feb 2009 11:36:44 GMT",
            "06 Aug 2009 24:00:00 GMT",
            "06 Aug 2009 11:60:00 GMT",
            "06 Aug 2009 11-36-44 GMT",
            "06 Aug 2009 1:36:44 GMT",
            "06 Aug 2009 11:36:44 +02",
            "06 Aug 2009 11:36:44 +2460",
            "06 Aug 2009 11:36:44 XYZ",
            "06 Aug 2009",
            "06 Aug 2009 11:36:44 GMT extra",
            "2009-08-06T11:36:44Z",
        ];
        for text in cases {
            assert_format_error(parse(text));
        }
    }

    #[test]
    fn test_multibyte_tokens_are_format_errors() {
        let cases = [
            "06 Aug 2009 11:36:44 +1\u{e9}1",
            "Thu, 06 Aug 2009 11:36:44 -\u{e9}\u{e9}",
            "\u{ff10}6 Aug 2009 11:36:44 GMT",
            "06 Aug \u{ff12}\u{ff10}09 11:36:44 GMT",
            "06 Aug 2009 1\u{e9}:36 GMT",
            "06 Aug 2009 11:3\u{e9} GMT",
            "06 A\u{fc}g 2009 11:36:44 GMT",
            "D\u{f6}n, 06 Aug 2009 11:36:44 GMT",
            "06 Aug 2009 11:36:44 \u{c9}",
        ];
        for text in cases {
            assert_format_error(parse(text));
        }
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(utc("Thu, 29 Feb 2024 00:00:00 GMT"), "2024-02-29T00:00:00+00:00");
    }
}
