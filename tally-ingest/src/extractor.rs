//! Turn a classified line into a dated, priced record

use chrono::NaiveDate;
use tally_core::{LineError, TransactionRecord};

use crate::amount::parse_amount;
use crate::classifier::ClassifiedLine;

fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parse `("Jul", "20")` in `year`.
pub fn parse_mmm_dd_with_year(month: &str, day: &str, year: i32) -> Result<NaiveDate, LineError> {
    let month_num =
        month_number(month).ok_or_else(|| LineError::UnknownMonth(month.to_string()))?;
    let day_num: u32 = day
        .parse()
        .map_err(|_| LineError::BadDate(format!("{month} {day}")))?;

    NaiveDate::from_ymd_opt(year, month_num, day_num)
        .ok_or_else(|| LineError::DayOutOfRange(format!("{month} {day}"), year))
}

/// Build a record from a classified line.
///
/// `statement_year` is required because rows only carry `Mmm D`; both dates
/// are stamped with it, even a December purchase on a January statement.
pub fn extract(line: &ClassifiedLine<'_>, statement_year: i32) -> Result<TransactionRecord, LineError> {
    let (month, day) = line.trans_date();
    let trans_date = parse_mmm_dd_with_year(month, day, statement_year)?;

    let (month, day) = line.post_date();
    let post_date = parse_mmm_dd_with_year(month, day, statement_year)?;

    let amount = parse_amount(line.amount())?;

    Ok(TransactionRecord::new(
        trans_date,
        post_date,
        line.description().join(" "),
        amount,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LineClassifier;
    use rust_decimal::Decimal;

    fn extract_line(line: &str, year: i32) -> Result<TransactionRecord, LineError> {
        let classifier = LineClassifier::new().unwrap();
        let classified = classifier.classify(line).expect("line should classify");
        extract(&classified, year)
    }

    #[test]
    fn test_coffee_shop() {
        let rec = extract_line("Jan 5 Jan 6 COFFEE SHOP $4.50", 2024).unwrap();
        assert_eq!(rec.trans_date_iso(), "2024-01-05");
        assert_eq!(rec.post_date_iso(), "2024-01-06");
        assert_eq!(rec.description, "COFFEE SHOP");
        assert_eq!(rec.amount, Decimal::new(450, 2));
    }

    #[test]
    fn test_empty_description() {
        let rec = extract_line("Mar 1 Mar 2 $10.00", 2023).unwrap();
        assert_eq!(rec.description, "");
        assert_eq!(rec.amount.to_string(), "10.00");
    }

    #[test]
    fn test_description_joined_with_single_spaces() {
        let rec = extract_line("Jul 20   Jul 22   H-E-B   #455  SAN MARCOS TX   $1,005.82", 2024).unwrap();
        assert_eq!(rec.description, "H-E-B #455 SAN MARCOS TX");
        assert_eq!(rec.amount.to_string(), "1005.82");
    }

    #[test]
    fn test_day_out_of_range() {
        let err = extract_line("Feb 30 Mar 1 SHOP $1.00", 2024).unwrap_err();
        assert_eq!(err, LineError::DayOutOfRange("Feb 30".to_string(), 2024));

        let err = extract_line("Jan 5 Apr 31 SHOP $1.00", 2024).unwrap_err();
        assert_eq!(err, LineError::DayOutOfRange("Apr 31".to_string(), 2024));
    }

    #[test]
    fn test_leap_day_depends_on_year() {
        assert!(extract_line("Feb 29 Mar 1 SHOP $1.00", 2024).is_ok());
        assert!(extract_line("Feb 29 Mar 1 SHOP $1.00", 2023).is_err());
    }

    #[test]
    fn test_unknown_month() {
        let err = extract_line("Foo 3 Mar 1 SHOP $1.00", 2024).unwrap_err();
        assert_eq!(err, LineError::UnknownMonth("Foo".to_string()));
    }

    #[test]
    fn test_day_zero_rejected() {
        assert!(extract_line("Jan 0 Jan 1 SHOP $1.00", 2024).is_err());
    }

    #[test]
    fn test_year_comes_from_statement_not_content() {
        // A December purchase listed on a January statement keeps the
        // statement's year; the cross-year case is not corrected.
        let rec = extract_line("Dec 28 Jan 2 HOLIDAY GIFT $25.00", 2024).unwrap();
        assert_eq!(rec.trans_date_iso(), "2024-12-28");
        assert_eq!(rec.post_date_iso(), "2024-01-02");
    }
}
