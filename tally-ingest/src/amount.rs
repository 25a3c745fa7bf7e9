//! Currency token to decimal conversion

use std::str::FromStr;

use rust_decimal::Decimal;
use tally_core::LineError;

/// Parse a statement amount such as `$1,234.56`.
///
/// Drops the `$` and every `,` then reads the rest as a decimal. The token's
/// scale is kept, so `$0.00` parses to a zero that still prints as `0.00`.
/// Values past `Decimal`'s 96-bit mantissa (about 7.9e28) are `BadAmount`.
pub fn parse_amount(token: &str) -> Result<Decimal, LineError> {
    let digits: String = token.chars().filter(|c| *c != '$' && *c != ',').collect();
    Decimal::from_str(&digits).map_err(|_| LineError::BadAmount(token.to_string()))
}
