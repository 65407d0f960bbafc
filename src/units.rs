// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! MIST ⇄ SUI decimal unit conversion
//!
//! The node reports every amount in MIST, the smallest indivisible unit, as a
//! base-10 integer string that may exceed the range of native integer types.
//! All conversions here go through [`BigDecimal`]; binary floating point is
//! never involved.
//!
//! Two output formats exist:
//!
//! - **Display** ([`to_display_unit`]): 9 fixed fractional digits and `,`
//!   thousands grouping, used for balances (`"2,500.000000000"`).
//! - **Plain** ([`mist_to_sui_plain`]): fixed-point without grouping and with
//!   trailing zeros trimmed, used for transaction fees (`"0.001"`).

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::AmountError;

/// Number of fractional digits of one SUI expressed in MIST.
pub const MIST_DECIMALS: u32 = 9;

/// Number of MIST in one SUI (10^9).
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Parse a MIST amount from a base-10 integer string.
///
/// Accepts an optional leading `-` followed by ASCII digits; anything else
/// (empty strings, decimals, exponents, whitespace) is rejected.
///
/// # Examples
///
/// ```
/// use suiscan::units::parse_mist;
///
/// assert!(parse_mist("1500000000").is_ok());
/// assert!(parse_mist("-42").is_ok());
/// assert!(parse_mist("1.5").is_err());
/// assert!(parse_mist("").is_err());
/// ```
pub fn parse_mist(value: &str) -> Result<BigDecimal, AmountError> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::invalid(value));
    }

    BigDecimal::from_str(value).map_err(|_| AmountError::invalid(value))
}

/// Convert a MIST amount string into a SUI display string.
///
/// Zero is rendered as `"0"`; every other amount has exactly nine fractional
/// digits and a grouped integer part.
///
/// # Errors
///
/// - [`AmountError::Invalid`] if `mist` is not an integer string
/// - [`AmountError::Negative`] if the amount is below zero
///
/// # Examples
///
/// ```
/// use suiscan::units::to_display_unit;
///
/// assert_eq!(to_display_unit("1500000000").unwrap(), "1.500000000");
/// assert_eq!(to_display_unit("2500000000000").unwrap(), "2,500.000000000");
/// assert_eq!(to_display_unit("0").unwrap(), "0");
/// assert!(to_display_unit("-1").is_err());
/// ```
pub fn to_display_unit(mist: &str) -> Result<String, AmountError> {
    let value = parse_mist(mist)?;
    format_display_unit(&value)
}

/// Render an already parsed MIST amount in display units.
///
/// See [`to_display_unit`] for the format.
pub fn format_display_unit(mist: &BigDecimal) -> Result<String, AmountError> {
    let zero = BigDecimal::from(0u8);
    if *mist < zero {
        return Err(AmountError::negative(mist.to_string()));
    }
    if *mist == zero {
        return Ok("0".to_string());
    }

    let parts = FixedPoint::from_mist(mist);
    Ok(format!(
        "{}.{}",
        group_thousands(&parts.integer),
        parts.fraction
    ))
}

/// Convert a MIST amount into a plain SUI decimal string.
///
/// Unlike [`to_display_unit`], the integer part is not grouped, trailing
/// fractional zeros are trimmed and negative amounts keep their sign.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use suiscan::units::mist_to_sui_plain;
///
/// assert_eq!(mist_to_sui_plain(&BigDecimal::from(1_000_000u64)), "0.001");
/// assert_eq!(mist_to_sui_plain(&BigDecimal::from(2_000_000_000_000u64)), "2000");
/// assert_eq!(mist_to_sui_plain(&BigDecimal::from(-1_500_000_000i64)), "-1.5");
/// ```
pub fn mist_to_sui_plain(mist: &BigDecimal) -> String {
    let parts = FixedPoint::from_mist(mist);
    let fraction = parts.fraction.trim_end_matches('0');
    let sign = if parts.negative { "-" } else { "" };

    if fraction.is_empty() {
        if parts.integer == "0" {
            return "0".to_string();
        }
        format!("{sign}{}", parts.integer)
    } else {
        format!("{sign}{}.{fraction}", parts.integer)
    }
}

/// A SUI amount split into sign, integer digits and exactly nine fractional digits.
struct FixedPoint {
    negative: bool,
    integer: String,
    fraction: String,
}

impl FixedPoint {
    fn from_mist(mist: &BigDecimal) -> Self {
        // MIST are integral, so the SUI digits are the MIST digits shifted by
        // the decimals. Rescaling keeps every digit; division would round.
        let (digits, _) = mist.with_scale(0).into_bigint_and_exponent();

        let rendered = digits.to_string();
        let (negative, magnitude) = match rendered.strip_prefix('-') {
            Some(magnitude) => (true, magnitude),
            None => (false, rendered.as_str()),
        };

        let decimals = MIST_DECIMALS as usize;
        let padded = format!("{magnitude:0>width$}", width = decimals + 1);
        let (integer, fraction) = padded.split_at(padded.len() - decimals);

        Self {
            negative,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        }
    }
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
