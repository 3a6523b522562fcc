// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Human-readable file sizes.
//!
//! Byte counts are rendered with binary units, i.e., each unit step is a
//! factor of 1024, but labeled with the short names people expect to see
//! (KB, MB, and so on). The largest unit is TB; anything bigger is simply
//! expressed as a large number of terabytes.
//!
//! # Rounding
//!
//! The scaled value is rounded to a fixed number of decimal places, and then
//! printed in its shortest form. Thus, `1536` bytes at three decimal places
//! reads "1.5 KB" rather than "1.500 KB". Rounding operates on the exact
//! decimal expansion of the value, and ties always go to the larger
//! candidate, e.g., 2.5 at zero decimal places rounds to 3.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Decimal places used when the caller does not ask for any.
pub const DEFAULT_DECIMALS: usize = 2;

/// Upper bound on decimal places.
pub const MAX_DECIMALS: usize = 100;

/// Fraction digits needed to print any finite `f64` without rounding.
const EXACT_DIGITS: usize = 1074;

/// Binary file size unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeUnit {
    #[default]
    B,
    KB,
    MB,
    GB,
    TB,
}

impl SizeUnit {
    /// Every unit, smallest first.
    pub const ALL: [SizeUnit; 5] = [Self::B, Self::KB, Self::MB, Self::GB, Self::TB];

    /// Short label of unit.
    pub fn label(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
        }
    }

    /// Number of bytes in one of this unit.
    pub fn multiplier(self) -> f64 {
        1024_f64.powi(self as i32)
    }

    /// Next larger unit, if any.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }
}

impl Display for SizeUnit {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.label())
    }
}

/// Format byte count as human-readable file size.
///
/// Absent, negative, infinite, and NaN byte counts all read as "0 B". An
/// absent `decimals` means [`DEFAULT_DECIMALS`], and anything past
/// [`MAX_DECIMALS`] is capped.
///
/// # Examples
///
/// ```
/// # use textfmt::format_file_size;
/// assert_eq!(format_file_size(Some(1024.0), None), "1 KB");
/// assert_eq!(format_file_size(Some(1536.0), None), "1.5 KB");
/// assert_eq!(format_file_size(Some(1536.0), Some(0)), "2 KB");
/// assert_eq!(format_file_size(Some(f64::NAN), None), "0 B");
/// ```
pub fn format_file_size(bytes: Option<f64>, decimals: Option<usize>) -> String {
    let bytes = match bytes {
        Some(bytes) if bytes.is_finite() && bytes > 0.0 => bytes,
        _ => return format!("0 {}", SizeUnit::B),
    };
    let decimals = decimals.unwrap_or(DEFAULT_DECIMALS).min(MAX_DECIMALS);

    let unit = unit_for(bytes);
    let scaled = bytes / unit.multiplier();
    let fixed = to_fixed(scaled, decimals);

    // INVARIANT: Print rounded value in shortest form to drop trailing zeros.
    let number = match fixed.parse::<f64>() {
        Ok(number) => number.to_string(),
        Err(_) => fixed,
    };

    format!("{number} {unit}")
}

/// Largest unit that still leaves at least one whole unit of bytes.
///
/// Equivalent to the floor of the base-1024 logarithm, clamped to the unit
/// table. Dividing by 1024 is exact in binary floating point, so powers of
/// 1024 never land one unit short.
fn unit_for(bytes: f64) -> SizeUnit {
    let mut unit = SizeUnit::B;
    let mut remaining = bytes;
    while remaining >= 1024.0 {
        match unit.next() {
            Some(next) => {
                unit = next;
                remaining /= 1024.0;
            }
            None => break,
        }
    }

    unit
}

/// Round non-negative value to fixed decimal places, ties going up.
fn to_fixed(value: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (kept, dropped) = fraction.split_at(decimals.min(fraction.len()));

    let mut digits: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();
    if dropped.as_bytes().first().is_some_and(|digit| *digit >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - kept.len();
    let mut result = String::with_capacity(digits.len() + 1);
    result.extend(digits[..split].iter().map(|digit| *digit as char));
    if !kept.is_empty() {
        result.push('.');
        result.extend(digits[split..].iter().map(|digit| *digit as char));
    }

    result
}

/// Add one to the last digit of an ASCII digit string, carrying leftward.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }

    digits.insert(0, b'1');
}
