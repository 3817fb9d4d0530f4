//! Real-number conversion for token text.
//!
//! Two entry points share one prefix scanner:
//!
//! - [`fast_atof`] is lenient. It converts the longest numeric prefix and
//!   yields `0.0` when the text does not start like a number.
//! - [`parse_real`] is strict about the start of the text and reports an
//!   [`InvalidNumber`](crate::ScanErrorKind::InvalidNumber) error instead.
//!
//! Both accept an optional sign, `nan`, `inf` and `infinity` (any case),
//! and trailing bytes after the numeric prefix are ignored.

use crate::error::ScanError;

/// Convert the numeric prefix of `text`, or return `0.0`.
///
/// ```rust
/// use objscan_core::number::fast_atof;
///
/// assert_eq!(fast_atof(b"3.14", false), 3.14);
/// assert_eq!(fast_atof(b"-2e3xyz", false), -2000.0);
/// assert_eq!(fast_atof(b"abc", false), 0.0);
/// ```
pub fn fast_atof(text: &[u8], decimal_comma: bool) -> f64 {
    match scan_real(text, decimal_comma) {
        Some((value, _)) => value,
        None => {
            tracing::debug!(
                text = %String::from_utf8_lossy(text),
                "non-numeric token converted to 0.0"
            );
            0.0
        }
    }
}

/// Convert the numeric prefix of `text`, rejecting text that does not
/// start with a digit, or a decimal point followed by a digit.
pub fn parse_real(text: &[u8], decimal_comma: bool) -> Result<f64, ScanError> {
    scan_real(text, decimal_comma)
        .map(|(value, _)| value)
        .ok_or_else(|| ScanError::invalid_number(text))
}

/// Scan a real number at the start of `text`.
///
/// Returns the value and the number of bytes it spans.
pub fn scan_real(text: &[u8], decimal_comma: bool) -> Option<(f64, usize)> {
    let mut pos = 0;
    let negative = match text.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if let Some((value, len)) = scan_special(&text[pos..]) {
        let value = if negative { -value } else { value };
        return Some((value, pos + len));
    }

    let is_point = |b: u8| b == b'.' || (decimal_comma && b == b',');
    let digits_from = |at: usize| {
        text.get(at..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let int_digits = digits_from(pos);
    let starts_with_point_digit = text.get(pos).is_some_and(|&b| is_point(b))
        && text.get(pos + 1).is_some_and(u8::is_ascii_digit);
    if int_digits == 0 && !starts_with_point_digit {
        return None;
    }

    let mut end = pos + int_digits;
    let mut point = None;
    if text.get(end).is_some_and(|&b| is_point(b)) {
        point = Some(end);
        end += 1;
        end += digits_from(end);
    }

    if matches!(text.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(text.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    let value = match point {
        Some(at) if text[at] == b',' => {
            let mut normalized = text[..end].to_vec();
            normalized[at] = b'.';
            parse_ascii(&normalized)?
        }
        _ => parse_ascii(&text[..end])?,
    };
    Some((value, end))
}

fn parse_ascii(text: &[u8]) -> Option<f64> {
    std::str::from_utf8(text).ok()?.parse().ok()
}

fn scan_special(text: &[u8]) -> Option<(f64, usize)> {
    let starts_with = |word: &[u8]| {
        text.len() >= word.len() && text[..word.len()].eq_ignore_ascii_case(word)
    };
    if starts_with(b"nan") {
        Some((f64::NAN, 3))
    } else if starts_with(b"infinity") {
        Some((f64::INFINITY, 8))
    } else if starts_with(b"inf") {
        Some((f64::INFINITY, 3))
    } else {
        None
    }
}
