use crate::error::{AxnError, Result};

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;
pub const GIB: u64 = 1024 * MIB;

/// Fragment size as handed over by the caller: either a byte count or a
/// human-readable expression such as `"250mb"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SizeSpec {
    Bytes(u64),
    Text(String),
}

impl SizeSpec {
    pub fn resolve(&self) -> Result<u64> {
        match self {
            SizeSpec::Bytes(n) => Ok(*n),
            SizeSpec::Text(s) => parse_size(s),
        }
    }
}

impl From<u64> for SizeSpec {
    fn from(n: u64) -> Self {
        SizeSpec::Bytes(n)
    }
}

impl From<&str> for SizeSpec {
    fn from(s: &str) -> Self {
        SizeSpec::Text(s.to_owned())
    }
}

impl From<String> for SizeSpec {
    fn from(s: String) -> Self {
        SizeSpec::Text(s)
    }
}

/// Parse a size expression into whole bytes, rounding up.
///
/// The leading numeric portion is read as a decimal float; a trailing
/// `kb`, `mb` or `gb` (any case) scales it by powers of 1024. Anything else
/// after the number is ignored and the value is taken as bytes.
pub fn parse_size(input: &str) -> Result<u64> {
    let s = input.trim().to_ascii_lowercase();
    let invalid = || AxnError::InvalidSizeFormat(input.to_owned());

    let num = leading_number(&s).ok_or_else(invalid)?;
    let value: f64 = num.parse().map_err(|_| invalid())?;

    let multiplier = if s.ends_with("kb") {
        KIB
    } else if s.ends_with("mb") {
        MIB
    } else if s.ends_with("gb") {
        GIB
    } else {
        1
    };

    let bytes = (value * multiplier as f64).ceil();
    if !bytes.is_finite() || bytes < 0.0 || bytes > u64::MAX as f64 {
        return Err(invalid());
    }
    Ok(bytes as u64)
}

/// Longest prefix of `s` that reads as `[+-]digits[.digits][e[+-]digits]`.
fn leading_number(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }
    if i < b.len() && b[i] == b'e' {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    Some(&s[..i])
}
