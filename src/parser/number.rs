//! Prefix number conversion for response fields
//!
//! Both functions skip leading whitespace, accept an optional sign and ignore
//! whatever follows the longest valid numeric prefix.

use crate::error::Error;

fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

fn sign_len(s: &[u8]) -> usize {
    usize::from(matches!(s.first(), Some(b'+' | b'-')))
}

fn digits_len(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Convert the leading base-10 integer of `text`.
pub fn parse_integer(text: &str) -> Result<i64, Error> {
    let s = skip_whitespace(text);
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_len(&bytes[sign..]);
    if digits == 0 {
        return Err(Error::InvalidNumber);
    }

    s[..sign + digits]
        .parse()
        .map_err(|_| Error::InvalidNumber)
}

/// Convert the leading floating point number of `text`, including `inf` and
/// `nan` spellings.
pub fn parse_float(text: &str) -> Result<f64, Error> {
    let s = skip_whitespace(text);
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);

    let len = match special_len(&bytes[sign..]) {
        Some(len) => sign + len,
        None => sign + decimal_len(&bytes[sign..]).ok_or(Error::InvalidNumber)?,
    };

    s[..len].parse().map_err(|_| Error::InvalidNumber)
}

fn special_len(s: &[u8]) -> Option<usize> {
    ["infinity", "inf", "nan"]
        .iter()
        .find(|word| {
            s.len() >= word.len() && s[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        })
        .map(|word| word.len())
}

/// Length of `digits[.digits][(e|E)[sign]digits]`, requiring at least one
/// mantissa digit.
fn decimal_len(s: &[u8]) -> Option<usize> {
    let int = digits_len(s);
    let mut len = int;
    let mut frac = 0;
    if s.get(len) == Some(&b'.') {
        frac = digits_len(&s[len + 1..]);
        len += 1 + frac;
    }
    if int + frac == 0 {
        return None;
    }

    if matches!(s.get(len), Some(b'e' | b'E')) {
        let exp = &s[len + 1..];
        let sign = sign_len(exp);
        let digits = digits_len(&exp[sign..]);
        if digits > 0 {
            len += 1 + sign + digits;
        }
    }

    Some(len)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integer_prefix() {
        assert_eq!(parse_integer("10"), Ok(10));
        assert_eq!(parse_integer("  -42"), Ok(-42));
        assert_eq!(parse_integer("+7"), Ok(7));
        assert_eq!(parse_integer("100\r\nOK"), Ok(100));
        assert_eq!(parse_integer("12abc"), Ok(12));
        assert_eq!(parse_integer("3.9"), Ok(3));
    }

    #[test]
    fn integer_rejects() {
        assert_eq!(parse_integer(""), Err(Error::InvalidNumber));
        assert_eq!(parse_integer("abc"), Err(Error::InvalidNumber));
        assert_eq!(parse_integer("\"1\""), Err(Error::InvalidNumber));
        assert_eq!(parse_integer("-"), Err(Error::InvalidNumber));
        assert_eq!(
            parse_integer("99999999999999999999"),
            Err(Error::InvalidNumber)
        );
    }

    #[test]
    fn float_prefix() {
        assert_eq!(parse_float("1.5"), Ok(1.5));
        assert_eq!(parse_float(" -0.25dBm"), Ok(-0.25));
        assert_eq!(parse_float(".5"), Ok(0.5));
        assert_eq!(parse_float("5."), Ok(5.0));
        assert_eq!(parse_float("1e3"), Ok(1000.0));
        assert_eq!(parse_float("2E-2,"), Ok(0.02));
        assert_eq!(parse_float("7e"), Ok(7.0));
        assert_eq!(parse_float("7e+x"), Ok(7.0));
        assert_eq!(parse_float("-INF"), Ok(f64::NEG_INFINITY));
        assert_eq!(parse_float("infinity"), Ok(f64::INFINITY));
        assert!(parse_float("NaN").unwrap().is_nan());
    }

    #[test]
    fn float_rejects() {
        assert_eq!(parse_float(""), Err(Error::InvalidNumber));
        assert_eq!(parse_float("."), Err(Error::InvalidNumber));
        assert_eq!(parse_float("+e5"), Err(Error::InvalidNumber));
        assert_eq!(parse_float("in"), Err(Error::InvalidNumber));
    }
}
