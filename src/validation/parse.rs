//! Numeric coercion for string-encoded form fields
//!
//! Form inputs arrive as text. A value is read from its longest numeric
//! prefix, so `"1%"` is 1 and `"5000 USDT"` is 5000, while text with no
//! leading number is not a number at all.

/// Parse the leading floating point number of `input`.
///
/// Returns `None` when no numeric prefix exists or the value is not finite.
pub fn parse_float(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A lone "." only belongs to the number if digits surround it
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse the leading integer of `input`, ignoring any fractional part.
///
/// Out-of-range values saturate at the `i64` bounds.
pub fn parse_int(input: &str) -> Option<i64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let start = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = count_digits(&bytes[start..]);

    if digits == 0 {
        return None;
    }

    match text[..start + digits].parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// True when the value is empty or only whitespace.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Human label for a camelCase field name: `lowerPriceLimit` -> `Lower Price Limit`.
pub fn field_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);

    for (i, ch) in field.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }

    label
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain_values() {
        assert_eq!(parse_float("5000"), Some(5000.0));
        assert_eq!(parse_float("-5"), Some(-5.0));
        assert_eq!(parse_float("0.25"), Some(0.25));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("  42"), Some(42.0));
        assert_eq!(parse_float("1.5e3"), Some(1500.0));
    }

    #[test]
    fn test_parse_float_reads_numeric_prefix() {
        assert_eq!(parse_float("1%"), Some(1.0));
        assert_eq!(parse_float("5000 USDT"), Some(5000.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("3e+x"), Some(3.0));
        assert_eq!(parse_float("7.25.1"), Some(7.25));
    }

    #[test]
    fn test_parse_float_rejects_non_numbers() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("$100"), None);
        assert_eq!(parse_float("Infinity"), None);
        assert_eq!(parse_float("1e400"), None);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("10"), Some(10));
        assert_eq!(parse_int("10.9"), Some(10));
        assert_eq!(parse_int("0.5"), Some(0));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("7 days"), Some(7));
        assert_eq!(parse_int(" +12"), Some(12));
        assert_eq!(parse_int("days"), None);
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("tradingPair"), "Trading Pair");
        assert_eq!(field_label("lowerPriceLimit"), "Lower Price Limit");
        assert_eq!(field_label("largeGridSize"), "Large Grid Size");
        assert_eq!(field_label("symbol"), "Symbol");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" 1 "));
    }
}
