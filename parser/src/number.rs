//! Lenient extraction of numbers from text values.
//!
//! Producers are known to write decimal strings with a comma
//! as the decimal separator, or with trailing garbage such as units.

/// Parse the longest numeric prefix of the given text,
/// after replacing commas with periods.
///
/// Leading and trailing whitespace is ignored.
/// Returns `None` if the text does not start with a number.
///
/// # Example
///
/// ```
/// # use dcmstack_parser::number::lenient_f64;
/// assert_eq!(lenient_f64("12,5"), Some(12.5));
/// assert_eq!(lenient_f64(" 3.0mm"), Some(3.0));
/// assert_eq!(lenient_f64("n/a"), None);
/// ```
pub fn lenient_f64(text: &str) -> Option<f64> {
    let text = text.trim().replace(',', ".");
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 {
        return None;
    }
    text[..end].parse().ok()
}

/// Obtain the length of the longest prefix
/// with the form `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_prefix_len(text: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < text.len() && text[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(text.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;

    if text.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 || has_digits {
            has_digits |= frac_end > end + 1;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(text.get(end), Some(b'e') | Some(b'E')) {
        let mut j = end + 1;
        if matches!(text.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}
