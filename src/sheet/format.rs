/// Turns a raw auto-notation string into the string shown to the user.
///
/// Trailing fractional zeros and a bare trailing `.` are removed from the
/// mantissa. Integer digits are grouped in threes with `,` unless the value
/// carries an exponent suffix. Applying the function to its own output
/// returns the same string.
///
/// # Example
/// ```
/// use calcpad::sheet::format::format_display;
///
/// assert_eq!(format_display("1234567.00"), "1,234,567");
/// assert_eq!(format_display("-9876.5430"), "-9,876.543");
/// assert_eq!(format_display("1.50e+25"), "1.5e+25");
/// assert_eq!(format_display("1,234,567"), "1,234,567");
/// ```
#[must_use]
pub fn format_display(raw: &str) -> String {
    let (mantissa, suffix) = raw.find('e')
                                .map_or((raw, ""), |index| raw.split_at(index));

    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };

    if suffix.is_empty() {
        group_thousands(mantissa)
    } else {
        format!("{mantissa}{suffix}")
    }
}

/// Inserts `,` between groups of three integer digits.
fn group_thousands(mantissa: &str) -> String {
    let (sign, unsigned) = mantissa.strip_prefix('-')
                                   .map_or(("", mantissa), |rest| ("-", rest));
    let (integer, fraction) = unsigned.find('.')
                                      .map_or((unsigned, ""), |index| unsigned.split_at(index));

    let digits: Vec<char> = integer.chars().filter(|c| *c != ',').collect();
    if !digits.iter().all(char::is_ascii_digit) {
        return mantissa.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    format!("{sign}{grouped}{fraction}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn small_numbers_are_not_grouped() {
        assert_eq!(format_display("999"), "999");
        assert_eq!(format_display("0.000120"), "0.00012");
        assert_eq!(format_display("-1000"), "-1,000");
    }

    #[test]
    fn negative_exponent_suffix_is_kept() {
        assert_eq!(format_display("2.5e-21"), "2.5e-21");
        assert_eq!(format_display("1e+20"), "1e+20");
    }

    #[test]
    fn non_numeric_text_passes_through() {
        assert_eq!(format_display("Infinity"), "Infinity");
        assert_eq!(format_display("NaN"), "NaN");
    }
}
