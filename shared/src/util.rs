/// Format a mobile number as the user types it.
///
/// Non-digits are stripped. Fewer than 5 digits are returned as-is, fewer
/// than 8 become `DDD-DDDD`, anything longer becomes `DDD-DDD-DDDD` using
/// only the first ten digits.
pub fn format_phone_number(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    if len < 5 {
        return digits;
    }
    if len < 8 {
        return format!("{}-{}", &digits[..3], &digits[3..]);
    }
    format!(
        "{}-{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..len.min(10)]
    )
}
