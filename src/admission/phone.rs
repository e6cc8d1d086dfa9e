/// Reformats whatever is in the phone box as `(ddd) ddd-dddd`, growing with the digit count.
/// Non-digits are dropped and anything past the tenth digit is cut off.
pub fn format_phone_number(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        len => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..len.min(10)]),
    }
}
