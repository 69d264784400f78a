//! Phone number normalization

/// Keep only digits and hyphenate Korean 10/11 digit numbers
///
/// 11 digits -> DDD-DDDD-DDDD, 10 digits -> DDD-DDD-DDDD. Any other length
/// is returned as the bare digit string.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        11 => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => digits,
    }
}
