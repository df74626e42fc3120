//! Phone number helpers
//!
//! The store keeps phones in digits-only canonical form; inputs display
//! the Brazilian mask.

/// Strip everything but ASCII digits
///
/// # Examples
///
/// ```
/// use adestra_app::utils::phone::digits_only;
///
/// assert_eq!(digits_only("(11) 99999-9999"), "11999999999");
/// assert_eq!(digits_only("+55 11 9.9999-9999"), "5511999999999");
/// ```
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the Brazilian display mask, `(11) 99999-9999`
///
/// Partial input is masked as far as it goes; anything past 11 digits is
/// dropped.
///
/// # Examples
///
/// ```
/// use adestra_app::utils::phone::format_br_phone;
///
/// assert_eq!(format_br_phone("11"), "11");
/// assert_eq!(format_br_phone("119999"), "(11) 9999");
/// assert_eq!(format_br_phone("11999999999"), "(11) 99999-9999");
/// ```
pub fn format_br_phone(value: &str) -> String {
    let numbers = digits_only(value);
    if numbers.len() <= 2 {
        return numbers;
    }
    if numbers.len() <= 7 {
        return format!("({}) {}", &numbers[..2], &numbers[2..]);
    }
    let end = numbers.len().min(11);
    format!("({}) {}-{}", &numbers[..2], &numbers[2..7], &numbers[7..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_round_trips_through_digits_only() {
        let masked = format_br_phone("11987654321");
        assert_eq!(masked, "(11) 98765-4321");
        assert_eq!(digits_only(&masked), "11987654321");
    }

    #[test]
    fn mask_truncates_past_eleven_digits() {
        assert_eq!(format_br_phone("119876543210000"), "(11) 98765-4321");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_br_phone(""), "");
        assert_eq!(digits_only("abc"), "");
    }
}
