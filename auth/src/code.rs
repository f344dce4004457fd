//! One-time confirmation codes.

use rand::Rng;

/// Generate a six-digit confirmation code.
///
/// Uniformly random in 100000–999999, so the decimal form is always six
/// digits. Exactly one code is live per user at a time: storing a new code
/// overwrites any outstanding one.
#[must_use]
pub fn generate_confirmation_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_six_decimal_digits() {
        for _ in 0..200 {
            let code = generate_confirmation_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(code.as_bytes()[0], b'0');
        }
    }
}
