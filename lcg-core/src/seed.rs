use alloc::string::{String, ToString};

use crate::error::SeedError;

/// Parse a seed written as decimal (`42`) or hex (`0xDEAD_BEEF`).
/// Underscore separators are ignored; signs and whitespace inside are not.
pub fn parse_seed(input: &str) -> Result<u64, SeedError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SeedError::Empty);
    }

    let (body, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(SeedError::InvalidDigit {
            input: trimmed.to_string(),
        });
    }

    // Only overflow is left once every character is a valid digit.
    u64::from_str_radix(&digits, radix).map_err(|_| SeedError::Overflow {
        input: trimmed.to_string(),
    })
}
