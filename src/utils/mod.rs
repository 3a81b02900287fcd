pub mod clock;
pub mod url_validator;

pub use clock::{Clock, ManualClock, SystemClock};

/// Lowercase base-36 alphabet used for generated codes
pub const CODE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
        .take(length)
        .collect()
}
