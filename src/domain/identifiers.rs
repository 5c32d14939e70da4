//! Human-readable identifiers read back to callers over the phone.
//!
//! Codes are random and never checked for uniqueness before insert; the
//! unique index in the store rejects collisions, which surface as a
//! retryable `DuplicateResource`.

use rand::Rng;

pub const CONFIRMATION_PREFIX: &str = "RES";
pub const ORDER_PREFIX: &str = "ORD";
pub const SUFFIX_LEN: usize = 6;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const DIGITS: &[u8] = b"0123456789";

fn random_code<R: Rng + ?Sized>(rng: &mut R, prefix: &str, alphabet: &[u8]) -> String {
    let mut code = String::with_capacity(prefix.len() + SUFFIX_LEN);
    code.push_str(prefix);
    for _ in 0..SUFFIX_LEN {
        code.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
    }
    code
}

/// `RES` followed by six characters drawn independently from `A-Z0-9`.
pub fn confirmation_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_code(rng, CONFIRMATION_PREFIX, ALPHANUMERIC)
}

/// `ORD` followed by six decimal digits.
pub fn order_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_code(rng, ORDER_PREFIX, DIGITS)
}

/// Estimated preparation time in minutes, uniform over 30..=44.
pub fn estimated_minutes<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(30..45)
}
