//! Error Code Module
//!
//! Deterministic fingerprinting of failure text.

use crate::recorder::Failure;

/// Prefix of every generated error code
pub const ERROR_CODE_PREFIX: &str = "IMG_SEARCH_";

/// Hex characters kept from the hash
const CODE_HASH_LEN: usize = 8;

// == Simple Hash ==
/// 32-bit multiply-by-31 rolling hash over UTF-16 code units.
///
/// Arithmetic wraps at 32 bits as signed integers; the unsigned magnitude of
/// the final value is rendered as lowercase hex with no padding.
pub fn simple_hash(text: &str) -> String {
    let hash = text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    format!("{:x}", hash.unsigned_abs())
}

// == Generate Error Code ==
/// Derives the `IMG_SEARCH_XXXXXXXX` code for a failure.
///
/// Hashes the stack text if present, else the message. Hashes shorter than
/// eight hex digits are used as-is.
pub fn generate_error_code(failure: &Failure) -> String {
    let hash = simple_hash(failure.identifying_text());
    let prefix: String = hash.chars().take(CODE_HASH_LEN).collect();
    format!("{}{}", ERROR_CODE_PREFIX, prefix.to_uppercase())
}
