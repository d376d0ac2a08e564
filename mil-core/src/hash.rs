//! Class name generation.
//!
//! Class names are derived from compiled css text with a 32-bit rolling hash
//! over UTF-16 code units (`h * 31 + c`), printed in base 36.
//! Same text always gives the same class name; collisions are not handled.

/// Prefix of generated class names.
pub const CLASS_PREFIX: &str = "mil-";

pub fn hash_code(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Lower-case base 36, negative values keep their `-` sign.
pub fn to_base36(value: i32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rest = value.unsigned_abs();
    if rest == 0 {
        return "0".to_owned();
    }
    let mut reversed = Vec::new();
    while rest > 0 {
        reversed.push(DIGITS[(rest % 36) as usize] as char);
        rest /= 36;
    }
    if value < 0 {
        reversed.push('-');
    }
    reversed.into_iter().rev().collect()
}

pub fn class_name(prefix: &str, identity: &str) -> String {
    format!("{prefix}{}", to_base36(hash_code(identity)))
}
