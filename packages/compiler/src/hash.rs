use crc32fast::Hasher;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// CRC-32 (IEEE) of a string
pub fn hash(input: &str) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(input.as_bytes());
    hasher.finalize()
}

/// Lowercase base-36 digits of `value`
pub fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(7);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Only ASCII digits were pushed
    String::from_utf8_lossy(&digits).into_owned()
}

/// `prefix` followed by the base-36 hash of `input`
pub fn class_name(prefix: &str, input: &str) -> String {
    format!("{}{}", prefix, to_base36(hash(input)))
}
