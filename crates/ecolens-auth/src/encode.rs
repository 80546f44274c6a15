//! Lowercase hexadecimal rendering

/// Render bytes as lowercase hex, two characters per byte, high nibble first.
///
/// No prefix, no separators. Empty input yields an empty string.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn high_nibble_first_lowercase() {
        assert_eq!(to_hex(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
    }

    #[test]
    fn output_is_twice_input_length() {
        let bytes: Vec<u8> = (0..=255).collect();
        let rendered = to_hex(&bytes);
        assert_eq!(rendered.len(), bytes.len() * 2);
        assert!(rendered.bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)));
    }
}
