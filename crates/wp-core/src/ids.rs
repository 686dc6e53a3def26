//! ID prefixes and random identifier generation.

/// Prefix for generated place ids.
pub const PREFIX_PLACE: &str = "plc";

/// Lowercase hex encoding of arbitrary bytes.
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// Fill `len` bytes from the OS random source and hex-encode them.
///
/// # Errors
///
/// Returns `getrandom::Error` if the OS random source is unavailable.
pub fn random_hex(len: usize) -> Result<String, getrandom::Error> {
    let mut buf = vec![0u8; len];
    getrandom::fill(&mut buf)?;
    Ok(hex_encode(&buf))
}

/// Generate a prefixed place id, e.g. `"plc-a3f8b2c1"`.
///
/// # Errors
///
/// Returns `getrandom::Error` if the OS random source is unavailable.
pub fn generate_place_id() -> Result<String, getrandom::Error> {
    Ok(format!("{PREFIX_PLACE}-{}", random_hex(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encode_pads_each_byte() {
        assert_eq!(hex_encode(&[0x00, 0x0f, 0xab]), "000fab");
        assert_eq!(hex_encode(&[]), "");
    }

    #[test]
    fn place_id_has_prefix_and_hex_suffix() {
        let id = generate_place_id().unwrap();
        assert!(id.starts_with("plc-"), "unexpected id: {id}");
        assert_eq!(id.len(), 12);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn place_ids_differ() {
        let a = generate_place_id().unwrap();
        let b = generate_place_id().unwrap();
        assert_ne!(a, b);
    }
}
