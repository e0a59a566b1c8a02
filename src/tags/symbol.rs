//! Best-effort cleanup of on-chain token symbols.
//!
//! Older ERC-20 contracts report `symbol()` as bytes32, which the subgraph
//! surfaces as a 64-hex-character string. Anything that does not survive
//! decoding and the printable filter is rejected with an empty string so the
//! caller can fall back to the raw value.

const MIN_SYMBOL_LEN: usize = 2;
const MAX_SYMBOL_LEN: usize = 32;

/// Clean a raw token symbol, returning the empty string when the result is
/// not a plausible display symbol. Pure function; rejection is not an error.
pub fn clean_symbol(raw: &str) -> String {
    let text = match decode_bytes32(raw) {
        Some(decoded) => decoded,
        None => raw.to_string(),
    };

    let printable: String = text
        .chars()
        .filter(|c| ('\u{2}'..='\u{7f}').contains(c))
        .collect();
    let trimmed = printable.trim();

    if (MIN_SYMBOL_LEN..=MAX_SYMBOL_LEN).contains(&trimmed.len()) {
        trimmed.to_string()
    } else {
        String::new()
    }
}

/// Decode a 64-hex-character (optionally `0x`-prefixed) bytes32 buffer into
/// UTF-8 text with NUL padding stripped. Returns None when the input is not
/// such a buffer or does not decode as UTF-8.
fn decode_bytes32(raw: &str) -> Option<String> {
    let hex_str = raw.strip_prefix("0x").unwrap_or(raw);
    if hex_str.len() != 64 || !hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let bytes = hex::decode(hex_str).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    Some(text.replace('\0', ""))
}
