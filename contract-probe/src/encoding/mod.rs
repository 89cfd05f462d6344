//! Helpers to manipulate the hex strings exchanged with the node.
//!
//! Values travel over JSON-RPC as `0x`-prefixed hex strings, while calldata is
//! assembled by concatenating unprefixed 32-byte words.

/// Number of hex characters in a 32-byte ABI word.
pub const WORD_HEX_LEN: usize = 64;

/// Returns `value` without the leading `0x`, if present.
#[must_use]
pub fn remove_0x(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

/// Returns `value` with a leading `0x`. Values already prefixed are returned
/// unchanged.
#[must_use]
pub fn prepend_0x(value: &str) -> String {
    if value.starts_with("0x") {
        value.to_string()
    } else {
        format!("0x{value}")
    }
}

/// Left-pads `value` with zeros up to `size` characters.
///
/// Values already longer than `size` are returned unchanged.
#[must_use]
pub fn zeropad(value: &str, size: usize) -> String {
    format!("{value:0>size$}")
}

/// Encodes a number as a `0x`-prefixed lowercase hex quantity, the format used
/// for `gas` and `gasPrice`.
#[must_use]
pub fn to_hex_quantity(value: u64) -> String {
    format!("{value:#x}")
}

/// Encodes an address or a hex value as an unprefixed 32-byte ABI word.
#[must_use]
pub fn encode_word(value: &str) -> String {
    zeropad(remove_0x(value), WORD_HEX_LEN)
}
