//! Hex formatting of octets for diagnostics.

use std::fmt::Write;

/// Formats at most `max` bytes of `octets` as space-separated lowercase hex.
///
/// When the slice is longer than `max`, the number of omitted bytes is
/// appended.
///
/// # Example
///
/// ```
/// use frame_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x05, 0x00, b'h'], 16), "05 00 68");
/// assert_eq!(print_octets(&[1, 2, 3], 2), "01 02 ... (1 more)");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let shown = octets.len().min(max);
    let mut result = String::with_capacity(shown * 3 + 16);
    for (i, byte) in octets[..shown].iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let _ = write!(result, "{:02x}", byte);
    }
    if octets.len() > shown {
        let _ = write!(result, " ... ({} more)", octets.len() - shown);
    }
    result
}
