//! Conversion of Telegram entity offsets into Rust string indices.
//!
//! Telegram reports entity positions in UTF-16 code units, while `str` is
//! indexed by UTF-8 byte offset. A character outside the Basic Multilingual
//! Plane (most emoji) takes two UTF-16 units but one `char`, so slicing with
//! the raw Telegram offset shifts every span that follows it.

/// Converts a UTF-16 code unit offset into a byte index of `text`.
///
/// Returns the start of the character that contains (or immediately follows)
/// the requested unit. An offset landing inside a surrogate pair resolves to
/// the start of that character, so the result is always a char boundary.
/// Offsets at or past the UTF-16 length of `text` clamp to `text.len()`.
///
/// # Examples
///
/// ```
/// use deal_relay::text::utf16_offset_to_index;
///
/// let text = "😱 Sale";
/// // The emoji is two UTF-16 units but four UTF-8 bytes.
/// assert_eq!(utf16_offset_to_index(text, 3), 5);
/// assert_eq!(&text[utf16_offset_to_index(text, 3)..], "Sale");
/// ```
#[must_use]
pub fn utf16_offset_to_index(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.char_indices() {
        let width = ch.len_utf16();
        if units + width > utf16_offset {
            return index;
        }
        units += width;
    }
    text.len()
}
