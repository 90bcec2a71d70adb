//! Fixed sizing of the simulation. None of these are runtime configurable.

/// Maximum stored length of a room name, in bytes.
pub const MAX_ROOM_NAME: usize = 50;
/// Maximum stored length of a clue text, in bytes.
pub const MAX_CLUE_TEXT: usize = 100;
/// Maximum stored length of a suspect name, in bytes.
pub const MAX_SUSPECT_NAME: usize = 50;
/// Number of chains in the suspect tally table. Never resized.
pub const BUCKET_COUNT: usize = 10;
/// Minimum clue count for an accusation to stand.
pub const ACCUSATION_THRESHOLD: u32 = 3;

/// Truncates `text` to at most `max` bytes without splitting a UTF-8
/// character. Over-long input is cut silently; truncation is the documented
/// policy for every bounded string entering the simulation, not an error.
pub fn clamp(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
