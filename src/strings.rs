/// The same text seen through each of its encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingViews {
    pub utf8: Vec<u8>,
    pub utf16: Vec<u16>,
    pub scalars: Vec<u32>,
    /// UTF-8 bytes followed by a trailing NUL.
    pub c_string: Vec<u8>,
}

impl EncodingViews {
    pub fn of(text: &str) -> Self {
        let utf8 = text.as_bytes().to_vec();
        let mut c_string = utf8.clone();
        c_string.push(0);

        Self {
            utf8,
            utf16: text.encode_utf16().collect(),
            scalars: text.chars().map(u32::from).collect(),
            c_string,
        }
    }
}

/// Character at `offset` from the start, or from the end when negative
/// (`-1` is the last character).
pub fn char_at(text: &str, offset: isize) -> Option<char> {
    if offset >= 0 {
        text.chars().nth(offset.unsigned_abs())
    } else {
        text.chars().rev().nth(offset.unsigned_abs() - 1)
    }
}

pub fn prefix_before(text: &str, ch: char) -> &str {
    match text.find(ch) {
        Some(end) => &text[..end],
        None => text,
    }
}
