//! # Location
//!
//! Conversion from code point offsets, as carried by spans, to positions
//! in lines of text. The main struct is [`LocationBuilder`].

/// # Summary
///
/// Information about a position in a text,
/// stored as `(line, char_position)`
///
/// # Example
///
/// ```text
/// abc def
/// ghi
/// ```
///
/// Here, the `Location` of `a` is `(0, 0)`,
/// and the one of `i` is `(1, 2)`.
pub type Location = (usize, usize);


/// # Summary
/// `LocationBuilder` remembers where the lines of a text start, so that
/// many offsets can be located without rescanning the text.
#[derive(Debug)]
pub struct LocationBuilder {
    newlines: Vec<usize>,
}

impl LocationBuilder {
    pub fn new(text: impl AsRef<str>) -> Self {
        let newlines = text
            .as_ref()
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == '\n')
            .map(|(i, _)| i)
            .collect();

        Self { newlines }
    }

    /// Locate the code point offset `pos`. A newline belongs to the line it ends.
    pub fn at(&self, pos: usize) -> Location {
        let line = match self.newlines.binary_search(&pos) {
            Ok(x) | Err(x) => x,
        };
        if line == 0 {
            (0, pos)
        } else {
            (line, pos - self.newlines[line - 1] - 1)
        }
    }
}
