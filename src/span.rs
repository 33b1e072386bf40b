//! # Span
//!
//! A categorized slice of the tokenized input.
//! The main struct is [`Span`].

use crate::category::Category;
use serde::Serialize;
use std::fmt;


/// # Summary
///
/// `Span` is one piece of the tokenizer's output. It records
///  - `offset`: where the text starts, in code points from the start of input;
///  - `start_byte`: the same position as a byte index, to slice the input with;
///  - `category`: the rendering intent of the text;
///  - `text`: the slice of the input it covers, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'text> {
    offset: usize,
    start_byte: usize,
    category: Category,
    text: &'text str,
}

impl<'text> Span<'text> {
    pub fn new(offset: usize, start_byte: usize, category: Category, text: &'text str) -> Self {
        Self {
            offset,
            start_byte,
            category,
            text,
        }
    }

    /// Returns the position of the first character, in code points.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the position right after the last character, in code points.
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.chars().count()
    }

    pub fn start_byte(&self) -> usize {
        self.start_byte
    }

    pub fn end_byte(&self) -> usize {
        self.start_byte + self.text.len()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn text(&self) -> &'text str {
        self.text
    }

    /// Merge `self` with the span that immediately follows it, if both carry
    /// the same category. `source` must be the input both spans come from.
    /// Otherwise both spans are handed back untouched, which makes this fit
    /// for `Itertools::coalesce`.
    pub fn merge(self, next: Self, source: &'text str) -> Result<Self, (Self, Self)> {
        if self.category == next.category && self.end_byte() == next.start_byte {
            Ok(Self {
                text: &source[self.start_byte..next.end_byte()],
                ..self
            })
        } else {
            Err((self, next))
        }
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.offset, self.category, self.text)
    }
}
