
/// # Summary
///
/// A cursor over a string, advanced by byte index, which keeps track of
/// the matching position in code points.
///
/// # Methods
/// `new`: build a `StringStream`.
/// `pos`: the current position, in code points.
/// `byte_pos`: the current position, as a byte index.
/// `peek`: the rest of the input.
/// `line`: the input up to the end of the current line.
/// `advance_to`: move the cursor forward.
/// `is_empty`: whether the whole input has been consumed.
#[derive(Debug, Clone)]
pub struct StringStream<'text> {
    stream: &'text str,
    bytes_pos: usize,
    chars_pos: usize,
    line_end: usize,
}

impl<'text> StringStream<'text> {
    pub fn new(stream: &'text str) -> Self {
        Self {
            stream,
            bytes_pos: 0,
            chars_pos: 0,
            line_end: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.chars_pos
    }

    pub fn byte_pos(&self) -> usize {
        self.bytes_pos
    }

    /// Return a string slice corresponding to the
    /// underlying string, starting at the position of the stream.
    pub fn peek(&self) -> &'text str {
        &self.stream[self.bytes_pos..]
    }

    /// Return the underlying string from its very beginning up to the end of
    /// the line the stream is on, newline included. Everything before the
    /// position is kept so that anchors see the right context.
    pub fn line(&mut self) -> &'text str {
        if self.bytes_pos >= self.line_end {
            self.line_end = match self.peek().find('\n') {
                Some(newline) => self.bytes_pos + newline + 1,
                None => self.stream.len(),
            };
        }
        &self.stream[..self.line_end]
    }

    /// Move the stream to the byte index `end`, which must be a character
    /// boundary at or after the current position.
    pub fn advance_to(&mut self, end: usize) {
        debug_assert!(end >= self.bytes_pos);
        self.chars_pos += self.stream[self.bytes_pos..end].chars().count();
        self.bytes_pos = end;
    }

    /// Return the whole underlying string.
    pub fn borrow(&self) -> &'text str {
        self.stream
    }

    /// Return whether the stream has been consumed.
    pub fn is_empty(&self) -> bool {
        self.bytes_pos == self.stream.len()
    }
}
