//! Scan cursor for the game-state text parser.
//!
//! The original client-side parser kept its scan position in shared mutable
//! state, which made it non-reentrant. Here the cursor is an explicit value
//! threaded by `&mut` through every recursive call, so decoding is safe to
//! run concurrently on different inputs.
//!
//! All structural characters of the dialect are ASCII, so byte positions
//! produced by the cursor always fall on `char` boundaries of the input.

/// A scan position over an input string.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the byte at the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consumes and returns the byte at the cursor.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// True once the whole input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes bytes up to (not including) the first occurrence of any
    /// byte in `stops`, or to end of input, and returns the consumed run.
    pub fn take_until(&mut self, stops: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if stops.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }
}
