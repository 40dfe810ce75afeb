//! Character source with side-effect free lookahead and single-character
//! pushback.
//!
//! End of input is `None`, which no character value can collide with.

use std::collections::VecDeque;

pub struct Lookahead<I: Iterator<Item = char>> {
    chars: I,
    /// Characters pulled from `chars` by a peek but not yet read.
    peeked: VecDeque<char>,
    /// At most one character returned by the scan loop.
    pushed_back: Option<char>,
    /// Byte offset of the next character a read will return.
    offset: usize,
}

impl<I: Iterator<Item = char>> Lookahead<I> {
    pub fn new(chars: I) -> Self {
        Lookahead {
            chars,
            peeked: VecDeque::new(),
            pushed_back: None,
            offset: 0,
        }
    }

    /// Reads and consumes the next character.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = match self.pushed_back.take() {
            Some(ch) => Some(ch),
            None => self.peeked.pop_front().or_else(|| self.chars.next()),
        }?;

        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Returns the next `n` characters without consuming them, or `None` if
    /// the input ends before `n` characters are available.
    pub fn peek(&mut self, n: usize) -> Option<String> {
        let from_pushback = usize::from(self.pushed_back.is_some());
        let needed = n.saturating_sub(from_pushback);

        while self.peeked.len() < needed {
            let ch = self.chars.next()?;
            self.peeked.push_back(ch);
        }

        Some(
            self.pushed_back
                .iter()
                .chain(self.peeked.iter())
                .take(n)
                .collect(),
        )
    }

    /// The character the next read will return.
    pub fn peek_char(&mut self) -> Option<char> {
        self.peek(1).and_then(|s| s.chars().next())
    }

    /// Un-reads `ch` so the next read returns it.
    ///
    /// # Panics
    ///
    /// Panics if a character is already pushed back; the scan loop reads
    /// between any two pushbacks.
    pub fn push_back(&mut self, ch: char) {
        assert!(
            self.pushed_back.is_none(),
            "pushback depth exceeded: {:?} is already pending",
            self.pushed_back
        );

        self.offset = self.offset.saturating_sub(ch.len_utf8());
        self.pushed_back = Some(ch);
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}
