use std::{fmt::Formatter, str::Chars};

mod line;
pub use line::Line;

/// A position inside a source string.
///
/// Advancing the cursor keeps track of the current line, so cloning a cursor
/// at the start of a lexeme remembers the line the lexeme started on.
#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    line: Line,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The full source is usually too verbose, only print it on {:#?}
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("line", &self.line)
                .field("offset", &self.offset())
                .field("source", &self.source)
                .finish()
        } else {
            f.debug_struct("Cursor")
                .field("line", &self.line)
                .field("offset", &self.offset())
                .finish()
        }
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars(), line: Line(1) }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    pub fn is_at_end(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Consumes the next character only if it is `expected`.
    pub fn advance_if_eq(&mut self, expected: char) -> bool {
        self.advance_if(|c| c == expected)
    }

    pub fn advance_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters as long as `pred` holds, stopping before the first
    /// character that doesn't match (or at the end of the source).
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.advance_if(&pred) {}
    }

    pub fn slice_until(&self, end: &Cursor<'a>) -> &'a str {
        debug_assert!(std::ptr::eq(self.source, end.source));
        &self.source[self.offset()..end.offset()]
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line.0 += 1;
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_until() {
        let mut cursor: Cursor = "ab\ncd\n\n".into();

        cursor.next(); // 'a'

        let start = cursor.clone();

        cursor.next(); // 'b'
        cursor.next(); // '\n'
        cursor.next(); // 'c'

        assert_eq!(start.slice_until(&cursor), "b\nc");
        assert_eq!((start.offset(), cursor.offset()), (1, 4));
        assert_eq!((start.line(), cursor.line()), (Line(1), Line(2)));
    }

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new("ab");

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_next(), Some('b'));
        assert_eq!(cursor.offset(), 0);

        let cursor = Cursor::new("");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek_next(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn line_tracking() {
        let mut cursor = Cursor::new("a\n\nb");

        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.line(), Line(1));
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.line(), Line(2));
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.line(), Line(3));
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.line(), Line(3));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn conditional_advance() {
        let mut cursor = Cursor::new("==x");

        assert!(cursor.advance_if_eq('='));
        assert!(!cursor.advance_if_eq('x'));
        assert!(cursor.advance_if_eq('='));
        assert!(cursor.advance_if_eq('x'));
        assert!(!cursor.advance_if_eq('x'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn advance_while_stops_before_mismatch() {
        let mut cursor = Cursor::new("123.5");
        let start = cursor.clone();

        cursor.advance_while(|c| c.is_ascii_digit());

        assert_eq!(start.slice_until(&cursor), "123");
        assert_eq!(cursor.peek(), Some('.'));

        cursor = "\u{e9}t\u{e9}!".into();
        let start = cursor.clone();
        cursor.advance_while(char::is_alphabetic);
        assert_eq!(start.slice_until(&cursor), "\u{e9}t\u{e9}");
        assert_eq!(cursor.offset(), 5);
    }
}
