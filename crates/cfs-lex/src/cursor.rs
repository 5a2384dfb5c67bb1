//! Character cursor for traversing normalized source text: a
//! byte-position cursor that also tracks 1-based line/column for error
//! reporting and handles UTF-8 correctly (tags and identifiers are ASCII
//! by grammar, but CFS source text itself is UTF-8 and may contain
//! non-ASCII characters inside comments or tag bodies).

/// A byte-position cursor over source text, tracking 1-based line/column
/// as it advances.
///
/// # Example
///
/// ```
/// use cfs_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("f(x)");
/// assert_eq!(cursor.current_char(), 'f');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '(');
/// ```
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`, line 1
    /// column 1.
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("main() return 1");
    /// assert_eq!(cursor.line(), 1);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the current position, or `'\0'` past the
    /// end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character `offset` characters ahead of the current
    /// position, without consuming anything.
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'b');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    fn char_at(&self, char_offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(char_offset)
            .unwrap_or('\0')
    }

    /// True once the cursor has consumed every byte of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character, updating line/column. A newline
    /// resets the column to 1 and bumps the line; any other character
    /// just advances the column. A no-op once [`Cursor::is_at_end`].
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        let c = self.source[self.position..].chars().next().unwrap();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes the current character iff it equals `expected`, returning
    /// whether it matched.
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.match_char('<'));
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column, in characters.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte offset into the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source slice from byte offset `start` up to (not
    /// including) the cursor's current position.
    ///
    /// # Example
    ///
    /// ```
    /// use cfs_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("main()");
    /// let start = cursor.position();
    /// for _ in 0..4 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "main");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_tracks_column() {
        let mut c = Cursor::new("ab");
        assert_eq!(c.current_char(), 'a');
        c.advance();
        assert_eq!(c.current_char(), 'b');
        assert_eq!(c.column(), 2);
    }

    #[test]
    fn newline_resets_column_and_bumps_line() {
        let mut c = Cursor::new("a\nb");
        c.advance();
        c.advance();
        assert_eq!(c.line(), 2);
        assert_eq!(c.column(), 1);
    }

    #[test]
    fn match_char_consumes_on_success_only() {
        let mut c = Cursor::new("<=");
        assert!(c.match_char('<'));
        assert!(c.match_char('='));
        assert!(c.is_at_end());
    }

    #[test]
    fn slice_from_returns_consumed_text() {
        let mut c = Cursor::new("main()");
        let start = c.position();
        for _ in 0..4 {
            c.advance();
        }
        assert_eq!(c.slice_from(start), "main");
    }
}
