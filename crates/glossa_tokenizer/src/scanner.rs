//! The scanner converts raw text into a stream of positioned tokens.
//!
//! Scanning is ordered-alternative, most-specific-match-first: lexicon
//! units (contractions, article fusions, abbreviations) are tried before
//! the generic number, word, and punctuation rules, so `"don't"` or
//! `"e.g."` becomes one token rather than being split. Whitespace is
//! consumed and discounted from spans but still advances the cursor.

use glossa_foundation::{Error, PosTag, Result, Span, Token};
use glossa_lexicon::Lexicon;

/// Sentence-terminal and clause punctuation recognized by the scanner.
const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '"', '\'', '\u{2018}', '\u{2019}', '\u{201c}',
    '\u{201d}', '\u{2014}', '\u{2013}', '-', '\u{ab}', '\u{bb}', '\u{bf}', '\u{a1}', '\u{2026}',
];

/// Scanner for natural-language text.
///
/// Tracks an exact running byte offset and line/column counter, updated
/// as each matched unit (including intervening whitespace) is consumed.
/// Downstream stages reconstruct text by span, so offsets are byte-exact.
pub struct Scanner<'src, 'lex> {
    /// Source text being scanned.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Lexical tables for the language being scanned.
    lexicon: &'lex Lexicon,
}

impl<'src, 'lex> Scanner<'src, 'lex> {
    /// Creates a new scanner over the given source.
    #[must_use]
    pub fn new(source: &'src str, lexicon: &'lex Lexicon) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            lexicon,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// # Errors
    /// Returns an error carrying the exact line, column, and byte offset
    /// if no rule can scan the character at the cursor.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();

        if self.rest.is_empty() {
            return Ok(None);
        }

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        // Language-specific multi-character units first, longest match wins.
        if let Some((unit, consumed)) = self.lexicon.match_unit(self.rest) {
            let tag = unit.tag.unwrap_or(PosTag::Unresolved);
            self.advance_bytes(consumed);
            return Ok(Some(self.finish(start, start_line, start_column, tag)));
        }

        let c = self.rest.chars().next().unwrap_or_default();
        let tag = if c.is_ascii_digit() {
            self.scan_number();
            PosTag::Number
        } else if c.is_alphabetic() {
            self.scan_word();
            PosTag::Unresolved
        } else if PUNCTUATION.contains(&c) {
            self.advance();
            PosTag::Punctuation
        } else {
            return Err(Error::unscannable(c, start_line, start_column, start));
        };

        Ok(Some(self.finish(start, start_line, start_column, tag)))
    }

    /// Builds a token from the consumed region.
    fn finish(&self, start: usize, start_line: u32, start_column: u32, tag: PosTag) -> Token {
        let span = Span::new(
            start,
            self.position,
            start_line,
            start_column,
            self.line,
            self.column,
        );
        Token::new(
            &self.source[start..self.position],
            tag,
            self.lexicon.language(),
            span,
        )
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character after the next one.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances past exactly `count` bytes (a whole number of chars).
    fn advance_bytes(&mut self, count: usize) {
        let target = self.position + count;
        while self.position < target {
            self.advance();
        }
    }

    /// Skips whitespace, still advancing the line/column/byte cursor.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans a number: digits with at most one interior decimal point.
    fn scan_number(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && self.peek_char_n(1).is_some_and(|d| d.is_ascii_digit()) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scans a word: alphabetic characters, with interior apostrophes,
    /// interpuncts, and hyphens joining when flanked by letters (so
    /// `col·laborar` and `well-known` each scan as one token).
    fn scan_word(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() {
                self.advance();
            } else if matches!(c, '\'' | '\u{2019}' | '\u{b7}' | '-')
                && self.peek_char_n(1).is_some_and(char::is_alphabetic)
            {
                self.advance();
            } else {
                break;
            }
        }
    }
}

/// Tokenizes text into a flat, ordered sequence of positioned tokens.
///
/// Empty or whitespace-only input yields an empty vector.
///
/// # Errors
/// Returns an error with the exact failure position if the text
/// contains a character no rule can scan.
pub fn tokenize(source: &str, lexicon: &Lexicon) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(source, lexicon);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
