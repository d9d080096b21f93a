//! Word-character policy
//!
//! Decides, per character, whether it extends a word, separates words,
//! or is a quotation mark. The policy is a plain value handed to the
//! tokenizer; nothing here depends on process-wide locale state.

use once_cell::sync::Lazy;

/// Left double quotation mark (U+201C)
pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';

/// Right double quotation mark (U+201D)
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';

/// How a single (already lowercased) character is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Extends the current word
    Word,
    /// Ends the current word, if any
    Boundary,
    /// Dropped without ending the current word
    Ignored,
}

/// Character classification used by the tokenizer
#[derive(Debug, Clone, Copy)]
pub struct WordPolicy {
    is_word_char: fn(char) -> bool,
    is_separator: fn(char) -> bool,
}

/// Shared default policy
pub static UNICODE_POLICY: Lazy<WordPolicy> = Lazy::new(WordPolicy::unicode);

impl Default for WordPolicy {
    fn default() -> Self {
        *UNICODE_POLICY
    }
}

impl WordPolicy {
    /// Create a policy from custom predicates
    pub fn new(is_word_char: fn(char) -> bool, is_separator: fn(char) -> bool) -> Self {
        Self {
            is_word_char,
            is_separator,
        }
    }

    /// Unicode-aware policy: alphanumerics and anything outside 7-bit ASCII are
    /// word content, space and newline separate words.
    pub fn unicode() -> Self {
        Self::new(is_unicode_word_char, is_line_separator)
    }

    /// Classify one character. Quotes always act as boundaries and are checked
    /// before the word test, since curly quotes sit outside the ASCII range.
    #[inline]
    pub fn classify(&self, c: char) -> CharClass {
        if is_quote(c) || (self.is_separator)(c) {
            CharClass::Boundary
        } else if (self.is_word_char)(c) {
            CharClass::Word
        } else {
            CharClass::Ignored
        }
    }
}

/// Straight or curly double quotation mark
#[inline]
pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | LEFT_DOUBLE_QUOTE | RIGHT_DOUBLE_QUOTE)
}

/// Alphanumeric, or any code point above 0x7F
#[inline]
pub fn is_unicode_word_char(c: char) -> bool {
    c.is_alphanumeric() || !c.is_ascii()
}

#[inline]
fn is_line_separator(c: char) -> bool {
    matches!(c, ' ' | '\n')
}
