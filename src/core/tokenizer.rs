//! Word tokenizer
//!
//! Splits raw text into lowercase word tokens:
//! - characters are case-folded before classification
//! - straight and curly double quotes end a word
//! - space and newline end a word, runs of them never yield empty tokens
//! - other punctuation is dropped without ending the word
//!
//! Usage:
//! ```rust
//! use trigrams::core::tokenizer::tokenize;
//!
//! let tokens = tokenize("\u{201C}Sandwiches,\u{201D} he said");
//! assert_eq!(tokens, vec!["sandwiches", "he", "said"]);
//! ```

use crate::core::classify::{CharClass, WordPolicy};

/// A normalized word
pub type Token = String;

/// Tokenizer bound to a word-character policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    policy: WordPolicy,
}

impl Tokenizer {
    pub fn new(policy: WordPolicy) -> Self {
        Self { policy }
    }

    /// Split `text` into tokens, preserving source order
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word = String::new();

        for c in text.chars().flat_map(char::to_lowercase) {
            match self.policy.classify(c) {
                CharClass::Word => word.push(c),
                CharClass::Boundary => {
                    if !word.is_empty() {
                        tokens.push(std::mem::take(&mut word));
                    }
                }
                CharClass::Ignored => {}
            }
        }

        if !word.is_empty() {
            tokens.push(word);
        }

        tokens
    }
}

/// Tokenize with the default Unicode policy
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::default().tokenize(text)
}
