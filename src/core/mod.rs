//! Core module - Tokenizing, counting and ranking
//!
//! This module provides:
//! - Word-character classification policy
//! - Tokenizer
//! - Trigram frequency table and counter
//! - Ranker
//! - Input source reading
//! - Report rendering

pub mod classify;
pub mod counter;
pub mod rank;
pub mod render;
pub mod source;
pub mod tokenizer;
