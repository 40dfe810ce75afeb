//! Lexical analysis module.
//!
//! This module contains the single-pass scanner that turns source text
//! into a stream of classified tokens. It handles:
//!
//! - Lookahead and single-character pushback over the input
//! - Classification of the first character of each token
//! - The transition table deciding where each token ends
//! - Serialization of tokens as `<lexeme> (<category>)` lines

pub mod classifier;
pub mod lexer;
pub mod lookahead;
pub mod tokens;
pub mod transitions;
