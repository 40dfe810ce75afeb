use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Category, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// An error that is not tied to a place in a source file.
    pub fn unpositioned(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, Position::null())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Scan faults and a missing argument list end the run; failing to
    /// open or create a file only skips that file.
    pub fn is_fatal(&self) -> bool {
        match &self.internal_error {
            ErrorImpl::InputNotFound { .. }
            | ErrorImpl::OutputNotCreatable { .. }
            | ErrorImpl::OutputWriteFailed { .. } => false,
            ErrorImpl::UnrecognisedLexeme { .. }
            | ErrorImpl::UnterminatedLiteral { .. }
            | ErrorImpl::BufferOverflow { .. }
            | ErrorImpl::NoArguments => true,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InputNotFound { .. } => "InputNotFound",
            ErrorImpl::OutputNotCreatable { .. } => "OutputNotCreatable",
            ErrorImpl::OutputWriteFailed { .. } => "OutputWriteFailed",
            ErrorImpl::UnrecognisedLexeme { .. } => "UnrecognisedLexeme",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::BufferOverflow { .. } => "BufferOverflow",
            ErrorImpl::NoArguments => "NoArguments",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InputNotFound { path } => {
                ErrorTip::Suggestion(format!("No such file: {}", path))
            }
            ErrorImpl::OutputNotCreatable { path } => {
                ErrorTip::Suggestion(format!("Could not create file: {}", path))
            }
            ErrorImpl::OutputWriteFailed { path, message } => {
                ErrorTip::Suggestion(format!("Could not write to {}: {}", path, message))
            }
            ErrorImpl::UnrecognisedLexeme { lexeme } => {
                ErrorTip::Suggestion(format!("Unrecognised lexeme `{}`", lexeme))
            }
            ErrorImpl::UnterminatedLiteral { category, lexeme } => ErrorTip::Suggestion(format!(
                "Input ended inside {} `{}`, is a closing delimiter missing?",
                category, lexeme
            )),
            ErrorImpl::BufferOverflow { limit } => ErrorTip::Suggestion(format!(
                "Lexeme is longer than {} bytes",
                limit
            )),
            ErrorImpl::NoArguments => ErrorTip::Suggestion(String::from(
                "Not enough arguments, pass at least one file",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("error opening file, no such file: {path}")]
    InputNotFound { path: String },
    #[error("error creating file: {path}")]
    OutputNotCreatable { path: String },
    #[error("error writing file {path}: {message}")]
    OutputWriteFailed { path: String, message: String },
    #[error("unrecognised lexeme: {lexeme}")]
    UnrecognisedLexeme { lexeme: String },
    #[error("unterminated {category}: {lexeme}")]
    UnterminatedLiteral { category: Category, lexeme: String },
    #[error("lexeme exceeds the {limit} byte buffer")]
    BufferOverflow { limit: usize },
    #[error("not enough arguments, expected at least one file")]
    NoArguments,
}
