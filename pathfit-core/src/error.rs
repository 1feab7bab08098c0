// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A list of things that can go wrong while parsing or deriving.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected nothing before command")]
    ExpectedNothingBeforeCommand,
    #[error("expected moveto at start")]
    ExpectedMovetoAtStart,
    #[error("expected number")]
    ExpectedNumber,
    #[error("expected flag")]
    ExpectedFlag,
    #[error("expected nothing after close")]
    ExpectedNothingAfterClose,
    #[error("expected opening brace")]
    ExpectedOpeningBrace,
    #[error("expected closing brace")]
    ExpectedClosingBrace,
    #[error("wrong number of arguments")]
    WrongArgumentCount,
    #[error("invalid or unusable length")]
    InvalidLength,
    #[error("invalid viewBox")]
    InvalidViewBox,
    #[error("invalid preserveAspectRatio")]
    InvalidPreserveAspectRatio,
    #[error("invalid object-fit")]
    InvalidObjectFit,
    #[error("invalid object-position")]
    InvalidObjectPosition,
    #[error("insufficient data to determine a viewport")]
    InsufficientData,
    #[error("no reference viewBox is set")]
    ReferenceNotSet,
    #[error("no path is set")]
    PathNotSet,
}

/// A parse or derivation error.
///
/// `text` is the offending input. For grammar errors it is the single
/// command substring, letter included, and `position` is a byte offset
/// into it.
#[derive(Clone, PartialEq, Debug, thiserror::Error)]
#[error("{kind}\n{text}{}", caret(.position))]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The input the error refers to.
    pub text: String,
    /// Byte offset into `text`, when known.
    pub position: Option<usize>,
}

impl Error {
    /// Creates an error without a position.
    pub fn new(kind: ErrorKind, text: impl Into<String>) -> Self {
        Error {
            kind,
            text: text.into(),
            position: None,
        }
    }

    /// Creates an error pointing at a byte offset in `text`.
    pub fn at(kind: ErrorKind, text: impl Into<String>, position: usize) -> Self {
        Error {
            kind,
            text: text.into(),
            position: Some(position),
        }
    }
}

fn caret(position: &Option<usize>) -> String {
    match *position {
        Some(pos) => format!("\n{}^", "_".repeat(pos)),
        None => String::new(),
    }
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
