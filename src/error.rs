use std::io;

use thiserror::Error;

use crate::crossword::SlotId;

/// The structural model of a crossword breaks an invariant the solver relies on
#[derive(Error, Debug, PartialEq)]
#[error("invalid crossword: {}", msg)]
pub struct InvalidCrossword {
    msg: String,
}

impl InvalidCrossword {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }

    pub(crate) fn shared_cells(a: SlotId, b: SlotId) -> Self {
        Self::new(format!("slots {} and {} share more than one cell", a, b))
    }
}

#[derive(Error, Debug)]
pub enum FromFileError {
    #[error("error reading file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseCrosswordError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseCrosswordError {
    #[error("crossword structure is empty")]
    Empty,
    #[error(transparent)]
    InvalidCrossword(#[from] InvalidCrossword),
}
