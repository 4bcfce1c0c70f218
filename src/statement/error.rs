use std::num::ParseIntError;

use thiserror::Error;

use crate::formats::grid::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A cell doesn't have the expected layout.
    Format,
    /// A date or a number can't be decoded.
    Decode,
    /// A decoded value violates a domain constraint.
    Validation,
    Io,
}

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("Invalid statement period: {0:?}")]
    InvalidFormat(String),

    #[error("Invalid statement period start date: {0:?}")]
    InvalidStartDate(String),

    #[error("Invalid statement period end date: {0:?}")]
    InvalidEndDate(String),

    #[error("Invalid trading participant: {0:?}")]
    InvalidParticipant(String),

    #[error("Invalid financial institution: {0:?}")]
    InvalidInstitution(String),

    #[error("Invalid financial institution code: {0:?}")]
    InvalidInstitutionCode(String),

    #[error("The statement has no movements or is invalid")]
    NoMovementOrInvalidFile,

    #[error("Invalid trade date: {0:?}")]
    InvalidTradeDate(String),

    #[error("Invalid operation type: {0:?}")]
    InvalidOperationType(String),

    #[error("Invalid market")]
    InvalidMarket,

    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    // The raw decoding error is reported as is
    #[error(transparent)]
    InvalidValue(ParseIntError),

    #[error("Invalid total value: {0:?}")]
    InvalidTotalValue(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl StatementError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatementError::InvalidFormat(_) |
            StatementError::InvalidInstitution(_) => ErrorKind::Format,

            StatementError::InvalidStartDate(_) |
            StatementError::InvalidEndDate(_) |
            StatementError::InvalidParticipant(_) |
            StatementError::InvalidInstitutionCode(_) |
            StatementError::InvalidTradeDate(_) |
            StatementError::InvalidQuantity(_) |
            StatementError::InvalidValue(_) |
            StatementError::InvalidTotalValue(_) => ErrorKind::Decode,

            StatementError::NoMovementOrInvalidFile |
            StatementError::InvalidOperationType(_) |
            StatementError::InvalidMarket => ErrorKind::Validation,

            StatementError::Grid(GridError::Io {..}) => ErrorKind::Io,
            StatementError::Grid(GridError::Read {..}) => ErrorKind::Format,
        }
    }
}

pub type StatementResult<T> = Result<T, StatementError>;
