use thiserror::Error;

/// Why an operation on the catalogue was refused. Returned as a value,
/// adapters decide how it reaches the client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookFailure {
    #[error("Book is null")]
    Null,

    #[error("Book id is empty or null")]
    IdBlank,

    #[error("Book name is empty or null")]
    NameBlank,

    #[error("Book already exist!")]
    AlreadyExists,

    #[error("Book not found!")]
    NotFound,

    #[error("{0}")]
    Generic(String),
}

impl BookFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::IdBlank => "ID_BLANK",
            Self::NameBlank => "NAME_BLANK",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Generic(_) => "GENERIC",
        }
    }
}
