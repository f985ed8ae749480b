use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyInput(String),
    UnmappedToken(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput(msg) => write!(f, "Empty Input Error: {}", msg),
            Error::UnmappedToken(msg) => write!(f, "Unmapped Token Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
