use core::fmt;

/// Reason a tokenizer or parser operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The echoed command identifier was not present in the response.
    CommandNotFound,
    /// Fewer comma separated fields than the requested position.
    MissingField,
    /// An opening or closing parenthesis was not found.
    MissingDelimiter,
    /// Field text could not be converted to the bound numeric slot.
    InvalidNumber,
    /// Text did not fit in a fixed capacity buffer.
    Overflow,
    /// A string slot was already borrowed by the caller while parsing.
    SlotBusy,
    /// No room left in the parser tree.
    TreeFull,
    /// Node handle does not belong to the parser tree.
    InvalidNode,
    /// The parser kind does not implement extraction.
    NotSupported,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CommandNotFound => "command identifier not found in response".fmt(f),
            Error::MissingField => "requested field position is out of range".fmt(f),
            Error::MissingDelimiter => "missing parenthesis delimiter".fmt(f),
            Error::InvalidNumber => "field is not a valid number".fmt(f),
            Error::Overflow => "text exceeds buffer capacity".fmt(f),
            Error::SlotBusy => "output slot is already borrowed".fmt(f),
            Error::TreeFull => "parser tree is full".fmt(f),
            Error::InvalidNode => "invalid parser node".fmt(f),
            Error::NotSupported => "operation not supported".fmt(f),
        }
    }
}

/// Three valued outcome of a parse, for callers that only need the coarse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    Success,
    Error,
    NotSupported,
}

impl From<Error> for ErrorCode {
    fn from(e: Error) -> Self {
        match e {
            Error::NotSupported => Self::NotSupported,
            _ => Self::Error,
        }
    }
}

impl<T> From<&Result<T, Error>> for ErrorCode {
    fn from(res: &Result<T, Error>) -> Self {
        match res {
            Ok(_) => Self::Success,
            Err(e) => Self::from(*e),
        }
    }
}
