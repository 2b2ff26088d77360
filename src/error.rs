use crate::consts::TEXT_LAYOUTS;

/// Text did not match an explicit layout, or named an impossible date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot parse {input:?} with layout {layout:?}: {source}")]
pub struct ParseError {
    pub input: String,
    pub layout: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Text matched none of the recognized date layouts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported date format {input:?}, expected one of {:?}", TEXT_LAYOUTS)]
pub struct FormatError {
    pub input: String,
}

impl FormatError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A column value whose representation cannot hold a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported column type for date: {type_name}")]
pub struct UnsupportedTypeError {
    pub type_name: &'static str,
}

/// Any error this crate returns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),
}
