use thiserror::Error;

/// Errors raised while reading a textual NFA description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("line {line}: unknown section `{name}`")]
    UnknownSection { line: usize, name: String },

    #[error("line {line}: section `{name}` is given twice")]
    DuplicateSection { line: usize, name: String },

    #[error("line {line}: expected `section: values` or `state, symbol -> targets`")]
    UnrecognizedLine { line: usize },

    #[error("line {line}: transition source must be `state, symbol`")]
    MalformedTransition { line: usize },

    #[error("line {line}: transition has no source state")]
    MissingSourceState { line: usize },

    #[error("description has no `start` section")]
    MissingStart,
}
