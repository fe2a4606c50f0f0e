pub mod parser;
pub mod pipeline;
pub mod validate;

#[derive(Debug, PartialEq)]
pub enum SubmissionError {
    /// A required field was absent or blank.
    MissingField(&'static str),
    /// The body could not be decoded into an application payload.
    Malformed(String),
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::MissingField(field) => write!(f, "{field} is required"),
            SubmissionError::Malformed(msg) => write!(f, "Malformed submission: {msg}"),
        }
    }
}
