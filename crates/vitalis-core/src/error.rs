use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("assessment record is not a JSON object")]
    NotAnObject,

    #[error("missing required field: {0}")]
    MissingField(String),
}
