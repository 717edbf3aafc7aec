use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("workbook contains no worksheets")]
    EmptyWorkbook,
    #[error("invalid patient id: {0:?}")]
    InvalidPatientId(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
