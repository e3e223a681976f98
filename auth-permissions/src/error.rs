use thiserror::Error;

#[derive(Error, Debug)]
pub enum PermissionError {
    #[error("Malformed permission bit-set: {0}")]
    MalformedBits(#[from] num_bigint::ParseBigIntError),

    #[error("Unknown permission: {0}")]
    UnknownPermission(String),
}

pub type Result<T> = std::result::Result<T, PermissionError>;
