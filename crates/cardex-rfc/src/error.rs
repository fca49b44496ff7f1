use thiserror::Error;

/// Conversion errors surfaced to callers
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("empty vCard input")]
    EmptyInput,

    #[error(transparent)]
    CoreError(#[from] cardex_core::error::CoreError),
}

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
