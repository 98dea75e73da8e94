use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset is empty: scale domains cannot be computed")]
    EmptyDataset,

    #[error("failed to load dataset: {0}")]
    Load(String),

    #[error("required column `{0}` is missing")]
    MissingColumn(String),

    #[error("row {row}: column `{column}` value `{value}` is not a finite number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("unknown field: {0}")]
    UnknownField(String),
}
