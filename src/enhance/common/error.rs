use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Parameter {parameter} = {value} outside supported range {range}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer length {actual} does not match {width}x{height} RGB image ({expected} bytes)")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
