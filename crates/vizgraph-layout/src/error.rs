#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("drawable area must have a finite, positive size (got {width}x{height})")]
    InvalidArea { width: f64, height: f64 },
    #[error("rescale factor must be finite and positive (got {scale})")]
    InvalidScale { scale: f64 },
    #[error("layout parameter `{name}` is out of range (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("layout produced no position for vertex {vertex}")]
    MissingPosition { vertex: String },
}

pub type Result<T> = std::result::Result<T, Error>;
