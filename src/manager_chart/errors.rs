use std::fmt;
use plotters::drawing::DrawingAreaErrorKind;

#[derive(Debug)]
pub enum ChartError {
    NoData(String),
    Drawing(String),
    Encoding(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartError::NoData(e) => write!(f, "ChartError::NoData: {}", e),
            ChartError::Drawing(e) => write!(f, "ChartError::Drawing: {}", e),
            ChartError::Encoding(e) => write!(f, "ChartError::Encoding: {}", e),
        }
    }
}
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(e.to_string())
    }
}
impl From<image::ImageError> for ChartError {
    fn from(e: image::ImageError) -> Self {
        ChartError::Encoding(e.to_string())
    }
}
