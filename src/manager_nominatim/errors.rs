use std::fmt;

#[derive(Debug)]
pub enum NominatimError {
    NotFound(String),
    Transport(String),
    Document(String),
}

impl fmt::Display for NominatimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NominatimError::NotFound(city) => write!(f, "NominatimError::NotFound: {}", city),
            NominatimError::Transport(e) => write!(f, "NominatimError::Transport: {}", e),
            NominatimError::Document(e) => write!(f, "NominatimError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for NominatimError {
    fn from(e: reqwest::Error) -> Self {
        NominatimError::Transport(e.to_string())
    }
}
impl From<serde_json::Error> for NominatimError {
    fn from(e: serde_json::Error) -> Self {
        NominatimError::Document(e.to_string())
    }
}
impl From<std::num::ParseFloatError> for NominatimError {
    fn from(e: std::num::ParseFloatError) -> Self {
        NominatimError::Document(e.to_string())
    }
}
