use thiserror::Error;

pub type PayoutResult<T> = Result<T, PayoutError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayoutError {
    #[error(
        "Unsupported combination: {method} in {country}. Supported: mobile_wallet(ph,in), bank_transfer(multiple countries)"
    )]
    UnsupportedCombination { method: String, country: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PayoutError {
    pub fn unsupported_combination(method: impl Into<String>, country: impl Into<String>) -> Self {
        Self::UnsupportedCombination {
            method: method.into(),
            country: country.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn is_unsupported_combination(&self) -> bool {
        matches!(self, Self::UnsupportedCombination { .. })
    }
}
