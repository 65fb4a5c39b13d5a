use thiserror::Error;

/// Error type that captures the failure classes of the hotel workflows.
#[derive(Debug, Error)]
pub enum HotelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl HotelError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        HotelError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// HTTP status the embedding server should answer with.
    ///
    /// Missing entities are 404, conflicts and workflow violations are 400,
    /// malformed input is 422, storage faults surface as 500.
    pub fn status_code(&self) -> u16 {
        match self {
            HotelError::NotFound { .. } => 404,
            HotelError::Conflict(_)
            | HotelError::InvalidState(_)
            | HotelError::InvalidAmount(_) => 400,
            HotelError::Validation(_) => 422,
            HotelError::Io(_) | HotelError::Serde(_) | HotelError::Storage(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_api_contract() {
        assert_eq!(HotelError::not_found("Room", "abc").status_code(), 404);
        assert_eq!(HotelError::Conflict("duplicate".into()).status_code(), 400);
        assert_eq!(
            HotelError::InvalidState("not checked in".into()).status_code(),
            400
        );
        assert_eq!(
            HotelError::Validation("check-out before check-in".into()).status_code(),
            422
        );
    }
}
