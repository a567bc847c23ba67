//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from network-construction and search errors.

use super::StationId;

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A path must contain at least its origin station
    #[error("path must contain at least one station")]
    EmptyPath,

    /// Paths are simple: no station may appear twice
    #[error("path visits station {0} more than once")]
    RepeatedStation(StationId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            DomainError::EmptyPath.to_string(),
            "path must contain at least one station"
        );

        let station = StationId::parse("Marly").unwrap();
        assert_eq!(
            DomainError::RepeatedStation(station).to_string(),
            "path visits station Marly more than once"
        );
    }
}
