//! Line identifier type.

use std::fmt;

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A validated line identifier, e.g. "B74" or "1".
///
/// Line ids label the route a segment belongs to; a change of line id
/// between two consecutive segments of a path is a transfer. Like
/// [`StationId`](super::StationId), the only structural requirement is a
/// non-empty trimmed value.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }

        Ok(LineId(trimmed.to_string()))
    }

    /// Returns the line id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert!(LineId::parse("1").is_ok());
        assert!(LineId::parse("B74").is_ok());
        assert_eq!(LineId::parse(" H13 ").unwrap().as_str(), "H13");
    }

    #[test]
    fn reject_blank() {
        assert!(LineId::parse("").is_err());
        assert!(LineId::parse("  ").is_err());
    }

    #[test]
    fn display() {
        let line = LineId::parse("D20").unwrap();
        assert_eq!(format!("{}", line), "D20");
        assert_eq!(format!("{:?}", line), "LineId(D20)");
    }

    #[test]
    fn equality() {
        assert_eq!(LineId::parse("1").unwrap(), LineId::parse("1").unwrap());
        assert_ne!(LineId::parse("1").unwrap(), LineId::parse("2").unwrap());
    }
}
