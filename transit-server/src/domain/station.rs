//! Station identifier and record types.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated station identifier.
///
/// Station ids are free-form names ("Portal Norte", "Calle 100") rather
/// than fixed-width codes, so the only structural requirement is that the
/// id is non-empty after trimming surrounding whitespace. This type
/// guarantees that requirement by construction.
///
/// # Examples
///
/// ```
/// use transit_server::domain::StationId;
///
/// let id = StationId::parse("Portal Norte").unwrap();
/// assert_eq!(id.as_str(), "Portal Norte");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(StationId::parse("  Calle 100 ").unwrap().as_str(), "Calle 100");
///
/// // Empty and blank ids are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// Trims surrounding whitespace; the trimmed id must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station record: identifier plus the corridor (trunk line group) it
/// belongs to.
///
/// Immutable once the network is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Unique station identifier.
    pub id: StationId,

    /// Corridor label, e.g. "A" or "NQS Central".
    pub corridor: String,
}

impl Station {
    /// Create a new station record.
    pub fn new(id: StationId, corridor: impl Into<String>) -> Self {
        Self {
            id,
            corridor: corridor.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("Portal Norte").is_ok());
        assert!(StationId::parse("Calle 100").is_ok());
        assert!(StationId::parse("A").is_ok());
    }

    #[test]
    fn reject_empty_and_blank() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(" ").is_err());
        assert!(StationId::parse("\t\n").is_err());
    }

    #[test]
    fn trims_whitespace() {
        let id = StationId::parse("  Portal Sur  ").unwrap();
        assert_eq!(id.as_str(), "Portal Sur");
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("Marly").unwrap();
        assert_eq!(format!("{}", id), "Marly");
        assert_eq!(format!("{:?}", id), "StationId(Marly)");
    }

    #[test]
    fn equality_ignores_surrounding_whitespace_after_parse() {
        let a = StationId::parse("Heroes").unwrap();
        let b = StationId::parse(" Heroes ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId::parse("Calle 72").unwrap());
        assert!(set.contains(&StationId::parse("Calle 72").unwrap()));
        assert!(!set.contains(&StationId::parse("Calle 76").unwrap()));
    }

    #[test]
    fn station_record() {
        let station = Station::new(StationId::parse("Portal Norte").unwrap(), "A");
        assert_eq!(station.id.as_str(), "Portal Norte");
        assert_eq!(station.corridor, "A");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing a non-blank string succeeds and round-trips the trimmed form.
        #[test]
        fn roundtrip_trimmed(s in "[a-zA-Z0-9 ]{1,30}") {
            match StationId::parse(&s) {
                Ok(id) => prop_assert_eq!(id.as_str(), s.trim()),
                Err(_) => prop_assert!(s.trim().is_empty()),
            }
        }

        /// Whitespace-only strings are always rejected.
        #[test]
        fn blank_rejected(s in "[ \t]{0,10}") {
            prop_assert!(StationId::parse(&s).is_err());
        }

        /// Parsing is idempotent: re-parsing the parsed form changes nothing.
        #[test]
        fn parse_idempotent(s in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}[a-zA-Z0-9]") {
            let once = StationId::parse(&s).unwrap();
            let twice = StationId::parse(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
