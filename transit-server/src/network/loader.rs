//! CSV loading for station and segment records.
//!
//! The network definition lives in two CSV files: a station file with
//! `station,corridor` columns and a segment file with
//! `line,kind,origin,destination` columns.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{LineId, Segment, Station, StationId};

use super::{Network, NetworkError};

/// Errors from loading a network definition from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading or parsing a CSV file failed
    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record contains a field that fails domain validation
    #[error("{path}, record {record}: {message}")]
    BadRecord {
        path: PathBuf,
        record: usize,
        message: String,
    },

    /// The loaded records do not form a valid network
    #[error(transparent)]
    Network(#[from] NetworkError),
}

#[derive(Debug, Deserialize)]
struct StationRecord {
    station: String,
    corridor: String,
}

#[derive(Debug, Deserialize)]
struct SegmentRecord {
    line: String,
    kind: String,
    origin: String,
    destination: String,
}

/// Load a network from a station CSV and a segment CSV.
pub fn load_network(
    stations_path: impl AsRef<Path>,
    segments_path: impl AsRef<Path>,
) -> Result<Network, LoadError> {
    let stations = load_stations(stations_path.as_ref())?;
    let segments = load_segments(segments_path.as_ref())?;

    debug!(
        stations = stations.len(),
        segments = segments.len(),
        "loaded network records"
    );

    Ok(Network::build(stations, segments)?)
}

fn load_stations(path: &Path) -> Result<Vec<Station>, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut stations = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let record: StationRecord = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let id = StationId::parse(&record.station).map_err(|e| LoadError::BadRecord {
            path: path.to_path_buf(),
            record: index + 1,
            message: e.to_string(),
        })?;

        stations.push(Station::new(id, record.corridor));
    }

    Ok(stations)
}

fn load_segments(path: &Path) -> Result<Vec<Segment>, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut segments = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let record: SegmentRecord = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let bad_record = |message: String| LoadError::BadRecord {
            path: path.to_path_buf(),
            record: index + 1,
            message,
        };

        let line = LineId::parse(&record.line).map_err(|e| bad_record(e.to_string()))?;
        let origin = StationId::parse(&record.origin).map_err(|e| bad_record(e.to_string()))?;
        let destination =
            StationId::parse(&record.destination).map_err(|e| bad_record(e.to_string()))?;

        segments.push(Segment::new(line, record.kind, origin, destination));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_valid_network() {
        let stations = write_csv(
            "station,corridor\n\
             Portal Norte,A\n\
             Calle 100,A\n\
             Heroes,B\n",
        );
        let segments = write_csv(
            "line,kind,origin,destination\n\
             B74,Expreso,Portal Norte,Calle 100\n\
             B74,Expreso,Calle 100,Heroes\n",
        );

        let network = load_network(stations.path(), segments.path()).unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.segment_count(), 2);

        let portal = StationId::parse("Portal Norte").unwrap();
        assert_eq!(network.neighbors(&portal).len(), 1);
        assert_eq!(network.station(&portal).unwrap().corridor, "A");
    }

    #[test]
    fn missing_file_is_csv_error() {
        let segments = write_csv("line,kind,origin,destination\n");
        let result = load_network("/nonexistent/stations.csv", segments.path());
        assert!(matches!(result, Err(LoadError::Csv { .. })));
    }

    #[test]
    fn blank_station_id_is_bad_record() {
        let stations = write_csv(
            "station,corridor\n\
             Portal Norte,A\n\
             \"   \",A\n",
        );
        let segments = write_csv("line,kind,origin,destination\n");

        let result = load_network(stations.path(), segments.path());

        match result {
            Err(LoadError::BadRecord { record, .. }) => assert_eq!(record, 2),
            other => panic!("expected BadRecord, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn unknown_endpoint_is_invalid_reference() {
        let stations = write_csv(
            "station,corridor\n\
             Portal Norte,A\n",
        );
        let segments = write_csv(
            "line,kind,origin,destination\n\
             B74,Expreso,Portal Norte,Calle 100\n",
        );

        let result = load_network(stations.path(), segments.path());

        assert!(matches!(
            result,
            Err(LoadError::Network(NetworkError::InvalidReference { .. }))
        ));
    }

    #[test]
    fn missing_column_is_csv_error() {
        let stations = write_csv(
            "station\n\
             Portal Norte\n",
        );
        let segments = write_csv("line,kind,origin,destination\n");

        let result = load_network(stations.path(), segments.path());
        assert!(matches!(result, Err(LoadError::Csv { .. })));
    }
}
