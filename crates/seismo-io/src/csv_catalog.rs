//! Cleaned-catalog CSV reader
//!
//! The pipeline writes one row per event with `date-time` formatted as
//! `%d/%m/%Y %H:%M:%S` in UTC. Rows that fail to parse are the loader's
//! problem, not the engines': they are dropped with a warning and the rest
//! of the file still loads.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, warn};

use seismo_core::{Catalog, QuakeEvent};

use crate::normalize::normalize_region;
use crate::{IoError, IoResult};

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Reader for the cleaned earthquake catalog CSV
pub struct CsvCatalogReader {
    path: String,
}

impl CsvCatalogReader {
    /// Open a catalog file
    pub fn open(path: &str) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load the catalog, dropping malformed rows and duplicate ids
    pub fn read(&self) -> IoResult<Catalog> {
        let file = File::open(&self.path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let catalog = read_catalog(BufReader::new(file))?;
        debug!(path = %self.path, events = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

/// Parse catalog CSV from any reader
pub fn read_catalog<R: Read>(input: R) -> IoResult<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let columns = Columns::from_headers(
        reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?,
    )?;

    let mut events: Vec<QuakeEvent> = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();
    let mut dropped = 0usize;

    for (row, result) in reader.records().enumerate() {
        // Header is line 1; data starts on line 2
        let line = row + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(line, error = %e, "unreadable catalog row dropped");
                dropped += 1;
                continue;
            }
        };
        match columns.parse_row(&record) {
            Some(event) => {
                if seen_ids.insert(event.id.clone()) {
                    events.push(event);
                } else {
                    warn!(line, id = %event.id, "duplicate event id dropped");
                    dropped += 1;
                }
            }
            None => {
                warn!(line, "malformed catalog row dropped");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = events.len(), "catalog rows dropped during load");
    }

    Ok(Catalog::new(events)?)
}

/// Column positions resolved from the header row
struct Columns {
    id: usize,
    latitude: usize,
    longitude: usize,
    date_time: usize,
    magnitude: usize,
    depth: usize,
    felt: Option<usize>,
    area: Option<usize>,
    country: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> IoResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| IoError::ColumnMissing(name.to_string()));
        Ok(Self {
            id: require("epiid")?,
            latitude: require("latitude")?,
            longitude: require("longitude")?,
            date_time: require("date-time")?,
            magnitude: require("magnitude")?,
            depth: require("depth")?,
            felt: find("felt?"),
            area: find("area"),
            country: find("country"),
        })
    }

    /// Parse one row; `None` means the row is malformed and gets dropped
    fn parse_row(&self, record: &csv::StringRecord) -> Option<QuakeEvent> {
        let field = |index: usize| record.get(index).map(str::trim);
        let optional = |index: Option<usize>| index.and_then(|i| record.get(i)).map(str::trim);

        let id = field(self.id)?.trim_matches('\'').trim();
        if id.is_empty() {
            return None;
        }

        let time = parse_timestamp(field(self.date_time)?)?;
        let latitude: f64 = field(self.latitude)?.parse().ok()?;
        let longitude: f64 = field(self.longitude)?.parse().ok()?;
        let magnitude: f64 = field(self.magnitude)?.parse().ok()?;
        let depth_km: f64 = field(self.depth)?.parse().ok()?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        if !magnitude.is_finite() || magnitude < 0.0 || !depth_km.is_finite() || depth_km < 0.0 {
            return None;
        }

        let felt = optional(self.felt)
            .map(|value| matches!(value, "True" | "true" | "1"))
            .unwrap_or(false);

        Some(QuakeEvent {
            id: id.to_string(),
            time,
            magnitude,
            depth_km,
            latitude,
            longitude,
            region: normalize_region(optional(self.country).unwrap_or("")),
            subregion: optional(self.area).unwrap_or("").to_string(),
            felt,
        })
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "epiid,latitude,longitude,date,date-time,magnitude,depth,felt?,city,area,country";

    fn load(rows: &[&str]) -> Catalog {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        read_catalog(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_reads_well_formed_rows() {
        let catalog = load(&[
            "'eq-1',32.1,35.2,04/07/2019,04/07/2019 12:30:00,5.2,10.0,True,Tiberias,HaZafon,Israel",
            "eq-2,34.9,32.5,01/01/2020,01/01/2020 00:00:00,3.1,22.5,False,Paphos,Paphos,N. Cyprus",
        ]);
        assert_eq!(catalog.len(), 2);

        let first = catalog.find("eq-1").unwrap();
        assert_eq!(first.magnitude, 5.2);
        assert_eq!(first.depth_km, 10.0);
        assert_eq!(first.region, "Israel");
        assert_eq!(first.subregion, "HaZafon");
        assert!(first.felt);
        assert_eq!(first.year(), 2019);

        // Cyprus variant normalized on the way in
        let second = catalog.find("eq-2").unwrap();
        assert_eq!(second.region, "Cyprus");
        assert!(!second.felt);
    }

    #[test]
    fn test_malformed_rows_dropped() {
        let catalog = load(&[
            "eq-1,32.1,35.2,04/07/2019,04/07/2019 12:30:00,5.2,10.0,False,,,Israel",
            // Unparseable magnitude
            "eq-2,32.1,35.2,04/07/2019,04/07/2019 12:30:00,n/a,10.0,False,,,Israel",
            // Bad timestamp
            "eq-3,32.1,35.2,2019-07-04,2019-07-04T12:30:00,4.0,10.0,False,,,Israel",
            // Out-of-range latitude
            "eq-4,132.1,35.2,04/07/2019,04/07/2019 12:30:00,4.0,10.0,False,,,Israel",
            // Missing id
            ",32.1,35.2,04/07/2019,04/07/2019 12:30:00,4.0,10.0,False,,,Israel",
        ]);
        let ids: Vec<&str> = catalog.iter().map(|ev| ev.id.as_str()).collect();
        assert_eq!(ids, vec!["eq-1"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let catalog = load(&[
            "eq-1,32.1,35.2,04/07/2019,04/07/2019 12:30:00,5.2,10.0,False,,,Israel",
            "eq-1,30.0,34.0,05/07/2019,05/07/2019 08:00:00,3.0,5.0,False,,,Egypt",
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("eq-1").unwrap().region, "Israel");
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let text = "epiid,latitude,longitude\n1,32.0,35.0";
        let err = read_catalog(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, IoError::ColumnMissing(column) if column == "date-time"));
    }

    #[test]
    fn test_empty_file_yields_empty_catalog() {
        let catalog = load(&[]);
        assert!(catalog.is_empty());
    }
}
