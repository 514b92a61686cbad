//! Control point store
//!
//! Parses whitespace- or comma-separated RGB(A) rows into control point
//! sequences. Parsing is deliberately tolerant: a malformed row is skipped
//! rather than failing the whole load, since a slightly short gradient is
//! still usable. Missing sources and sources with zero usable rows are hard
//! errors. No caching happens here; the registries memoize.

use std::fs;
use std::io;
use std::path::PathBuf;

use csv::ReaderBuilder;
use qmc_core::{ControlPoint, GradientName};

use crate::StoreError;

const LIPARI_DATA: &str = include_str!("assets/lipari.csv");
const NAVIA_DATA: &str = include_str!("assets/navia.csv");

/// Loader for authored gradient control point tables
///
/// The embedded mode serves the compiled-in data files; the file-backed mode
/// resolves `<dir>/<name>.csv` on every call.
#[derive(Debug, Clone, Default)]
pub struct ColorPointStore {
    data_dir: Option<PathBuf>,
}

impl ColorPointStore {
    /// Store backed by the compiled-in gradient tables
    pub fn embedded() -> Self {
        Self { data_dir: None }
    }

    /// Store backed by `<dir>/<name>.csv` files on disk
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
        }
    }

    /// Load the ordered control point sequence for `name`
    pub fn load(&self, name: GradientName) -> Result<Vec<ControlPoint>, StoreError> {
        let points = match &self.data_dir {
            Some(dir) => {
                let path = dir.join(format!("{}.csv", name));
                let text = match fs::read_to_string(&path) {
                    Ok(text) => text,
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        return Err(StoreError::NotFound { name, path });
                    }
                    Err(err) => return Err(err.into()),
                };
                parse_control_points(name, &text)
            }
            None => parse_control_points(name, embedded_data(name)),
        };
        if points.is_empty() {
            return Err(StoreError::Empty { name });
        }
        Ok(points)
    }
}

fn embedded_data(name: GradientName) -> &'static str {
    match name {
        GradientName::Lipari => LIPARI_DATA,
        GradientName::Navia => NAVIA_DATA,
    }
}

/// Parse RGB(A) rows, skipping malformed ones
fn parse_control_points(name: GradientName, text: &str) -> Vec<ControlPoint> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(sniff_delimiter(text))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!("skipping unreadable row {} of '{}': {}", row, name, err);
                continue;
            }
        };
        match parse_row(&record) {
            Some(point) => points.push(point),
            None => {
                tracing::debug!("skipping malformed row {} of '{}': {:?}", row, name, record);
            }
        }
    }
    points
}

/// A usable row is exactly 3 or 4 numeric fields, all in [0, 1]
fn parse_row(record: &csv::StringRecord) -> Option<ControlPoint> {
    let fields: Vec<f32> = record
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| field.parse::<f32>().ok())
        .collect::<Option<Vec<_>>>()?;
    if !fields.iter().all(|v| (0.0..=1.0).contains(v)) {
        return None;
    }
    match fields[..] {
        [r, g, b] => Some(ControlPoint::rgb(r, g, b)),
        [r, g, b, a] => Some(ControlPoint::rgba(r, g, b, a)),
        _ => None,
    }
}

/// Comma-separated when the first non-blank line contains a comma, otherwise
/// space-separated (the authored files use spaces)
fn sniff_delimiter(text: &str) -> u8 {
    match text.lines().find(|line| !line.trim().is_empty()) {
        Some(line) if line.contains(',') => b',',
        _ => b' ',
    }
}
