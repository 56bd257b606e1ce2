//! Reading and writing the traffic JSON file.
//!
//! The file holds a pretty-printed JSON array of [`TrafficRecord`] values.
//! Writes create the parent directory on demand and replace the file
//! atomically.

use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;

use crate::atomic_io::write_atomic;
use crate::error::OutputError;
use crate::record::TrafficRecord;

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "data/simulated_traffic.json";

/// Serializes `records` as a 2-space indented JSON array and writes it to
/// `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`OutputError`] if the path is not UTF-8 or names no file, the
/// directory cannot be created, or the file cannot be written.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use traffic_data::{read_traffic_file, write_traffic_file};
///
/// let path = PathBuf::from("target/traffic-data-doc/empty.json");
/// write_traffic_file(&path, &[]).expect("write");
///
/// assert!(read_traffic_file(&path).expect("read").is_empty());
/// ```
pub fn write_traffic_file(path: &Path, records: &[TrafficRecord]) -> Result<(), OutputError> {
    let target = utf8_path(path)?;
    let (parent, file_name) = split_target(&target)?;

    let json = serde_json::to_string_pretty(records).map_err(|err| OutputError::Serialize {
        message: err.to_string(),
    })?;

    let dir = open_output_dir(parent)?;
    write_atomic(&dir, file_name, &target, &json)?;
    debug!(path = %target, records = records.len(), "traffic file written");
    Ok(())
}

/// Reads a traffic file written by [`write_traffic_file`].
///
/// # Errors
///
/// Returns [`OutputError`] if the file cannot be read or is not a JSON array
/// of traffic records.
pub fn read_traffic_file(path: &Path) -> Result<Vec<TrafficRecord>, OutputError> {
    let target = utf8_path(path)?;
    let (parent, file_name) = split_target(&target)?;
    let read_error = |message: String| OutputError::Read {
        path: target.clone(),
        message,
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| read_error(err.to_string()))?;
    let contents = dir
        .read_to_string(file_name)
        .map_err(|err| read_error(err.to_string()))?;

    serde_json::from_str(&contents).map_err(|err| OutputError::Parse {
        path: target.clone(),
        message: err.to_string(),
    })
}

fn utf8_path(path: &Path) -> Result<Utf8PathBuf, OutputError> {
    Utf8PathBuf::from_path_buf(path.to_path_buf()).map_err(|raw| OutputError::InvalidPath {
        path: raw.to_string_lossy().into_owned(),
        message: "path must be valid UTF-8".to_owned(),
    })
}

fn split_target(target: &Utf8Path) -> Result<(&Utf8Path, &str), OutputError> {
    let file_name = target.file_name().ok_or_else(|| OutputError::InvalidPath {
        path: target.to_string(),
        message: "path must name a file".to_owned(),
    })?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Ok((parent, file_name))
}

fn open_output_dir(parent: &Utf8Path) -> Result<Dir, OutputError> {
    let create_error = |err: std::io::Error| OutputError::CreateDirectory {
        path: parent.to_path_buf(),
        message: err.to_string(),
    };
    Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(create_error)?;
    Dir::open_ambient_dir(parent, ambient_authority()).map_err(create_error)
}
