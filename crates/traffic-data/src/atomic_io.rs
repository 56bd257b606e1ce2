//! Atomic replacement of the traffic file.
//!
//! The JSON is staged in a hidden sibling file, flushed to disk, and then
//! renamed over the target, so readers see either the previous array or the
//! complete new one.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::error::OutputError;

static STAGE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `file_name` inside `dir` with `contents`.
///
/// `target_path` is only used to describe failures.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &str,
    target_path: &Utf8Path,
    contents: &str,
) -> Result<(), OutputError> {
    let write_failed = |err: io::Error| OutputError::Write {
        path: target_path.to_path_buf(),
        message: err.to_string(),
    };

    StagedFile::write(dir, file_name, contents.as_bytes())
        .and_then(|staged| staged.promote(file_name))
        .map_err(write_failed)?;

    if let Err(err) = dir.open(".").and_then(|handle| handle.sync_all()) {
        debug!(path = %target_path, error = %err, "output directory sync skipped");
    }
    Ok(())
}

/// A hidden file next to the target, removed on drop unless promoted.
struct StagedFile<'dir> {
    dir: &'dir Dir,
    name: String,
    promoted: bool,
}

impl<'dir> StagedFile<'dir> {
    fn write(dir: &'dir Dir, target_name: &str, contents: &[u8]) -> io::Result<Self> {
        let name = stage_name(target_name);
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut file = dir.open_with(&name, &options)?;

        let staged = Self {
            dir,
            name,
            promoted: false,
        };
        let written = file.write_all(contents).and_then(|()| file.sync_all());
        drop(file);
        written?;
        Ok(staged)
    }

    fn promote(mut self, target_name: &str) -> io::Result<()> {
        replace(self.dir, &self.name, target_name)?;
        self.promoted = true;
        Ok(())
    }
}

impl Drop for StagedFile<'_> {
    fn drop(&mut self) {
        if !self.promoted && self.dir.remove_file(&self.name).is_err() {
            debug!(file = %self.name, "staged traffic file left behind");
        }
    }
}

fn stage_name(target_name: &str) -> String {
    let counter = STAGE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{target_name}.{}.{nanos}.{counter}.tmp", std::process::id())
}

#[cfg(not(windows))]
fn replace(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    dir.rename(from, dir, to)
}

#[cfg(windows)]
fn replace(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    // Rename does not overwrite an existing file here.
    match dir.remove_file(to) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
        _ => {}
    }
    dir.rename(from, dir, to)
}
