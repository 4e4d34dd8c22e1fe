// SPDX-License-Identifier: CC0-1.0

//! Recency-filtered file discovery.
//!
//! The spec compiler writes into a directory tree that may still hold output
//! from earlier runs, and it does not report which files it produced. Files
//! are therefore attributed to the current run by modification time: anything
//! written within `max_age` of now counts as fresh.
//!
//! This is a heuristic. Two runs writing into the same tree at the same time
//! will see each other's files, and output that lands after the scan is missed.
//! Give each concurrent run its own output directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use glob::Pattern;
use walkdir::WalkDir;

/// Lists files under a directory that match a glob and were modified recently.
pub trait FileDiscovery: Send + Sync {
    /// Files under `root` whose name matches `pattern` and whose modification
    /// time is within `max_age` of now.
    ///
    /// With `recursive` false only the direct children of `root` are
    /// considered. Nothing matching is not an error: the result is empty.
    fn find(&self, root: &Path, pattern: &str, recursive: bool, max_age: Duration)
        -> Vec<PathBuf>;
}

/// [`FileDiscovery`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDiscovery;

impl FsDiscovery {
    /// Same as [`FileDiscovery::find`], measured against `now` instead of the
    /// system clock.
    pub fn find_at(
        &self,
        root: &Path,
        pattern: &str,
        recursive: bool,
        max_age: Duration,
        now: DateTime<Utc>,
    ) -> Vec<PathBuf> {
        let pattern = match Pattern::new(pattern) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("invalid search pattern {:?}: {}", pattern, e);
                return Vec::new();
            }
        };
        if !root.is_dir() {
            return Vec::new();
        }

        let cutoff = chrono::Duration::from_std(max_age)
            .ok()
            .and_then(|age| now.checked_sub_signed(age))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let mut walker = WalkDir::new(root).min_depth(1);
        if !recursive {
            walker = walker.max_depth(1);
        }

        let found: BTreeSet<PathBuf> = walker
            .into_iter()
            .flatten()
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| pattern.matches(&entry.file_name().to_string_lossy()))
            .filter(|entry| {
                entry
                    .metadata()
                    .ok()
                    .and_then(|metadata| metadata.modified().ok())
                    .map(|modified| DateTime::<Utc>::from(modified) >= cutoff)
                    .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();

        tracing::debug!(
            "found {} file(s) matching {} under {} (recursive: {}, window: {}s)",
            found.len(),
            pattern.as_str(),
            root.display(),
            recursive,
            max_age.as_secs()
        );
        found.into_iter().collect()
    }
}

impl FileDiscovery for FsDiscovery {
    fn find(
        &self,
        root: &Path,
        pattern: &str,
        recursive: bool,
        max_age: Duration,
    ) -> Vec<PathBuf> {
        self.find_at(root, pattern, recursive, max_age, Utc::now())
    }
}
