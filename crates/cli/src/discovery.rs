// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for a
//! lighthouserc file. Within one directory, names are tried in
//! [`CONFIG_FILE_NAMES`] order.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE_NAMES;
use crate::error::{Error, Result};

/// Resolve the config file to use.
///
/// An explicit path (from `--config`) is taken relative to `cwd` and must
/// exist. Otherwise the file is discovered from `cwd` upwards.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if path.is_file() {
                Ok(path)
            } else if path.exists() {
                Err(Error::NotAFile { path })
            } else {
                Err(Error::Io {
                    path,
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            }
        }
        None => find_config(cwd).ok_or_else(|| Error::NotFound {
            start: cwd.to_path_buf(),
        }),
    }
}

/// Find a config file starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = config_in_dir(&current) {
            tracing::debug!("found config at {}", found.display());
            return Some(found);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// First config file present in `dir`, by precedence.
pub fn config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
