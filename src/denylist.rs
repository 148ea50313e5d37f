//! Deny-list store
//!
//! Holds the breached and common password sets and handles loading them
//! from newline-delimited text files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DenyListError {
    #[error("Deny-list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read deny-list file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Which of the two deny-lists to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Breached,
    Common,
}

/// Where the common set came from after loading.
///
/// `Fallback` means the primary common-password file was unavailable and the
/// dictionary file was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommonListSource {
    #[default]
    Primary,
    Fallback,
}

/// File locations for the deny-lists.
///
/// Priority per list:
/// 1. Environment variable (`PWD_BREACHED_PATH`, `PWD_COMMON_PATH`,
///    `PWD_DICTIONARY_PATH`)
/// 2. Default path under `./assets/`
#[derive(Debug, Clone)]
pub struct DenyListPaths {
    pub breached: PathBuf,
    pub common: PathBuf,
    pub dictionary: PathBuf,
}

impl DenyListPaths {
    pub fn from_env() -> Self {
        Self {
            breached: path_from_env("PWD_BREACHED_PATH", "./assets/breachpassword.txt"),
            common: path_from_env("PWD_COMMON_PATH", "./assets/commonpassword.txt"),
            dictionary: path_from_env("PWD_DICTIONARY_PATH", "./assets/dictionary.txt"),
        }
    }
}

fn path_from_env(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

/// Immutable sets of breached and common passwords.
///
/// Built once at startup and passed by reference into every evaluation.
/// Entries are normalized on insert (trimmed, lowercased, blanks dropped)
/// and all lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct DenyListStore {
    breached: HashSet<String>,
    common: HashSet<String>,
    common_source: CommonListSource,
}

impl DenyListStore {
    /// Builds a store from two sequences of raw lines.
    ///
    /// Lines are trimmed and lowercased; empty results are discarded and
    /// duplicates collapse.
    pub fn from_lines<B, C>(breached: B, common: C) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            breached: normalize_lines(breached),
            common: normalize_lines(common),
            common_source: CommonListSource::Primary,
        }
    }

    /// Loads the store from the configured files.
    ///
    /// Failures are recovered locally, never propagated: an unreadable
    /// breached file yields an empty breached set, and an unreadable common
    /// file falls back to the dictionary file before giving up and yielding
    /// an empty common set. The evaluator stays usable either way, simply
    /// with fewer deny-list hits.
    pub fn load(paths: &DenyListPaths) -> Self {
        let breached = match read_list(&paths.breached) {
            Ok(set) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Loaded {} breached passwords from {:?}", set.len(), paths.breached);
                set
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breached list unavailable ({}), using empty set", _e);
                HashSet::new()
            }
        };

        let (common, common_source) = match read_list(&paths.common) {
            Ok(set) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Loaded {} common passwords from {:?}", set.len(), paths.common);
                (set, CommonListSource::Primary)
            }
            Err(_e) => match read_list(&paths.dictionary) {
                Ok(set) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("Common list unavailable, loaded {} dictionary passwords", set.len());
                    (set, CommonListSource::Fallback)
                }
                Err(_e2) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Common and dictionary lists unavailable ({}), using empty set", _e2);
                    (HashSet::new(), CommonListSource::Primary)
                }
            },
        };

        Self {
            breached,
            common,
            common_source,
        }
    }

    /// Async load guarded by a deadline.
    ///
    /// The load step is the only I/O in the engine and may be slow on cold
    /// storage; past the deadline an empty store is returned so evaluation
    /// can proceed without deny-list data.
    #[cfg(feature = "async")]
    pub async fn load_with_timeout(paths: &DenyListPaths, timeout: std::time::Duration) -> Self {
        let paths = paths.clone();
        let load = tokio::task::spawn_blocking(move || Self::load(&paths));
        match tokio::time::timeout(timeout, load).await {
            Ok(Ok(store)) => store,
            Ok(Err(_join_err)) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Deny-list load task failed: {}", _join_err);
                Self::default()
            }
            Err(_elapsed) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Deny-list load timed out after {:?}, using empty store", timeout);
                Self::default()
            }
        }
    }

    /// Case-insensitive membership test. O(1) expected.
    pub fn contains(&self, kind: ListKind, password: &str) -> bool {
        self.set(kind).contains(&password.to_lowercase())
    }

    /// Number of entries in the given list after normalization.
    pub fn len(&self, kind: ListKind) -> usize {
        self.set(kind).len()
    }

    /// True when both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.breached.is_empty() && self.common.is_empty()
    }

    /// Which source populated the common set (primary file or dictionary
    /// fallback).
    pub fn common_source(&self) -> CommonListSource {
        self.common_source
    }

    fn set(&self, kind: ListKind) -> &HashSet<String> {
        match kind {
            ListKind::Breached => &self.breached,
            ListKind::Common => &self.common,
        }
    }
}

fn normalize_lines<I>(lines: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .map(|l| l.as_ref().trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

fn read_list(path: &Path) -> Result<HashSet<String>, DenyListError> {
    if !path.exists() {
        return Err(DenyListError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(normalize_lines(content.lines()))
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_with_timeout_success() {
        let mut breached = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(breached, "hunter2").expect("Failed to write");
        let paths = DenyListPaths {
            breached: breached.path().to_path_buf(),
            common: PathBuf::from("/nonexistent/common.txt"),
            dictionary: PathBuf::from("/nonexistent/dictionary.txt"),
        };

        let store = DenyListStore::load_with_timeout(&paths, Duration::from_secs(5)).await;
        assert!(store.contains(ListKind::Breached, "hunter2"));
    }

    #[tokio::test]
    async fn test_load_with_timeout_missing_files() {
        let paths = DenyListPaths {
            breached: PathBuf::from("/nonexistent/breached.txt"),
            common: PathBuf::from("/nonexistent/common.txt"),
            dictionary: PathBuf::from("/nonexistent/dictionary.txt"),
        };

        let store = DenyListStore::load_with_timeout(&paths, Duration::from_secs(5)).await;
        assert!(store.is_empty());
    }
}
