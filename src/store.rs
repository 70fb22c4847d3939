//! In-memory word library and its folder index.
//!
//! The store owns every [`WordEntry`] plus a small list of distinct folder
//! names used for menu display. All lookups scan the entries directly; the
//! folder list is never consulted for correctness.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{Result, VocabError};

/// Maximum number of word entries the library will hold.
pub const MAX_WORDS: usize = 1000;
/// Maximum number of distinct folder names.
pub const MAX_FOLDERS: usize = 50;

/// One vocabulary record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub english: String,
    pub chinese: String,
    pub folder: String,
    pub error_count: u32,
}

/// Outcome of [`WordStore::load`]: a missing file is not an error, the
/// store just starts out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { words: usize, folders: usize },
    Missing,
}

pub struct WordStore {
    entries: Vec<WordEntry>,
    folders: Vec<String>,
    path: PathBuf,
}

impl WordStore {
    /// Create an empty store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            folders: Vec::new(),
            path: path.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> &WordEntry {
        &self.entries[index]
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Distinct folder names in first-seen order.
    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a new entry and return its index.
    ///
    /// English text and the folder name are lowercased before storage so
    /// that identity is case-insensitive; Chinese text passes through
    /// unchanged. An entry whose `(folder, english, chinese)` triple is
    /// already present is rejected, as is any insert past the capacity
    /// limits.
    pub fn add(&mut self, folder: &str, english: &str, chinese: &str) -> Result<usize> {
        if self.entries.len() >= MAX_WORDS {
            return Err(VocabError::CapacityFull { limit: MAX_WORDS });
        }

        let folder = folder.trim().to_ascii_lowercase();
        let english = english.trim().to_ascii_lowercase();
        let chinese = chinese.trim().to_string();

        let duplicate = self
            .entries
            .iter()
            .any(|e| e.folder == folder && e.english == english && e.chinese == chinese);
        if duplicate {
            return Err(VocabError::Duplicate { folder, english });
        }

        self.register_folder(&folder)?;
        self.entries.push(WordEntry {
            english,
            chinese,
            folder,
            error_count: 0,
        });
        log::debug!("added entry {} of {}", self.entries.len(), MAX_WORDS);
        Ok(self.entries.len() - 1)
    }

    /// Indices of every entry whose English text matches exactly,
    /// ignoring ASCII case. Used by the delete flow.
    pub fn find_by_english(&self, english: &str) -> Vec<usize> {
        let english = english.trim();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.english.eq_ignore_ascii_case(english))
            .map(|(i, _)| i)
            .collect()
    }

    /// Substring search across both text fields, in storage order.
    ///
    /// The keyword matches case-insensitively against the English text and
    /// with exact case against the Chinese text; either hit is enough. An
    /// empty keyword matches nothing.
    pub fn search(&self, keyword: &str) -> Vec<usize> {
        if keyword.is_empty() {
            return Vec::new();
        }
        let lowered = keyword.to_ascii_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                e.english.to_ascii_lowercase().contains(&lowered) || e.chinese.contains(keyword)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of entries in `folder`, or of every entry when `folder` is
    /// `None`. Preserves storage order.
    pub fn collect_by_folder(&self, folder: Option<&str>) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| folder.is_none_or(|f| e.folder == f))
            .map(|(i, _)| i)
            .collect()
    }

    /// Record one more miss for the entry at `index`.
    pub fn increment_error(&mut self, index: usize) {
        self.entries[index].error_count += 1;
    }

    /// Remove the entry at `index` by swapping the last entry into its
    /// slot. O(1), but storage order is not preserved: every previously
    /// collected index list is invalidated by this call.
    pub fn delete_by_index(&mut self, index: usize) -> WordEntry {
        let removed = self.entries.swap_remove(index);
        self.rebuild_folders();
        removed
    }

    /// Write the whole store to its backing file.
    pub fn persist(&self) -> Result<()> {
        fs::write(&self.path, codec::serialize(self))?;
        log::debug!("persisted {} entries to {}", self.entries.len(), self.path.display());
        Ok(())
    }

    /// Replace the store contents with the records in the backing file.
    ///
    /// A missing file yields [`LoadOutcome::Missing`] and an empty store;
    /// any other I/O failure is surfaced. Malformed lines are skipped and
    /// records past the capacity limits are dropped, both with a warning.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoadOutcome::Missing),
            Err(e) => return Err(e.into()),
        };

        self.entries.clear();
        self.folders.clear();
        for entry in codec::deserialize(&data) {
            if self.entries.len() >= MAX_WORDS {
                log::warn!("library is full, dropping the remaining records");
                break;
            }
            if self.register_folder(&entry.folder).is_err() {
                log::warn!("folder list is full, dropping entry '{}'", entry.english);
                continue;
            }
            self.entries.push(entry);
        }

        Ok(LoadOutcome::Loaded {
            words: self.entries.len(),
            folders: self.folders.len(),
        })
    }

    fn register_folder(&mut self, folder: &str) -> Result<()> {
        if self.folders.iter().any(|f| f == folder) {
            return Ok(());
        }
        if self.folders.len() >= MAX_FOLDERS {
            return Err(VocabError::FolderCapacityFull { limit: MAX_FOLDERS });
        }
        self.folders.push(folder.to_string());
        Ok(())
    }

    // Recompute the folder list from scratch; first-seen order over the
    // current storage order.
    fn rebuild_folders(&mut self) {
        self.folders.clear();
        for i in 0..self.entries.len() {
            let folder = self.entries[i].folder.clone();
            if !self.folders.iter().any(|f| f == &folder) {
                self.folders.push(folder);
            }
        }
    }
}
