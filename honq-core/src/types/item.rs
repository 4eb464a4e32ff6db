//! The record produced by directory traversal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One file found by a traversal: its full path and its base name.
///
/// The base name is the file name with its final extension removed, so
/// `photos/archive.tar.gz` has the base name `archive.tar`.
///
/// # Examples
///
/// ```rust
/// use honq_core::types::Item;
///
/// let item = Item::from_file_name("photos", "holiday.JPG");
/// assert_eq!(item.full_path, "photos/holiday.JPG");
/// assert_eq!(item.base_name, "holiday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Item {
    /// Directory path joined with the file name using `/`.
    pub full_path: String,

    /// File name without its final extension.
    pub base_name: String,
}

impl Item {
    /// Create an item from its two fields.
    pub fn new<P: Into<String>, N: Into<String>>(full_path: P, base_name: N) -> Self {
        Self {
            full_path: full_path.into(),
            base_name: base_name.into(),
        }
    }

    /// Build the item for `file_name` found inside `dir`.
    ///
    /// The separator is always `/`, see [`join_path`].
    #[must_use]
    pub fn from_file_name(dir: &str, file_name: &str) -> Self {
        Self {
            full_path: join_path(dir, file_name),
            base_name: strip_extension(file_name).to_string(),
        }
    }

    /// Apply `f` to both fields.
    #[must_use]
    pub fn map_fields<F: Fn(&str) -> String>(self, f: F) -> Self {
        Self {
            full_path: f(&self.full_path),
            base_name: f(&self.base_name),
        }
    }

    /// The full path as a [`PathBuf`].
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.full_path)
    }

    /// Consume the item, keeping only the full path.
    #[must_use]
    pub fn into_full_path(self) -> String {
        self.full_path
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_path, self.base_name)
    }
}

impl From<(String, String)> for Item {
    fn from((full_path, base_name): (String, String)) -> Self {
        Self {
            full_path,
            base_name,
        }
    }
}

impl From<Item> for (String, String) {
    fn from(item: Item) -> Self {
        (item.full_path, item.base_name)
    }
}

/// Join a directory and a child name with `/`.
///
/// A `dir` that already ends with a separator of the host platform (`/`,
/// or also `\` on Windows) is not given a second one. Only a root path
/// written by the caller can end that way; walked directory names never
/// contain a host separator, so every level below a root gets a `/`.
#[must_use]
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with(std::path::is_separator) {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Remove the final `.ext` suffix from a file name.
///
/// Leading dots do not start an extension, so `.bashrc` is returned
/// unchanged while `.config.json` becomes `.config`.
#[must_use]
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if file_name[..dot].bytes().any(|b| b != b'.') => &file_name[..dot],
        _ => file_name,
    }
}
