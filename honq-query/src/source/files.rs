//! The traversal source: every file beneath a set of root directories.

use super::WalkConfig;
use crate::filter::PatternSet;
use honq_core::types::join_path;
use honq_core::{BoxIter, Item, Result, Stream, settings};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::vec;
use tracing::{debug, trace, warn};

/// Enumerates all files beneath one or more root directories.
///
/// Roots that are not existing directories when the source is built are
/// dropped without error. Each root is walked depth-first, pre-order: a
/// directory's files come first, then its subdirectories in turn.
///
/// Unreadable directories and entries are logged and skipped; iteration
/// never fails.
///
/// # Examples
///
/// ```rust,no_run
/// use honq_query::prelude::*;
///
/// fn main() -> honq_core::Result<()> {
///     let photos = Files::new(["C:/CoolStuff"])
///         .skip_folders(["temp"])?
///         .types(["jpg", "jpeg"])?
///         .full();
///
///     for path in &photos {
///         println!("{path}");
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Files {
    /// Roots that existed as directories at construction.
    roots: Vec<PathBuf>,
    /// Walk options.
    config: WalkConfig,
    /// Folder names not to descend into.
    skip: Option<PatternSet>,
}

impl Files {
    /// Create a source over `roots` with the default configuration.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::with_config(roots, WalkConfig::default())
    }

    /// Create a source over `roots` with custom configuration.
    pub fn with_config<I, P>(roots: I, config: WalkConfig) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let roots = roots
            .into_iter()
            .filter_map(|root| {
                let root = root.as_ref();
                if root.is_dir() {
                    Some(root.to_path_buf())
                } else {
                    debug!("Dropping root that is not a directory: {}", root.display());
                    None
                }
            })
            .collect();

        Self {
            roots,
            config,
            skip: None,
        }
    }

    /// Do not descend into folders whose name contains any of `patterns`.
    ///
    /// Patterns are regular expressions searched anywhere in the folder
    /// name, using the process-wide case setting at the time of this
    /// call. Calling this again replaces the previous folder patterns.
    pub fn skip_folders<I, S>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.install_skip("skip_folders", patterns, false)
    }

    /// Do not descend into folders whose whole name matches one of `patterns`.
    pub fn skip_folders_exact<I, S>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.install_skip("skip_folders_exact", patterns, true)
    }

    fn install_skip<I, S>(mut self, context: &str, patterns: I, exact: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skip = PatternSet::compile_for(context, patterns, exact, settings::case_sensitive())?;
        self.skip = Some(skip);
        Ok(self)
    }

    /// The roots that will be walked.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// The walk configuration.
    #[must_use]
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// The folder-skipping patterns, if any.
    #[must_use]
    pub fn skipped_folders(&self) -> Option<&PatternSet> {
        self.skip.as_ref()
    }

    /// Check that every retained root can still be listed.
    ///
    /// Iteration skips unreadable directories silently apart from a log
    /// line; call this first to surface such problems as errors.
    pub fn check_roots(&self) -> Result<()> {
        for root in &self.roots {
            fs::read_dir(root)?;
        }
        Ok(())
    }

    /// Start a fresh walk.
    #[must_use]
    pub fn iter(&self) -> FilesIter<'_> {
        FilesIter {
            files: self,
            roots: self.roots.iter(),
            pending: Vec::new(),
            ready: Vec::new().into_iter(),
        }
    }

    /// Whether the walk should not descend into the folder `name`.
    fn skips(&self, name: &str) -> bool {
        self.skip.as_ref().is_some_and(|skip| skip.is_match(name))
    }
}

impl Stream for Files {
    type Item = Item;

    fn iter_stream<'a>(&'a self) -> BoxIter<'a, Item>
    where
        Item: 'a,
    {
        Box::new(self.iter())
    }
}

impl<'a> IntoIterator for &'a Files {
    type Item = Item;
    type IntoIter = FilesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A directory waiting to be scanned.
#[derive(Debug)]
struct PendingDir {
    /// Path handed to the filesystem.
    path: PathBuf,
    /// Path as reported in items, joined with `/`.
    label: String,
    depth: usize,
}

/// Lazy walk over a [`Files`] source.
///
/// One directory is listed at a time, when the files of the previous one
/// have all been handed out.
#[derive(Debug)]
pub struct FilesIter<'a> {
    files: &'a Files,
    roots: std::slice::Iter<'a, PathBuf>,
    /// Directories still to scan, next one last.
    pending: Vec<PendingDir>,
    /// Files of the most recently scanned directory.
    ready: vec::IntoIter<Item>,
}

impl FilesIter<'_> {
    /// List `dir`, queueing its files and its surviving subdirectories.
    fn scan(&mut self, dir: &PendingDir) {
        trace!("Scanning directory: {} (depth: {})", dir.label, dir.depth);

        let entries = match fs::read_dir(&dir.path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to read directory {}: {}", dir.label, e);
                return;
            }
        };

        let files = self.files;
        let config = &files.config;
        let mut file_names: Vec<OsString> = Vec::new();
        let mut dir_names: Vec<OsString> = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read entry in {}: {}", dir.label, e);
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    warn!(
                        "Failed to read file type for {}: {}",
                        entry.path().display(),
                        e
                    );
                    continue;
                }
            };

            let name = entry.file_name();

            if file_type.is_dir() {
                dir_names.push(name);
            } else if file_type.is_symlink() && entry.path().is_dir() {
                if config.follow_symlinks {
                    dir_names.push(name);
                } else {
                    trace!("Not following directory symlink: {}", entry.path().display());
                }
            } else {
                file_names.push(name);
            }
        }

        if config.sort_by_name {
            file_names.sort();
            dir_names.sort();
        }

        self.ready = file_names
            .iter()
            .map(|name| Item::from_file_name(&dir.label, &name.to_string_lossy()))
            .collect::<Vec<_>>()
            .into_iter();

        let depth = dir.depth + 1;
        if !config.allows_depth(depth) {
            trace!("Reached maximum depth at {}", dir.label);
            return;
        }

        // Reversed so the first subdirectory is popped first.
        for name in dir_names.into_iter().rev() {
            let display_name = name.to_string_lossy();
            let label = join_path(&dir.label, &display_name);
            if files.skips(&display_name) {
                debug!("Skipping folder: {}", label);
                continue;
            }
            self.pending.push(PendingDir {
                path: dir.path.join(&name),
                label,
                depth,
            });
        }
    }
}

impl Iterator for FilesIter<'_> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        loop {
            if let Some(item) = self.ready.next() {
                return Some(item);
            }

            if let Some(dir) = self.pending.pop() {
                self.scan(&dir);
                continue;
            }

            let root = self.roots.next()?;
            self.pending.push(PendingDir {
                path: root.clone(),
                label: root.to_string_lossy().into_owned(),
                depth: 0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(base: &Path, relative: &str) {
        let path = base.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn sorted(config: WalkConfig) -> WalkConfig {
        config.with_sort_by_name(true)
    }

    fn relative(files: &Files, root: &str) -> Vec<String> {
        files
            .iter()
            .map(|item| item.full_path[root.len()..].to_string())
            .collect()
    }

    #[test]
    fn test_walk_is_preorder() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "b.txt");
        touch(base, "a.txt");
        touch(base, "x/deep/y.txt");
        touch(base, "x/z.txt");
        touch(base, "w/v.txt");

        let root = base.to_string_lossy().into_owned();
        let files = Files::with_config([base], sorted(WalkConfig::new()));

        assert_eq!(
            relative(&files, &root),
            ["/a.txt", "/b.txt", "/w/v.txt", "/x/z.txt", "/x/deep/y.txt"]
        );
    }

    #[test]
    fn test_base_names() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "archive.tar.gz");
        touch(base, "Makefile");

        let files = Files::with_config([base], sorted(WalkConfig::new()));
        let names: Vec<_> = files.iter().map(|item| item.base_name).collect();
        assert_eq!(names, ["Makefile", "archive.tar"]);
    }

    #[test]
    fn test_missing_roots_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "only.txt");

        let missing = base.join("does-not-exist");
        let a_file = base.join("only.txt");
        let files = Files::new([base, missing.as_path(), a_file.as_path()]);

        assert_eq!(files.roots().len(), 1);
        assert_eq!(files.iter().count(), 1);
        assert!(files.check_roots().is_ok());
    }

    #[test]
    fn test_no_roots_yields_nothing() {
        let files = Files::new(Vec::<&Path>::new());
        assert_eq!(files.iter().count(), 0);
    }

    #[test]
    fn test_multiple_roots_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        touch(first.path(), "one.txt");
        touch(second.path(), "two.txt");

        let files = Files::new([second.path(), first.path()]);
        let names: Vec<_> = files.iter().map(|item| item.base_name).collect();
        assert_eq!(names, ["two", "one"]);
    }

    #[test]
    fn test_skip_folders_prunes_subtree() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "keep.txt");
        touch(base, "Temp/a.txt");
        touch(base, "my_temp_files/deep/b.txt");
        touch(base, "other/c.txt");

        let files = Files::with_config([base], sorted(WalkConfig::new()))
            .skip_folders(["temp"])
            .unwrap();
        let names: Vec<_> = files.iter().map(|item| item.base_name).collect();
        assert_eq!(names, ["keep", "c"]);
    }

    #[test]
    fn test_skip_folders_exact() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "temp/a.txt");
        touch(base, "temporal/b.txt");

        let files = Files::with_config([base], sorted(WalkConfig::new()))
            .skip_folders_exact(["temp"])
            .unwrap();
        let names: Vec<_> = files.iter().map(|item| item.base_name).collect();
        assert_eq!(names, ["b"]);
    }

    #[test]
    fn test_skip_folders_does_not_apply_to_roots() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("temp");
        touch(&root, "a.txt");

        let files = Files::new([&root]).skip_folders_exact(["temp"]).unwrap();
        assert_eq!(files.iter().count(), 1);
    }

    #[test]
    fn test_skip_folders_replaces_previous() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "alpha/a.txt");
        touch(base, "beta/b.txt");

        let files = Files::with_config([base], sorted(WalkConfig::new()))
            .skip_folders(["alpha"])
            .unwrap()
            .skip_folders(["beta"])
            .unwrap();
        let names: Vec<_> = files.iter().map(|item| item.base_name).collect();
        assert_eq!(names, ["a"]);
        assert_eq!(files.skipped_folders().unwrap().patterns(), ["beta"]);
    }

    #[test]
    fn test_skip_folders_rejects_empty_list() {
        let err = Files::new(Vec::<&Path>::new())
            .skip_folders(Vec::<String>::new())
            .unwrap_err();
        assert!(err.to_string().contains("skip_folders"));
    }

    #[test]
    fn test_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "top.txt");
        touch(base, "one/mid.txt");
        touch(base, "one/two/low.txt");

        let shallow = Files::with_config([base], sorted(WalkConfig::new().with_max_depth(0)));
        let names: Vec<_> = shallow.iter().map(|item| item.base_name).collect();
        assert_eq!(names, ["top"]);

        let middle = Files::with_config([base], sorted(WalkConfig::new().with_max_depth(1)));
        let names: Vec<_> = middle.iter().map(|item| item.base_name).collect();
        assert_eq!(names, ["top", "mid"]);
    }

    #[test]
    fn test_reiteration_sees_new_files() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "first.txt");

        let files = Files::new([base]);
        assert_eq!(files.iter().count(), 1);

        touch(base, "second.txt");
        assert_eq!(files.iter().count(), 2);
    }

    #[test]
    fn test_trailing_separator_not_doubled() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.txt");

        let root = format!("{}/", temp_dir.path().display());
        let files = Files::new([&root]);
        let item = files.iter().next().unwrap();
        assert_eq!(item.full_path, format!("{root}a.txt"));
    }

    #[test]
    fn test_vanished_directory_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "top.txt");
        touch(base, "a/gone.txt");
        touch(base, "b/kept.txt");

        let files = Files::with_config([base], sorted(WalkConfig::new()));
        let mut iter = files.iter();

        // The root is listed and both subdirectories are queued.
        assert_eq!(iter.next().unwrap().base_name, "top");
        fs::remove_dir_all(base.join("a")).unwrap();

        let rest: Vec<_> = iter.map(|item| item.base_name).collect();
        assert_eq!(rest, ["kept"]);
    }

    #[test]
    fn test_removed_root_fails_check_but_not_iteration() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        touch(&root, "a.txt");

        let files = Files::new([&root]);
        fs::remove_dir_all(&root).unwrap();

        assert!(matches!(files.check_roots(), Err(honq_core::HonqError::Io(_))));
        assert_eq!(files.iter().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_in_directory_name() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "x\\/f.txt");
        touch(base, "x\\/sub/g.txt");

        let root = base.to_string_lossy().into_owned();
        let files = Files::with_config([base], sorted(WalkConfig::new()));
        let items: Vec<Item> = files.iter().collect();

        assert_eq!(
            relative(&files, &root),
            ["/x\\/f.txt", "/x\\/sub/g.txt"]
        );
        assert!(items.iter().all(|item| Path::new(&item.full_path).is_file()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_directory_is_walked() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        let odd = base.join(OsStr::from_bytes(b"bad\xff"));
        fs::create_dir(&odd).unwrap();
        fs::write(odd.join("inside.txt"), "").unwrap();

        let files = Files::new([base]);
        let items: Vec<Item> = files.iter().collect();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].base_name, "inside");
        assert!(items[0].full_path.ends_with("/bad\u{FFFD}/inside.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_symlinks_not_followed_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        touch(base, "real/a.txt");
        std::os::unix::fs::symlink(base.join("real"), base.join("link")).unwrap();

        let files = Files::new([base]);
        assert_eq!(files.iter().count(), 1);

        let following = Files::with_config([base], WalkConfig::new().with_follow_symlinks(true));
        assert_eq!(following.iter().count(), 2);
    }
}
