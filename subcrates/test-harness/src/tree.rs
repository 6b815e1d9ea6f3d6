use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use md5::{Digest, Md5};


/// What a scanned entry turned out to be.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ScannedEntryKind {
    File {
        size_in_bytes: u64,

        /// Lowercase hexadecimal MD5 of the file's content, computed by reading it back.
        md5_hex: String,
    },
    Directory,
}


/// A single file or directory found below the scanned root.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScannedEntry {
    pub path: PathBuf,

    /// Depth of the directory this entry lives in (the root is depth `0`),
    /// or, for directories, the depth of the directory itself.
    pub depth: usize,

    pub kind: ScannedEntryKind,
}

impl ScannedEntry {
    pub fn is_file(&self) -> bool {
        matches!(self.kind, ScannedEntryKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, ScannedEntryKind::Directory)
    }

    /// Returns the final component of the entry's path as a `String`.
    #[track_caller]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .expect("scanned entry has no file name")
            .to_str()
            .expect("scanned entry name is not valid UTF-8")
            .to_string()
    }
}


/// A snapshot of an entire tree on disk, used to check what a generation run produced.
pub struct GeneratedTree {
    root: PathBuf,

    /// Keyed by path relative to `root`, so two trees under different roots can be compared.
    entries: BTreeMap<PathBuf, ScannedEntry>,
}

impl GeneratedTree {
    /// Recursively scans everything below `root` (not following symbolic links).
    ///
    /// # Panics
    /// Panics if any part of the tree cannot be read.
    #[track_caller]
    pub fn scan<P>(root: P) -> Self
    where
        P: AsRef<Path>,
    {
        let root = root.as_ref().to_path_buf();
        let mut entries = BTreeMap::new();

        scan_directory(&root, &root, 0, &mut entries);

        Self { root, entries }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> impl Iterator<Item = &ScannedEntry> {
        self.entries.values()
    }

    pub fn files(&self) -> impl Iterator<Item = &ScannedEntry> {
        self.entries().filter(|entry| entry.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &ScannedEntry> {
        self.entries().filter(|entry| entry.is_directory())
    }

    pub fn number_of_files(&self) -> usize {
        self.files().count()
    }

    pub fn number_of_directories(&self) -> usize {
        self.directories().count()
    }

    /// Depth of the deepest directory, `0` if there are no subdirectories.
    pub fn maximum_directory_depth(&self) -> usize {
        self.directories()
            .map(|entry| entry.depth)
            .max()
            .unwrap_or(0)
    }

    /// Entries whose parent is exactly `directory_path`.
    pub fn children_of<'a>(
        &'a self,
        directory_path: &'a Path,
    ) -> impl Iterator<Item = &'a ScannedEntry> + 'a {
        self.entries()
            .filter(move |entry| entry.path.parent() == Some(directory_path))
    }

    /// Looks up an entry by its absolute path.
    pub fn entry(&self, path: &Path) -> Option<&ScannedEntry> {
        let relative_path = path.strip_prefix(&self.root).ok()?;
        self.entries.get(relative_path)
    }

    /// Asserts that this tree and `other` contain the same relative paths,
    /// with the same kinds, sizes and digests.
    #[track_caller]
    pub fn assert_structurally_equal_to(&self, other: &GeneratedTree) {
        let own_structure = self.relative_structure();
        let other_structure = other.relative_structure();

        assert_eq!(
            own_structure,
            other_structure,
            "trees at \"{}\" and \"{}\" differ",
            self.root.display(),
            other.root.display()
        );
    }

    fn relative_structure(&self) -> BTreeMap<&Path, (usize, &ScannedEntryKind)> {
        self.entries
            .iter()
            .map(|(relative_path, entry)| (relative_path.as_path(), (entry.depth, &entry.kind)))
            .collect()
    }
}


#[track_caller]
fn scan_directory(
    root: &Path,
    directory_path: &Path,
    directory_depth: usize,
    entries: &mut BTreeMap<PathBuf, ScannedEntry>,
) {
    let directory_iterator = fs::read_dir(directory_path).expect("failed to read directory");

    for directory_entry in directory_iterator {
        let directory_entry = directory_entry.expect("failed to read directory entry");
        let entry_path = directory_entry.path();
        let entry_type = directory_entry
            .file_type()
            .expect("failed to read entry file type");

        let relative_path = entry_path
            .strip_prefix(root)
            .expect("scanned entry is not below the root")
            .to_path_buf();

        if entry_type.is_dir() {
            let depth = directory_depth + 1;

            entries.insert(
                relative_path,
                ScannedEntry {
                    path: entry_path.clone(),
                    depth,
                    kind: ScannedEntryKind::Directory,
                },
            );

            scan_directory(root, &entry_path, depth, entries);
        } else if entry_type.is_file() {
            let content = fs::read(&entry_path).expect("failed to read file contents");

            entries.insert(
                relative_path,
                ScannedEntry {
                    path: entry_path,
                    depth: directory_depth,
                    kind: ScannedEntryKind::File {
                        size_in_bytes: content.len() as u64,
                        md5_hex: md5_hex(&content),
                    },
                },
            );
        }
    }
}


/// Computes the lowercase hexadecimal MD5 digest of `content`.
pub fn md5_hex(content: &[u8]) -> String {
    Md5::digest(content)
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}
