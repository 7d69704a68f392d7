//! In-memory folder structure of the loaded files

use std::collections::{BTreeMap, BTreeSet};

/// Folder path of the content root
pub const ROOT: &str = "";

/// Children of one folder
#[derive(Debug, Default)]
pub struct FolderEntry {
    /// File stem -> page index
    pub pages: BTreeMap<String, usize>,
    /// Names of child folders
    pub folders: BTreeSet<String>,
    /// Index of the folder's meta file
    pub meta: Option<usize>,
}

/// Folders keyed by their collection-relative path (`""` is the root)
#[derive(Debug)]
pub struct Storage {
    folders: BTreeMap<String, FolderEntry>,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage {
    pub fn new() -> Self {
        let mut folders = BTreeMap::new();
        folders.insert(ROOT.to_string(), FolderEntry::default());
        Self { folders }
    }

    /// Register a page; returns the index already stored under the same stem
    pub fn add_page(&mut self, path: &str, index: usize) -> Option<usize> {
        let (dir, name) = split_path(path);
        let stem = file_stem(name).to_string();
        let folder = self.ensure_folder(dir);
        match folder.pages.get(&stem) {
            Some(existing) => Some(*existing),
            None => {
                folder.pages.insert(stem, index);
                None
            }
        }
    }

    /// Register a meta file; returns `false` when the folder already has one
    pub fn add_meta(&mut self, path: &str, index: usize) -> bool {
        let (dir, _) = split_path(path);
        let folder = self.ensure_folder(dir);
        if folder.meta.is_some() {
            return false;
        }
        folder.meta = Some(index);
        true
    }

    pub fn folder(&self, path: &str) -> Option<&FolderEntry> {
        self.folders.get(path)
    }

    pub fn root(&self) -> &FolderEntry {
        // The root is inserted on construction and never removed
        self.folders.get(ROOT).unwrap_or(&EMPTY_FOLDER)
    }

    fn ensure_folder(&mut self, path: &str) -> &mut FolderEntry {
        if !self.folders.contains_key(path) {
            let (parent, name) = split_path(path);
            if !name.is_empty() {
                self.ensure_folder(parent).folders.insert(name.to_string());
            }
            self.folders
                .insert(path.to_string(), FolderEntry::default());
        }
        self.folders.entry(path.to_string()).or_default()
    }
}

static EMPTY_FOLDER: FolderEntry = FolderEntry {
    pages: BTreeMap::new(),
    folders: BTreeSet::new(),
    meta: None,
};

/// Split `a/b/c.md` into (`a/b`, `c.md`)
pub fn split_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((dir, name)) => (dir, name),
        None => (ROOT, path),
    }
}

/// Join a folder path and a child name
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// File name without its last extension
pub fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_pages_create_folders() {
        let mut storage = Storage::new();
        assert_eq!(storage.add_page("guides/setup/linux.md", 0), None);
        assert_eq!(storage.add_page("intro.mdx", 1), None);

        let root = storage.root();
        assert!(root.folders.contains("guides"));
        assert_eq!(root.pages.get("intro"), Some(&1));

        let guides = storage.folder("guides").unwrap();
        assert!(guides.folders.contains("setup"));
        assert_eq!(
            storage.folder("guides/setup").unwrap().pages.get("linux"),
            Some(&0)
        );
    }

    #[test]
    fn same_stem_reports_existing() {
        let mut storage = Storage::new();
        assert_eq!(storage.add_page("a.md", 0), None);
        assert_eq!(storage.add_page("a.mdx", 1), Some(0));
    }

    #[test]
    fn first_meta_wins() {
        let mut storage = Storage::new();
        assert!(storage.add_meta("guides/meta.json", 0));
        assert!(!storage.add_meta("guides/meta.yaml", 1));
        assert_eq!(storage.folder("guides").unwrap().meta, Some(0));
        assert!(storage.root().folders.contains("guides"));
    }

    #[test]
    fn path_helpers() {
        assert_eq!(split_path("a/b/c.md"), ("a/b", "c.md"));
        assert_eq!(split_path("c.md"), ("", "c.md"));
        assert_eq!(join_path("", "a"), "a");
        assert_eq!(join_path("a", "b"), "a/b");
        assert_eq!(file_stem("index.mdx"), "index");
        assert_eq!(file_stem("v1.2.md"), "v1.2");
        assert_eq!(file_stem(".env"), ".env");
    }
}
