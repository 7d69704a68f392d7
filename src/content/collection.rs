//! Document and metadata collections
//!
//! Collections are loaded once from a content directory and are read-only
//! afterwards. Both walk the same directory tree; documents pick up `.md`
//! and `.mdx` files, metadata picks up `meta.json` / `meta.yaml` files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use super::frontmatter::{PageData, parse_document};
use super::meta::{MetaData, is_meta_file, parse_meta};
use super::toc::{TocItem, extract_toc};
use crate::error::{Result, content, fs as fs_error};

/// File extensions treated as documents
pub const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// A single Markdown/MDX document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doc {
    /// Collection-relative path with `/` separators
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<PathBuf>,
    pub data: PageData,
    pub body: String,
    pub toc: Vec<TocItem>,
}

impl Doc {
    /// Build an in-memory document
    pub fn new(path: impl Into<String>, data: PageData, body: impl Into<String>) -> Self {
        let body = body.into();
        let toc = extract_toc(&body);
        Self {
            path: path.into(),
            absolute_path: None,
            data,
            body,
            toc,
        }
    }

    /// Parse a document from its raw file content
    pub fn parse(path: impl Into<String>, raw: &str) -> Result<Self> {
        let path = path.into();
        let (data, body) = parse_document(&path, raw)?;
        Ok(Self::new(path, data, body))
    }
}

/// A folder metadata file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaFile {
    /// Collection-relative path with `/` separators
    pub path: String,
    pub data: MetaData,
}

impl MetaFile {
    pub fn new(path: impl Into<String>, data: MetaData) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }
}

/// Include filter applied to collection-relative paths
#[derive(Debug, Default)]
pub struct CollectionFilter {
    include: Vec<Glob<'static>>,
}

impl CollectionFilter {
    /// Filter accepting every path
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter accepting paths matching any of `patterns`
    pub fn from_globs<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let include = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Glob::new(pattern)
                    .map(Glob::into_owned)
                    .map_err(|e| content::invalid_glob(pattern, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { include })
    }

    /// Whether a collection-relative path passes the filter
    pub fn accepts(&self, path: &str) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let candidate = CandidatePath::from(path);
        self.include
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    }
}

/// The document collection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocCollection {
    docs: Vec<Doc>,
}

impl DocCollection {
    /// An empty collection, no filesystem access
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collection from in-memory documents, ordered by path
    pub fn new(mut docs: Vec<Doc>) -> Self {
        docs.sort_by(|a, b| a.path.cmp(&b.path));
        Self { docs }
    }

    /// Load every document below `dir` accepted by `filter`
    pub fn load(dir: &Path, filter: &CollectionFilter) -> Result<Self> {
        let mut docs = Vec::new();
        for (relative, absolute) in walk_collection(dir, filter)? {
            if !is_document(&relative) {
                continue;
            }
            let raw = fs::read_to_string(&absolute)
                .map_err(|e| fs_error::read_failed(absolute.display().to_string(), e.to_string()))?;
            let mut doc = Doc::parse(relative, &raw)?;
            doc.absolute_path = Some(absolute);
            docs.push(doc);
        }
        debug!(dir = %dir.display(), count = docs.len(), "loaded documents");
        Ok(Self::new(docs))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Doc> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Document by collection-relative path
    pub fn get(&self, path: &str) -> Option<&Doc> {
        self.docs.iter().find(|d| d.path == path)
    }
}

/// The metadata collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaCollection {
    files: Vec<MetaFile>,
}

impl MetaCollection {
    /// An empty collection, no filesystem access
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collection from in-memory metadata files, ordered by path
    pub fn new(mut files: Vec<MetaFile>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Self { files }
    }

    /// Load every metadata file below `dir` accepted by `filter`
    pub fn load(dir: &Path, filter: &CollectionFilter) -> Result<Self> {
        let mut files = Vec::new();
        for (relative, absolute) in walk_collection(dir, filter)? {
            let is_meta = relative
                .rsplit('/')
                .next()
                .is_some_and(is_meta_file);
            if !is_meta {
                continue;
            }
            let raw = fs::read_to_string(&absolute)
                .map_err(|e| fs_error::read_failed(absolute.display().to_string(), e.to_string()))?;
            let data = parse_meta(&relative, &raw)?;
            files.push(MetaFile::new(relative, data));
        }
        debug!(dir = %dir.display(), count = files.len(), "loaded meta files");
        Ok(Self::new(files))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Metadata file by collection-relative path
    pub fn get(&self, path: &str) -> Option<&MetaFile> {
        self.files.iter().find(|m| m.path == path)
    }
}

/// Whether a path names a Markdown/MDX document
pub fn is_document(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| DOC_EXTENSIONS.contains(&ext))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect `(relative, absolute)` paths of all files under `dir`, sorted
fn walk_collection(dir: &Path, filter: &CollectionFilter) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Err(content::not_found(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| fs_error::io_error(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        if filter.accepts(&relative) {
            files.push((relative, entry.path().to_path_buf()));
        }
    }
    Ok(files)
}
