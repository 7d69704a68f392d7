//! Content source loader
//!
//! [`loader`] turns a [`Source`] into a queryable [`LoaderOutput`]: pages
//! with slugs and URLs under a base URL, folder metadata, and a page tree
//! for navigation. The output is immutable; every query takes `&self`.

mod slugs;
mod storage;
mod tree;


pub use slugs::{default_slugs, is_group, page_url, parse_href};
pub use tree::{DEFAULT_ROOT_NAME, Folder, Item, Node, Root, Separator, pretty_name};

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use crate::content::{MetaData, PageData, TocItem};
use crate::error::{Result, loader as loader_error};
use crate::hash;
use crate::source::{Source, VirtualFile, normalize_path};
use storage::{Storage, split_path};
use tree::TreeBuilder;

/// Custom slug generation from a normalized page path
pub type SlugsFn = fn(&str) -> Vec<String>;

/// Options for [`loader`]
#[derive(Debug, Clone)]
pub struct LoaderOptions<S> {
    /// URL prefix all pages are mounted under
    pub base_url: String,
    pub source: S,
    /// Overrides [`default_slugs`] for pages without explicit slugs
    pub slugs: Option<SlugsFn>,
}

impl<S> LoaderOptions<S> {
    pub fn new(base_url: impl Into<String>, source: S) -> Self {
        Self {
            base_url: base_url.into(),
            source,
            slugs: None,
        }
    }

    pub fn with_slugs(mut self, slugs: SlugsFn) -> Self {
        self.slugs = Some(slugs);
        self
    }
}

/// A loaded page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Collection-relative path
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<PathBuf>,
    pub slugs: Vec<String>,
    pub url: String,
    pub data: PageData,
    #[serde(skip)]
    pub body: String,
    pub toc: Vec<TocItem>,
}

/// A loaded folder meta file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub path: String,
    pub data: MetaData,
}

/// Route parameters for one page, serialized as `{"slug": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugParams {
    pub slug: Vec<String>,
}

/// The queryable result of [`loader`]
#[derive(Debug)]
pub struct LoaderOutput<S> {
    base_url: String,
    source: S,
    pages: Vec<Page>,
    metas: Vec<Meta>,
    by_slugs: HashMap<Vec<String>, usize>,
    by_url: HashMap<String, usize>,
    by_path: HashMap<String, usize>,
    meta_by_folder: HashMap<String, usize>,
    tree: Root,
    fingerprint: String,
}

/// Build a content source from `options`
///
/// Fails when two pages resolve to the same slugs or a URL cannot be built.
pub fn loader<S: Source>(options: LoaderOptions<S>) -> Result<LoaderOutput<S>> {
    let LoaderOptions {
        base_url,
        source,
        slugs: slugs_fn,
    } = options;

    let mut files = source.files();
    let fingerprint = hash::fingerprint(&files)?;
    files.sort_by(|a, b| a.path().cmp(b.path()));

    let mut storage = Storage::new();
    let mut pages: Vec<Page> = Vec::new();
    let mut metas: Vec<Meta> = Vec::new();
    let mut by_slugs: HashMap<Vec<String>, usize> = HashMap::new();

    for file in files {
        match file {
            VirtualFile::Page { path, slugs, doc } => {
                let path = normalize_path(&path);
                let slugs = match (slugs, slugs_fn) {
                    (Some(explicit), _) => explicit,
                    (None, Some(custom)) => custom(&path),
                    (None, None) => default_slugs(&path),
                };

                if let Some(existing) = by_slugs.get(&slugs).and_then(|&i| pages.get(i)) {
                    return Err(loader_error::duplicate_slugs(&slugs, &existing.path, path));
                }

                let url = page_url(&base_url, &slugs)?;
                let index = pages.len();
                if let Some(previous) = storage.add_page(&path, index) {
                    warn!(
                        path = %path,
                        previous = pages.get(previous).map_or("", |p| p.path.as_str()),
                        "page shares a file name with another page; only the first appears in the tree"
                    );
                }
                by_slugs.insert(slugs.clone(), index);
                pages.push(Page {
                    path,
                    absolute_path: doc.absolute_path,
                    slugs,
                    url,
                    data: doc.data,
                    body: doc.body,
                    toc: doc.toc,
                });
            }
            VirtualFile::Meta { path, data } => {
                let path = normalize_path(&path);
                if storage.add_meta(&path, metas.len()) {
                    metas.push(Meta { path, data });
                } else {
                    warn!(path = %path, "folder already has a meta file, ignoring");
                }
            }
        }
    }

    let by_url = pages
        .iter()
        .enumerate()
        .map(|(i, p)| (p.url.clone(), i))
        .collect();
    let by_path = pages
        .iter()
        .enumerate()
        .map(|(i, p)| (p.path.clone(), i))
        .collect();
    let meta_by_folder = metas
        .iter()
        .enumerate()
        .map(|(i, m)| (split_path(&m.path).0.to_string(), i))
        .collect();

    let tree = TreeBuilder::new(&storage, &pages, &metas).build();

    debug!(
        base_url = %base_url,
        pages = pages.len(),
        metas = metas.len(),
        "loader constructed"
    );

    Ok(LoaderOutput {
        base_url,
        source,
        pages,
        metas,
        by_slugs,
        by_url,
        by_path,
        meta_by_folder,
        tree,
        fingerprint,
    })
}

impl<S> LoaderOutput<S> {
    /// The mount path, exactly as given at construction
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The source this output was built from
    pub fn source(&self) -> &S {
        &self.source
    }

    /// All pages, ordered by path
    pub fn get_pages(&self) -> &[Page] {
        &self.pages
    }

    /// All folder meta files, ordered by path
    pub fn get_metas(&self) -> &[Meta] {
        &self.metas
    }

    pub fn get_page<T: AsRef<str>>(&self, slugs: &[T]) -> Option<&Page> {
        let key: Vec<String> = slugs.iter().map(|s| s.as_ref().to_string()).collect();
        self.by_slugs.get(&key).and_then(|&i| self.pages.get(i))
    }

    /// Page whose URL matches the path part of `href`, with the `#` fragment
    pub fn get_page_by_href(&self, href: &str) -> Result<Option<(&Page, Option<String>)>> {
        let (path, fragment) = parse_href(href)?;
        Ok(self
            .by_url
            .get(&path)
            .and_then(|&i| self.pages.get(i))
            .map(|page| (page, fragment)))
    }

    /// Page at a collection-relative path
    pub fn get_page_by_path(&self, path: &str) -> Option<&Page> {
        self.by_path
            .get(&normalize_path(path))
            .and_then(|&i| self.pages.get(i))
    }

    pub fn get_page_tree(&self) -> &Root {
        &self.tree
    }

    /// Page backing a tree item; `None` for links
    pub fn get_node_page(&self, item: &Item) -> Option<&Page> {
        item.path.as_deref().and_then(|p| self.get_page_by_path(p))
    }

    /// Meta file of a tree folder
    pub fn get_node_meta(&self, folder: &Folder) -> Option<&Meta> {
        self.meta_by_folder
            .get(&folder.path)
            .and_then(|&i| self.metas.get(i))
    }

    /// Route parameters for every page
    pub fn generate_params(&self) -> Vec<SlugParams> {
        self.pages
            .iter()
            .map(|p| SlugParams {
                slug: p.slugs.clone(),
            })
            .collect()
    }

    /// BLAKE3 fingerprint of the input files
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
