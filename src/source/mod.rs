//! Virtual file sources consumed by the loader
//!
//! A [`Source`] hands the loader a flat list of [`VirtualFile`]s. The MDX
//! adapter ([`create_mdx_source`]) turns a document collection and a
//! metadata collection into such a list.

mod mdx;

pub use mdx::{MdxSource, create_mdx_source};

use crate::content::{Doc, MetaData};

/// One file as seen by the loader
#[derive(Debug, Clone, PartialEq)]
pub enum VirtualFile {
    Page {
        path: String,
        /// Explicit slugs, bypassing slug generation
        slugs: Option<Vec<String>>,
        doc: Doc,
    },
    Meta {
        path: String,
        data: MetaData,
    },
}

impl VirtualFile {
    pub fn path(&self) -> &str {
        match self {
            VirtualFile::Page { path, .. } | VirtualFile::Meta { path, .. } => path,
        }
    }
}

/// Anything that can provide virtual files to the loader
pub trait Source {
    fn files(&self) -> Vec<VirtualFile>;
}

impl Source for Vec<VirtualFile> {
    fn files(&self) -> Vec<VirtualFile> {
        self.clone()
    }
}

/// Normalize a virtual file path: `/` separators, no leading `./` or `/`
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut rest = path.as_str();
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            break;
        }
    }
    rest.to_string()
}
