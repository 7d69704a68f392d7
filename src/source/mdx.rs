//! Adapter from content collections to loader virtual files

use std::sync::Arc;

use super::{Source, VirtualFile, normalize_path};
use crate::content::{DocCollection, MetaCollection};

/// Documents and metadata bound together as a loader source
///
/// Holds shared references; the collections themselves are never modified.
#[derive(Debug, Clone)]
pub struct MdxSource {
    docs: Arc<DocCollection>,
    meta: Arc<MetaCollection>,
}

/// Bind a document collection and a metadata collection into a source
pub fn create_mdx_source(docs: Arc<DocCollection>, meta: Arc<MetaCollection>) -> MdxSource {
    MdxSource { docs, meta }
}

impl MdxSource {
    pub fn docs(&self) -> &Arc<DocCollection> {
        &self.docs
    }

    pub fn meta(&self) -> &Arc<MetaCollection> {
        &self.meta
    }
}

impl Source for MdxSource {
    fn files(&self) -> Vec<VirtualFile> {
        let pages = self.docs.iter().map(|doc| VirtualFile::Page {
            path: normalize_path(&doc.path),
            slugs: None,
            doc: doc.clone(),
        });
        let metas = self.meta.iter().map(|meta| VirtualFile::Meta {
            path: normalize_path(&meta.path),
            data: meta.data.clone(),
        });
        pages.chain(metas).collect()
    }
}
