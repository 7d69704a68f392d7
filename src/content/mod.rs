//! Content collections
//!
//! Loads Markdown/MDX documents (with YAML frontmatter) and folder
//! metadata files from a content directory into immutable collections.

mod collection;
mod frontmatter;
mod meta;
mod toc;

pub use collection::{
    CollectionFilter, DOC_EXTENSIONS, Doc, DocCollection, MetaCollection, MetaFile, is_document,
};
pub use frontmatter::{PageData, parse_document, split_frontmatter};
pub use meta::{META_FILE_NAMES, MetaData, is_meta_file, parse_meta};
pub use toc::{Slugger, TocItem, extract_toc, slugify};
