//! docsource - content source loader
//!
//! Loads a collection of Markdown/MDX documents and folder metadata,
//! mounts it under a base URL and exposes pages, lookups and a navigation
//! page tree. The [`blog`] module binds the collections under `/blogs` as
//! a process-wide, read-only source.

pub mod blog;
pub mod config;
pub mod content;
pub mod error;
pub mod hash;
pub mod loader;
pub mod logging;
pub mod source;

pub use blog::{BASE_URL, BlogSource};
pub use error::{Result, SourceError};
pub use loader::{LoaderOptions, LoaderOutput, Page, loader};
pub use source::{MdxSource, Source, VirtualFile, create_mdx_source};
