//! The blog content source
//!
//! Binds the document and metadata collections to the loader under the
//! fixed `/blogs` mount path and exposes the result as a process-wide,
//! read-only value.
//!
//! The global value is built at most once. The first successful call to
//! [`init`], [`init_with`] or [`source`] constructs it; every later call
//! returns the same reference. A failed construction stores nothing and
//! its error goes back to the caller.

use std::cell::Cell;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::info;

use crate::config::SourceConfig;
use crate::content::{DocCollection, MetaCollection};
use crate::error::{Result, SourceError};
use crate::loader::{LoaderOptions, LoaderOutput, loader};
use crate::source::{MdxSource, create_mdx_source};

/// Mount path of the blog
pub const BASE_URL: &str = "/blogs";

/// The loaded blog source
pub type BlogSource = LoaderOutput<MdxSource>;

static SOURCE: OnceLock<BlogSource> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

thread_local! {
    static INITIALIZING: Cell<bool> = const { Cell::new(false) };
}

/// Marks this thread as constructing the global source until dropped,
/// including when `build` unwinds
struct InitializingGuard;

impl InitializingGuard {
    fn enter() -> Self {
        INITIALIZING.with(|flag| flag.set(true));
        Self
    }
}

impl Drop for InitializingGuard {
    fn drop(&mut self) {
        INITIALIZING.with(|flag| flag.set(false));
    }
}

/// Build a blog source from two collections, without touching global state
pub fn create(docs: Arc<DocCollection>, meta: Arc<MetaCollection>) -> Result<BlogSource> {
    loader(LoaderOptions::new(BASE_URL, create_mdx_source(docs, meta)))
}

/// Load both collections as described by `config` and build a blog source
pub fn load(config: &SourceConfig) -> Result<BlogSource> {
    let dir = config.content_dir();
    let filter = config.filter()?;
    let docs = DocCollection::load(&dir, &filter)?;
    let meta = MetaCollection::load(&dir, &filter)?;
    create(Arc::new(docs), Arc::new(meta))
}

/// Initialize the global source from `config`
pub fn init(config: &SourceConfig) -> Result<&'static BlogSource> {
    init_with(|| load(config))
}

/// Initialize the global source with a custom constructor
///
/// `build` runs at most once per process, under a lock. Calling back into
/// this module from `build` fails with [`SourceError::ReentrantInit`].
pub fn init_with<F>(build: F) -> Result<&'static BlogSource>
where
    F: FnOnce() -> Result<BlogSource>,
{
    if let Some(source) = SOURCE.get() {
        return Ok(source);
    }
    if INITIALIZING.with(Cell::get) {
        return Err(SourceError::ReentrantInit);
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(source) = SOURCE.get() {
        return Ok(source);
    }

    let built = {
        let _initializing = InitializingGuard::enter();
        build()?
    };
    info!(
        base_url = built.base_url(),
        pages = built.get_pages().len(),
        "blog source initialized"
    );
    Ok(SOURCE.get_or_init(|| built))
}

/// The global source, initialized on first access from the current
/// directory's configuration and `DOCSOURCE_CONTENT_DIR`
pub fn source() -> Result<&'static BlogSource> {
    if let Some(source) = SOURCE.get() {
        return Ok(source);
    }
    let cwd = std::env::current_dir()?;
    init(&SourceConfig::load(&cwd)?.with_env_overrides())
}

/// The global source if it has been initialized
pub fn get() -> Option<&'static BlogSource> {
    SOURCE.get()
}
