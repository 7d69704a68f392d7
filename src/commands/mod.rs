//! Command implementations for the docsource CLI

pub mod completions;
pub mod fingerprint;
pub mod helpers;
pub mod pages;
pub mod params;
pub mod show;
pub mod tree;
pub mod version;
