//! BLAKE3 fingerprints of loader input
//!
//! A fingerprint covers every virtual file (path, data and body) in path
//! order, so two sources built from equal collections hash the same.

use blake3::Hasher;

use serde::Serialize;

use crate::error::{Result, loader};
use crate::source::VirtualFile;

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Fingerprint a set of virtual files
pub fn fingerprint(files: &[VirtualFile]) -> Result<String> {
    let mut sorted: Vec<&VirtualFile> = files.iter().collect();
    sorted.sort_by(|a, b| a.path().cmp(b.path()));

    let mut hasher = Hasher::new();
    for file in sorted {
        match file {
            VirtualFile::Page { path, slugs, doc } => {
                hasher.update(b"page\0");
                hasher.update(path.as_bytes());
                hasher.update(b"\0");
                if let Some(slugs) = slugs {
                    hasher.update(slugs.join("/").as_bytes());
                }
                hasher.update(b"\0");
                hasher.update(to_yaml(path, &doc.data)?.as_bytes());
                hasher.update(b"\0");
                hasher.update(doc.body.as_bytes());
            }
            VirtualFile::Meta { path, data } => {
                hasher.update(b"meta\0");
                hasher.update(path.as_bytes());
                hasher.update(b"\0");
                hasher.update(to_yaml(path, data)?.as_bytes());
            }
        }
        hasher.update(b"\0"); // null separator between files
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// YAML accepts every key frontmatter can carry, unlike JSON
fn to_yaml<T: Serialize>(path: &str, value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| loader::serialization_failed(path, e.to_string()))
}

/// Verify a hash matches the expected value
pub fn verify_hash(expected: &str, actual: &str) -> bool {
    let normalize = |h: &str| {
        if h.starts_with(HASH_PREFIX) {
            h.to_string()
        } else {
            format!("{}{}", HASH_PREFIX, h)
        }
    };

    normalize(expected) == normalize(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Doc, MetaData, PageData};

    fn page(path: &str, title: &str, body: &str) -> VirtualFile {
        VirtualFile::Page {
            path: path.to_string(),
            slugs: None,
            doc: Doc::new(path, PageData::titled(title), body),
        }
    }

    #[test]
    fn test_fingerprint_has_prefix() {
        let hash = fingerprint(&[page("a.md", "A", "body")]).unwrap();
        assert!(hash.starts_with(HASH_PREFIX));
    }

    #[test]
    fn test_fingerprint_is_order_independent() {
        let a = page("a.md", "A", "aaa");
        let b = page("b.md", "B", "bbb");
        let hash1 = fingerprint(&[a.clone(), b.clone()]).unwrap();
        let hash2 = fingerprint(&[b, a]).unwrap();
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_fingerprint_changes_with_body() {
        let hash1 = fingerprint(&[page("a.md", "A", "one")]).unwrap();
        let hash2 = fingerprint(&[page("a.md", "A", "two")]).unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_fingerprint_distinguishes_meta() {
        let meta = VirtualFile::Meta {
            path: "meta.json".to_string(),
            data: MetaData {
                title: Some("Blog".to_string()),
                ..MetaData::default()
            },
        };
        let hash1 = fingerprint(&[]).unwrap();
        let hash2 = fingerprint(&[meta]).unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_hash() {
        let hash1 = format!("{}abc123", HASH_PREFIX);
        let hash2 = hash1.clone();
        assert!(verify_hash(&hash1, &hash2));

        assert!(verify_hash(&hash1, "abc123"));

        let hash3 = format!("{}def456", HASH_PREFIX);
        assert!(!verify_hash(&hash1, &hash3));
    }

    #[test]
    fn test_fingerprint_accepts_non_string_keys() {
        let doc = Doc::parse("a.md", "---\ntitle: A\nextra:\n  ~: weird\n  1: one\n---\nbody")
            .unwrap();
        let file = VirtualFile::Page {
            path: "a.md".to_string(),
            slugs: None,
            doc,
        };
        assert!(fingerprint(&[file]).unwrap().starts_with(HASH_PREFIX));
    }
}
