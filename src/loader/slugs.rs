//! Slug and URL generation for pages

use url::Url;

use crate::error::{Result, loader};

/// Origin used to build and parse site-relative URLs
const ORIGIN: &str = "http://localhost/";

/// Default slugs for a page path
///
/// `guides/(beta)/setup.mdx` -> `["guides", "setup"]`,
/// `guides/index.mdx` -> `["guides"]`, `index.mdx` -> `[]`.
pub fn default_slugs(path: &str) -> Vec<String> {
    let without_ext = match path.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => path,
    };

    let mut slugs: Vec<String> = without_ext
        .split('/')
        .filter(|segment| !segment.is_empty() && !is_group(segment))
        .map(str::to_string)
        .collect();

    if slugs.last().is_some_and(|last| last == "index") {
        slugs.pop();
    }
    slugs
}

/// Whether a path segment is a route group, `(name)`
pub fn is_group(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('(') && segment.ends_with(')')
}

fn origin() -> Result<Url> {
    Url::parse(ORIGIN).map_err(|e| loader::invalid_url(ORIGIN, e.to_string()))
}

/// URL of a page mounted under `base_url`
///
/// Segments are percent-encoded; an empty result is `/`.
pub fn page_url(base_url: &str, slugs: &[String]) -> Result<String> {
    let mut url = origin()?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| loader::invalid_url(ORIGIN, "cannot be a base"))?;
        segments.clear();
        segments.extend(base_url.split('/').filter(|s| !s.is_empty()));
        segments.extend(slugs.iter().map(String::as_str).filter(|s| !s.is_empty()));
    }
    Ok(url.path().to_string())
}

/// Split an href into its normalized path and optional fragment
pub fn parse_href(href: &str) -> Result<(String, Option<String>)> {
    let url = origin()?
        .join(href)
        .map_err(|e| loader::invalid_url(href, e.to_string()))?;
    let mut path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    let fragment = url.fragment().filter(|f| !f.is_empty()).map(str::to_string);
    Ok((path, fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn slugs_from_paths() {
        assert_eq!(default_slugs("hello.mdx"), s(&["hello"]));
        assert_eq!(default_slugs("guides/setup.md"), s(&["guides", "setup"]));
        assert_eq!(default_slugs("index.mdx"), Vec::<String>::new());
        assert_eq!(default_slugs("guides/index.mdx"), s(&["guides"]));
        assert_eq!(
            default_slugs("(archive)/2023/recap.mdx"),
            s(&["2023", "recap"])
        );
        assert_eq!(default_slugs("v1.2/notes.md"), s(&["v1.2", "notes"]));
    }

    #[test]
    fn group_detection() {
        assert!(is_group("(beta)"));
        assert!(!is_group("()"));
        assert!(!is_group("beta"));
    }

    #[test]
    fn urls_under_base() {
        assert_eq!(page_url("/blogs", &s(&["a", "b"])).unwrap(), "/blogs/a/b");
        assert_eq!(page_url("/blogs", &[]).unwrap(), "/blogs");
        assert_eq!(page_url("/", &[]).unwrap(), "/");
        assert_eq!(page_url("/", &s(&["x"])).unwrap(), "/x");
        assert_eq!(page_url("blogs/", &s(&["x"])).unwrap(), "/blogs/x");
    }

    #[test]
    fn urls_are_encoded() {
        assert_eq!(
            page_url("/blogs", &s(&["hello world"])).unwrap(),
            "/blogs/hello%20world"
        );
        assert_eq!(page_url("/blogs", &s(&["café"])).unwrap(), "/blogs/caf%C3%A9");
    }

    #[test]
    fn href_parsing() {
        assert_eq!(
            parse_href("/blogs/a#usage").unwrap(),
            ("/blogs/a".to_string(), Some("usage".to_string()))
        );
        assert_eq!(parse_href("/blogs/a/").unwrap(), ("/blogs/a".to_string(), None));
        assert_eq!(
            parse_href("/blogs/hello world").unwrap().0,
            "/blogs/hello%20world"
        );
        assert_eq!(parse_href("/").unwrap(), ("/".to_string(), None));
    }
}
