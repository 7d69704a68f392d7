//! Table of contents extraction from Markdown headings.

use std::collections::HashMap;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

/// One heading entry of a page's table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    pub title: String,
    /// Anchor link, `#` followed by the heading slug
    pub url: String,
    pub depth: u8,
}

/// Generates GitHub-style heading slugs, de-duplicated per document.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`, suffixed with `-1`, `-2`, ... when already taken
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        while self.seen.contains_key(&candidate) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

/// Lowercase, drop punctuation, spaces to dashes.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_' || *c == ' ')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Extract headings of depth 2 to 6, ignoring fenced code blocks
///
/// Both ATX (`## Title`) and setext (`Title\n---`) headings count. The
/// title is the heading's plain text: emphasis and link markup are dropped,
/// inline code keeps its content.
pub fn extract_toc(body: &str) -> Vec<TocItem> {
    let mut slugger = Slugger::new();
    let mut items = Vec::new();
    let mut heading: Option<(u8, String)> = None;

    for event in Parser::new_ext(body, Options::empty()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((heading_depth(level), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, title)) = heading.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, title)) = heading.as_mut() {
                    title.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some((depth, title)) = heading.take() else {
                    continue;
                };
                if depth < 2 {
                    continue;
                }
                let title = title.trim().to_string();
                let slug = slugger.slug(&title);
                items.push(TocItem {
                    title,
                    url: format!("#{}", slug),
                    depth,
                });
            }
            _ => {}
        }
    }

    items
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
