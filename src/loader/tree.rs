//! Page tree types and construction
//!
//! The tree mirrors the folder structure of the content collection. Each
//! folder's `meta` file may reorder and compose its children through the
//! `pages` list:
//!
//! - `---` / `---Label---`: separator
//! - `...` / `z...a`: remaining children, ascending / descending
//! - `...folder`: inline the children of a subfolder
//! - `!name`: exclude `name` from the remaining children
//! - `[Text](url)` / `external:[Text](url)`: link
//! - `name`: page or subfolder

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use super::storage::{FolderEntry, ROOT, Storage, join_path, split_path};
use super::{Meta, Page};
use crate::content::MetaData;

/// Root name used when the root folder has no titled meta file
pub const DEFAULT_ROOT_NAME: &str = "Docs";

const INDEX: &str = "index";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Root {
    pub name: String,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    #[serde(rename = "page")]
    Item(Item),
    Separator(Separator),
    Folder(Folder),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Page path backing this item; `None` for links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Separator {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Folder {
    pub name: String,
    /// Folder path within the collection
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<Item>,
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub root: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub default_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One parsed entry of a meta `pages` list
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Separator(String),
    Rest { reversed: bool },
    Extract(String),
    Exclude(String),
    Link {
        name: String,
        url: String,
        external: bool,
    },
    Name(String),
}

fn parse_entry(raw: &str) -> Entry {
    let item = raw.trim();
    match item {
        "..." => return Entry::Rest { reversed: false },
        "z...a" => return Entry::Rest { reversed: true },
        _ => {}
    }

    if item.len() >= 3 && item.starts_with("---") && item.ends_with("---") {
        let label = if item.len() >= 6 {
            &item[3..item.len() - 3]
        } else {
            ""
        };
        return Entry::Separator(label.trim().to_string());
    }

    if let Some(link) = parse_link(item) {
        return link;
    }
    if let Some(name) = item.strip_prefix("...") {
        return Entry::Extract(name.to_string());
    }
    if let Some(name) = item.strip_prefix('!') {
        return Entry::Exclude(name.to_string());
    }
    Entry::Name(item.to_string())
}

fn parse_link(item: &str) -> Option<Entry> {
    let (forced, rest) = match item.strip_prefix("external:") {
        Some(rest) => (true, rest),
        None => (false, item),
    };
    let inner = rest.strip_prefix('[')?.strip_suffix(')')?;
    let (name, url) = inner.split_once("](")?;
    Some(Entry::Link {
        name: name.to_string(),
        url: url.to_string(),
        external: forced || !url.starts_with('/'),
    })
}

/// Human readable name from a file or folder name
pub fn pretty_name(name: &str) -> String {
    let name = name
        .strip_prefix('(')
        .and_then(|n| n.strip_suffix(')'))
        .unwrap_or(name);
    let spaced = name.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A child of a folder, borrowing its name from the storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum ChildKey<'a> {
    Page(&'a str),
    Folder(&'a str),
}

impl ChildKey<'_> {
    fn name(&self) -> &str {
        match self {
            ChildKey::Page(name) | ChildKey::Folder(name) => name,
        }
    }
}

pub(super) struct TreeBuilder<'a> {
    storage: &'a Storage,
    pages: &'a [Page],
    metas: &'a [Meta],
}

impl<'a> TreeBuilder<'a> {
    pub(super) fn new(storage: &'a Storage, pages: &'a [Page], metas: &'a [Meta]) -> Self {
        Self {
            storage,
            pages,
            metas,
        }
    }

    pub(super) fn build(&self) -> Root {
        let entry = self.storage.root();
        let meta = self.meta_of(entry);
        let (_, children) = self.build_children(ROOT, entry, meta, true);
        Root {
            name: meta
                .and_then(|m| m.title.clone())
                .unwrap_or_else(|| DEFAULT_ROOT_NAME.to_string()),
            children,
        }
    }

    fn meta_of(&self, entry: &FolderEntry) -> Option<&'a MetaData> {
        entry
            .meta
            .and_then(|i| self.metas.get(i))
            .map(|m| &m.data)
    }

    fn page_item(&self, index: usize) -> Option<Item> {
        let page = self.pages.get(index)?;
        Some(Item {
            name: page.data.title.clone(),
            url: page.url.clone(),
            external: false,
            icon: page.data.icon.clone(),
            description: page.data.description.clone(),
            path: Some(page.path.clone()),
        })
    }

    fn build_folder(&self, path: &str) -> Option<Folder> {
        let entry = self.storage.folder(path)?;
        let meta = self.meta_of(entry);
        let (index, children) = self.build_children(path, entry, meta, false);

        let (_, dir_name) = split_path(path);
        let index_title = entry
            .pages
            .get(INDEX)
            .and_then(|&i| self.pages.get(i))
            .map(|p| p.data.title.clone());
        let name = meta
            .and_then(|m| m.title.clone())
            .or(index_title)
            .unwrap_or_else(|| pretty_name(dir_name));

        Some(Folder {
            name,
            path: path.to_string(),
            index,
            children,
            root: meta.and_then(|m| m.root).unwrap_or(false),
            default_open: meta.and_then(|m| m.default_open).unwrap_or(false),
            icon: meta.and_then(|m| m.icon.clone()),
            description: meta.and_then(|m| m.description.clone()),
        })
    }

    fn resolve(entry: &'a FolderEntry, name: &str) -> Option<ChildKey<'a>> {
        if let Some((stem, _)) = entry.pages.get_key_value(name) {
            return Some(ChildKey::Page(stem));
        }
        entry.folders.get(name).map(|n| ChildKey::Folder(n))
    }

    fn child_node(&self, path: &str, entry: &FolderEntry, key: ChildKey<'_>) -> Option<Node> {
        match key {
            ChildKey::Page(stem) => {
                let index = *entry.pages.get(stem)?;
                self.page_item(index).map(Node::Item)
            }
            ChildKey::Folder(name) => self.build_folder(&join_path(path, name)).map(Node::Folder),
        }
    }

    /// Unreferenced, non-excluded children; `index` first, then by name
    fn rest(
        entry: &'a FolderEntry,
        referenced: &HashSet<ChildKey<'a>>,
        excluded: &HashSet<ChildKey<'a>>,
    ) -> Vec<ChildKey<'a>> {
        let mut keys: Vec<ChildKey<'a>> = entry
            .pages
            .keys()
            .map(|k| ChildKey::Page(k.as_str()))
            .chain(entry.folders.iter().map(|k| ChildKey::Folder(k.as_str())))
            .filter(|k| !referenced.contains(k) && !excluded.contains(k))
            .collect();
        keys.sort_by(|a, b| {
            let a_index = *a == ChildKey::Page(INDEX);
            let b_index = *b == ChildKey::Page(INDEX);
            b_index
                .cmp(&a_index)
                .then_with(|| a.name().cmp(b.name()))
                .then_with(|| a.cmp(b))
        });
        keys
    }

    fn build_children(
        &self,
        path: &str,
        entry: &'a FolderEntry,
        meta: Option<&MetaData>,
        is_root: bool,
    ) -> (Option<Item>, Vec<Node>) {
        let entries: Vec<Entry> = match meta.and_then(|m| m.pages.as_ref()) {
            Some(pages) => pages.iter().map(|p| parse_entry(p)).collect(),
            None => vec![Entry::Rest { reversed: false }],
        };

        let explicit_index = entries
            .iter()
            .any(|e| matches!(e, Entry::Name(name) if name == INDEX));
        let hoisted = if is_root || explicit_index {
            None
        } else {
            entry.pages.get(INDEX).copied()
        };

        let mut referenced = HashSet::new();
        let mut excluded = HashSet::new();
        if hoisted.is_some() {
            referenced.insert(ChildKey::Page(INDEX));
        }
        for e in &entries {
            match e {
                Entry::Name(name) => {
                    if let Some(key) = Self::resolve(entry, name) {
                        referenced.insert(key);
                    }
                }
                Entry::Extract(name) => {
                    if let Some(n) = entry.folders.get(name.as_str()) {
                        referenced.insert(ChildKey::Folder(n));
                    }
                }
                Entry::Exclude(name) => {
                    if let Some((stem, _)) = entry.pages.get_key_value(name.as_str()) {
                        excluded.insert(ChildKey::Page(stem));
                    }
                    if let Some(n) = entry.folders.get(name.as_str()) {
                        excluded.insert(ChildKey::Folder(n));
                    }
                }
                _ => {}
            }
        }

        let mut children = Vec::new();
        for e in entries {
            match e {
                Entry::Separator(name) => children.push(Node::Separator(Separator { name })),
                Entry::Link {
                    name,
                    url,
                    external,
                } => children.push(Node::Item(Item {
                    name,
                    url,
                    external,
                    icon: None,
                    description: None,
                    path: None,
                })),
                Entry::Rest { reversed } => {
                    let mut keys = Self::rest(entry, &referenced, &excluded);
                    if reversed {
                        keys.reverse();
                    }
                    children.extend(keys.into_iter().filter_map(|k| self.child_node(path, entry, k)));
                }
                Entry::Extract(name) => match self.build_folder(&join_path(path, &name)) {
                    Some(folder) => {
                        children.extend(folder.index.map(Node::Item));
                        children.extend(folder.children);
                    }
                    None => warn!(folder = path, entry = %name, "meta entry `...{}` matches no folder", name),
                },
                Entry::Name(name) => match Self::resolve(entry, &name) {
                    Some(key) => children.extend(self.child_node(path, entry, key)),
                    None => warn!(folder = path, entry = %name, "meta entry matches no page or folder"),
                },
                Entry::Exclude(_) => {}
            }
        }

        let index = hoisted.and_then(|i| self.page_item(i));
        (index, children)
    }
}
