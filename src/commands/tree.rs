//! Tree command implementation

use console::Style;

use docsource::error::Result;
use docsource::loader::{Item, Node, Root};

use crate::cli::TreeArgs;
use crate::commands::helpers::{SourceOptions, load_source};

const INDENT: &str = "  ";

/// Run the tree command
pub fn run(options: &SourceOptions, args: TreeArgs) -> Result<()> {
    let source = load_source(options)?;
    let tree = source.get_page_tree();

    if args.json {
        println!("{}", serde_json::to_string_pretty(tree)?);
    } else {
        print!("{}", render_tree(tree));
    }
    Ok(())
}

/// Render the page tree with two spaces of indentation per level
fn render_tree(root: &Root) -> String {
    let mut out = format!("{}\n", Style::new().bold().apply_to(&root.name));
    render_nodes(&root.children, 1, &mut out);
    out
}

fn render_nodes(nodes: &[Node], depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    for node in nodes {
        match node {
            Node::Item(item) => {
                out.push_str(&format!("{}{}\n", indent, render_item(item)));
            }
            Node::Separator(separator) => {
                out.push_str(&format!(
                    "{}{}\n",
                    indent,
                    Style::new()
                        .dim()
                        .apply_to(format!("--- {} ---", separator.name))
                ));
            }
            Node::Folder(folder) => {
                let name = Style::new().yellow().bold().apply_to(format!("{}/", folder.name));
                match &folder.index {
                    Some(index) => out.push_str(&format!(
                        "{}{}  {}\n",
                        indent,
                        name,
                        Style::new().cyan().apply_to(&index.url)
                    )),
                    None => out.push_str(&format!("{}{}\n", indent, name)),
                }
                render_nodes(&folder.children, depth + 1, out);
            }
        }
    }
}

fn render_item(item: &Item) -> String {
    let mut line = format!("{}  {}", item.name, Style::new().cyan().apply_to(&item.url));
    if item.external {
        line.push_str(&format!(" {}", Style::new().dim().apply_to("(external)")));
    }
    line
}
