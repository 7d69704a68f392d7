//! Show command implementation

use console::Style;

use docsource::Page;
use docsource::error::{Result, loader};

use crate::cli::ShowArgs;
use crate::commands::helpers::{SourceOptions, load_source};

/// Run the show command
pub fn run(options: &SourceOptions, args: ShowArgs) -> Result<()> {
    let source = load_source(options)?;

    let (page, fragment) = match &args.href {
        Some(href) => source
            .get_page_by_href(href)?
            .ok_or_else(|| loader::page_not_found(href.clone()))?,
        None => {
            let page = source
                .get_page(args.slugs.as_slice())
                .ok_or_else(|| loader::page_not_found(format!("[{}]", args.slugs.join(", "))))?;
            (page, None)
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        print!("{}", render_page(page, fragment.as_deref()));
    }
    Ok(())
}

/// Render page details followed by its table of contents
fn render_page(page: &Page, fragment: Option<&str>) -> String {
    let label = |s: &str| Style::new().bold().apply_to(s.to_string());

    let mut out = format!("{}\n", Style::new().cyan().bold().apply_to(&page.data.title));
    if let Some(description) = &page.data.description {
        out.push_str(&format!("  {}\n", description));
    }
    out.push('\n');
    out.push_str(&format!("  {} {}\n", label("URL:"), page.url));
    out.push_str(&format!("  {} {}\n", label("Path:"), page.path));
    if let Some(fragment) = fragment {
        out.push_str(&format!("  {} #{}\n", label("Anchor:"), fragment));
    }

    if !page.toc.is_empty() {
        out.push_str(&format!("\n  {}\n", label("Table of contents:")));
        for item in &page.toc {
            let indent = "  ".repeat(usize::from(item.depth.saturating_sub(1)));
            out.push_str(&format!(
                "  {}{} {}\n",
                indent,
                item.title,
                Style::new().dim().apply_to(&item.url)
            ));
        }
    }
    out
}
