//! Pages command implementation

use console::Style;

use docsource::Page;
use docsource::error::Result;

use crate::cli::PagesArgs;
use crate::commands::helpers::{SourceOptions, load_source};

/// Run the pages command
pub fn run(options: &SourceOptions, args: PagesArgs) -> Result<()> {
    let source = load_source(options)?;
    let pages = source.get_pages();

    if args.json {
        println!("{}", serde_json::to_string_pretty(pages)?);
        return Ok(());
    }

    if pages.is_empty() {
        println!("No pages found.");
        return Ok(());
    }

    print!("{}", render_pages(pages));
    Ok(())
}

/// Render pages as an indented list, one URL per page with its title and file
fn render_pages(pages: &[Page]) -> String {
    let mut out = format!(
        "{} ({})\n",
        Style::new().bold().apply_to("Pages:"),
        pages.len()
    );
    for page in pages {
        out.push_str(&format!(
            "  {}  {}\n    {}\n",
            Style::new().cyan().bold().apply_to(&page.url),
            page.data.title,
            Style::new().dim().apply_to(&page.path),
        ));
    }
    out
}
