//! Render the `keytour_core::lang::keywords` registry as a Markdown reference table.
//!
//! ## Notes
//! - Output goes to stdout; redirect it into the docs tree and commit the result.
//! - Do not edit the generated Markdown by hand; update the registry instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p keytour_core --bin generate_keyword_reference > docs/keywords.md
//! ```

use std::io::{self, Write};

use keytour_core::lang::keywords::{self, KeywordCategory};
use keytour_core::lang::registry::Stability;

const CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory::Modifier,
    KeywordCategory::Parameter,
    KeywordCategory::Declaration,
    KeywordCategory::Statement,
    KeywordCategory::Expression,
    KeywordCategory::Type,
    KeywordCategory::Library,
    KeywordCategory::Concept,
];

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "# keytour keyword reference")?;
    writeln!(out)?;
    writeln!(out, "> Generated file. Regenerate with `generate_keyword_reference`.")?;

    for &category in CATEGORIES {
        let rows: Vec<_> = keywords::KEYWORDS.iter().filter(|k| k.category == category).collect();
        if rows.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "## {}", title_case(category.as_str()))?;
        writeln!(out)?;
        writeln!(out, "| Keyword | Aliases | Since | Rust equivalent | Description |")?;
        writeln!(out, "|---|---|---|---|---|")?;
        for k in rows {
            let aliases = if k.aliases.is_empty() {
                String::new()
            } else {
                k.aliases.iter().map(|a| format!("`{a}`")).collect::<Vec<_>>().join(", ")
            };
            let legacy = if k.stability == Stability::Legacy { " (legacy)" } else { "" };
            writeln!(
                out,
                "| `{}`{} | {} | {} | {} | {} |",
                k.canonical, legacy, aliases, k.since, k.rust_equivalent, k.description
            )?;
        }
    }
    Ok(())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
