//! `string`/`StringBuilder` and `Array`/`ArrayList`.

use std::fmt;
use std::io::Write;

use super::DemoResult;
use crate::config::TourConfig;

/// `string` is `&str`: slicing borrows, nothing is copied.
pub fn first_word(text: &str) -> &str {
    text.get(..5).unwrap_or(text)
}

/// `StringBuilder` is a growable `String`.
pub fn build_greeting() -> String {
    let mut builder = String::from("Hello, ");
    builder.push_str("world!");
    builder
}

pub fn run_strings(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let my_string = "Hello, world!";
    writeln!(out, "{}", first_word(my_string))?;
    writeln!(out, "{}", build_greeting())?;
    Ok(())
}

/// An `ArrayList` element: the closed set of things the list may hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Int(i32),
    Text(String),
    Float(f64),
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Int(v) => write!(f, "{v}"),
            Item::Text(v) => f.write_str(v),
            Item::Float(v) => write!(f, "{v}"),
        }
    }
}

pub fn run_collections(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    // Fixed size, one element type.
    let my_array: [i32; 5] = [1, 2, 3, 4, 5];
    writeln!(out, "{}", my_array[3])?;

    // Growable, mixed elements.
    let mut my_array_list = Vec::new();
    my_array_list.push(Item::Int(1));
    my_array_list.push(Item::Text("two".to_string()));
    my_array_list.push(Item::Float(3.0));
    if let Some(item) = my_array_list.get(1) {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
