//! `static`: members that belong to the type itself.
//!
//! C# static fields and methods become `static` items, associated consts and associated functions. No instance
//! is ever created.

use std::io::Write;

use super::DemoResult;
use crate::config::TourConfig;

/// Shared by every caller for the life of the process.
pub static MY_STATIC_FIELD: i32 = 42;

pub struct StaticExample;

impl StaticExample {
    /// Associated constant: the type-level counterpart of a `const` static field.
    pub const GREETING: &'static str = "Static Method";

    /// Associated function, callable without an instance.
    pub fn my_static_method() -> &'static str {
        Self::GREETING
    }
}

pub fn run_static(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let value = MY_STATIC_FIELD;
    writeln!(out, "{}", StaticExample::my_static_method())?;
    writeln!(out, "{value}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn prints_method_then_field() {
        let mut out = Vec::new();
        run_static(&mut out, &TourConfig::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Static Method\n42\n");
    }
}
