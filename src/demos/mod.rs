//! Keyword demonstrations
//!
//! Every demonstration builds the Rust construct that stands in for one C# keyword (or a small group) and prints
//! what it does to a caller-supplied sink. Demonstrations are independent: a failure in one is reported and the
//! tour moves on.
//!
//! ## Modules
//!
//! - `statics` - `static`
//! - `inheritance` - `abstract`, `sealed`, `virtual`/`override`, `interface`
//! - `parameters` - `ref`/`out`, `params`, overloading
//! - `values` - `const`/`readonly`, `this`, generics
//! - `delegates` - `delegate`
//! - `resources` - `IDisposable`/`using`, `async`/`await`
//! - `text` - `string`/`StringBuilder`, `Array`/`ArrayList`
//! - `dynamic` - `is`/`as`, boxing
//! - `exceptions` - `try`/`catch`
//! - `reflection` - `typeof` and the type introspector

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod delegates;
pub mod dynamic;
pub mod exceptions;
pub mod inheritance;
pub mod parameters;
pub mod reflection;
pub mod resources;
pub mod statics;
pub mod text;
pub mod values;

use std::io::{self, Write};

use keytour_core::IntrospectError;
use keytour_core::lang::keywords::KeywordId;
use thiserror::Error;

use crate::config::TourConfig;

/// Errors a demonstration can report.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Introspect(#[from] IntrospectError),
}

/// Result type for demonstrations.
pub type DemoResult = Result<(), DemoError>;

/// Signature shared by every demonstration.
pub type DemoFn = fn(&mut dyn Write, &TourConfig) -> DemoResult;

/// One entry of the tour.
#[derive(Debug, Clone, Copy)]
pub struct Demo {
    /// Stable short name (`ref-out`, `reflection`, ...)
    pub name: &'static str,
    /// Banner text
    pub title: &'static str,
    /// Keywords this demonstration covers
    pub keywords: &'static [KeywordId],
    pub run: DemoFn,
}

/// The tour, in presentation order. Reflection runs last.
pub const DEMOS: &[Demo] = &[
    demo("static", "static", &[KeywordId::Static], statics::run_static),
    demo(
        "abstract-sealed",
        "abstract / sealed",
        &[KeywordId::Abstract, KeywordId::Sealed],
        inheritance::run_abstract_sealed,
    ),
    demo("ref-out", "ref / out", &[KeywordId::Ref, KeywordId::Out], parameters::run_ref_out),
    demo(
        "const-readonly",
        "const / readonly",
        &[KeywordId::Const, KeywordId::Readonly],
        values::run_const_readonly,
    ),
    demo("delegate", "delegate", &[KeywordId::Delegate], delegates::run_delegates),
    demo(
        "disposal",
        "IDisposable / using",
        &[KeywordId::IDisposable, KeywordId::Using],
        resources::run_disposal,
    ),
    demo(
        "async-await",
        "async / await",
        &[KeywordId::Async, KeywordId::Await],
        resources::run_async_await,
    ),
    demo("interface", "interface", &[KeywordId::Interface], inheritance::run_interfaces),
    demo(
        "strings",
        "string / StringBuilder",
        &[KeywordId::String, KeywordId::StringBuilder],
        text::run_strings,
    ),
    demo(
        "collections",
        "Array / ArrayList",
        &[KeywordId::Array, KeywordId::ArrayList],
        text::run_collections,
    ),
    demo("generics", "generics", &[KeywordId::Generics], values::run_generics),
    demo("overloading", "overloading", &[KeywordId::Overloading], parameters::run_overloading),
    demo(
        "overriding",
        "virtual / override",
        &[KeywordId::Virtual, KeywordId::Override],
        inheritance::run_overriding,
    ),
    demo(
        "interface-vs-abstract",
        "interface vs abstract",
        &[KeywordId::Interface, KeywordId::Abstract],
        inheritance::run_interface_vs_abstract,
    ),
    demo("params", "params", &[KeywordId::Params], parameters::run_params),
    demo(
        "try-catch",
        "try / catch",
        &[KeywordId::Try, KeywordId::Catch],
        exceptions::run_try_catch,
    ),
    demo("this", "this", &[KeywordId::This], values::run_this),
    demo("is-as", "is / as", &[KeywordId::Is, KeywordId::As], dynamic::run_is_as),
    demo("boxing", "boxing / unboxing", &[KeywordId::Object], dynamic::run_boxing),
    demo("reflection", "reflection", &[KeywordId::Typeof], reflection::run_reflection),
];

const fn demo(name: &'static str, title: &'static str, keywords: &'static [KeywordId], run: DemoFn) -> Demo {
    Demo {
        name,
        title,
        keywords,
        run,
    }
}

/// Look up a demonstration by its short name.
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.name == name)
}

/// Demonstrations selected by `config`, in tour order.
pub fn selected(config: &TourConfig) -> impl Iterator<Item = &'static Demo> + '_ {
    DEMOS.iter().filter(|d| config.selects(d.keywords))
}

/// Outcome of a tour run.
#[derive(Debug, Default)]
pub struct TourSummary {
    /// Demonstrations that completed, in order
    pub completed: Vec<&'static str>,
    /// Demonstrations that failed, with the rendered error
    pub failed: Vec<(&'static str, String)>,
}

impl TourSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the selected demonstrations sequentially.
///
/// A failing demonstration is logged and recorded in the summary; the remaining ones still run.
#[tracing::instrument(skip_all, fields(selected = config.only.len()))]
pub fn run_tour(out: &mut dyn Write, config: &TourConfig) -> TourSummary {
    let mut summary = TourSummary::default();
    for demo in selected(config) {
        tracing::info!(demo = demo.name, "running demonstration");
        match run_one(demo, out, config) {
            Ok(()) => summary.completed.push(demo.name),
            Err(err) => {
                tracing::error!(demo = demo.name, error = %err, "demonstration failed");
                summary.failed.push((demo.name, err.to_string()));
            }
        }
    }
    summary
}

fn run_one(demo: &Demo, out: &mut dyn Write, config: &TourConfig) -> DemoResult {
    if config.headers {
        writeln!(out, "== {} ==", demo.title)?;
    }
    (demo.run)(out, config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn demo_names_are_unique() {
        let mut seen = HashSet::new();
        for demo in DEMOS {
            assert!(seen.insert(demo.name), "duplicate demo name {}", demo.name);
        }
    }

    #[test]
    fn every_keyword_has_a_demo() {
        for info in keytour_core::lang::keywords::KEYWORDS {
            assert!(
                DEMOS.iter().any(|d| d.keywords.contains(&info.id)),
                "no demonstration covers {}",
                info.canonical
            );
        }
    }

    #[test]
    fn reflection_runs_last() {
        assert_eq!(DEMOS.last().map(|d| d.name), Some("reflection"));
    }

    #[test]
    fn only_filter_selects_matching_demos() {
        let config = TourConfig::new().with_only([KeywordId::Interface]);
        let names: Vec<_> = selected(&config).map(|d| d.name).collect();
        assert_eq!(names, vec!["interface", "interface-vs-abstract"]);
    }

    #[test]
    fn headers_precede_each_demo() {
        let config = TourConfig::new().with_only([KeywordId::Params]);
        let mut out = Vec::new();
        let summary = run_tour(&mut out, &config);
        assert!(summary.is_success());
        assert_eq!(String::from_utf8(out).unwrap(), "== params ==\n6\n30\n9\n");
    }

    #[test]
    fn find_by_name() {
        assert_eq!(find("this").map(|d| d.title), Some("this"));
        assert!(find("goto").is_none());
    }
}
