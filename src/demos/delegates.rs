//! `delegate`: a typed reference to a method.
//!
//! A delegate type is a `fn` pointer alias; reassigning the variable swaps the target.

use std::io::Write;

use super::DemoResult;
use crate::config::TourConfig;

pub type DelegateExample = fn(i32, i32) -> i32;

pub fn add1(a: i32, b: i32) -> i32 {
    a + b
}

pub fn subtract1(a: i32, b: i32) -> i32 {
    a - b
}

pub fn run_delegates(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let (x, y) = (10, 5);

    let mut example_delegate: DelegateExample = add1;
    writeln!(out, "{}", example_delegate(x, y))?;

    example_delegate = subtract1;
    writeln!(out, "{}", example_delegate(x, y))?;
    Ok(())
}
