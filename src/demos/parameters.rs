//! `ref`/`out`, `params` and overloading.

use std::io::Write;

use super::DemoResult;
use crate::config::TourConfig;

// ----------------------------------------------------------------------------
// ref / out
// ----------------------------------------------------------------------------

/// `ref int value`: the caller's variable is updated in place.
pub fn increment_value(value: &mut i32) {
    *value += 1;
}

/// `out int x, out int y`: values the callee must produce come back as a tuple.
pub fn get_values() -> (i32, i32) {
    (1, 2)
}

pub fn run_ref_out(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let mut x = 1;
    increment_value(&mut x);
    writeln!(out, "{x}")?;

    let (a, b) = get_values();
    writeln!(out, "{a}")?;
    writeln!(out, "{b}")?;
    Ok(())
}

// ----------------------------------------------------------------------------
// params
// ----------------------------------------------------------------------------

/// `params int[] numbers`: any number of arguments, received as a slice.
pub fn add_numbers(numbers: &[i32]) -> i32 {
    numbers.iter().sum()
}

pub fn run_params(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    writeln!(out, "{}", add_numbers(&[1, 2, 3]))?;
    writeln!(out, "{}", add_numbers(&[4, 5, 6, 7, 8]))?;
    writeln!(out, "{}", add_numbers(&[9]))?;
    Ok(())
}

// ----------------------------------------------------------------------------
// overloading
// ----------------------------------------------------------------------------

/// One implementation per former overload; the compiler picks it from the argument types.
pub trait Addable {
    fn add(a: Self, b: Self) -> Self;
}

impl Addable for i32 {
    fn add(a: Self, b: Self) -> Self {
        a + b
    }
}

impl Addable for f64 {
    fn add(a: Self, b: Self) -> Self {
        a + b
    }
}

impl Addable for String {
    fn add(a: Self, b: Self) -> Self {
        a + &b
    }
}

pub struct MyMathClass;

impl MyMathClass {
    pub fn add<T: Addable>(&self, a: T, b: T) -> T {
        T::add(a, b)
    }
}

pub fn run_overloading(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let math = MyMathClass;
    let int_result = math.add(2, 3);
    let double_result = math.add(2.0, 3.0);
    let string_result = math.add("Hello, ".to_string(), "world!".to_string());

    writeln!(out, "{int_result}")?;
    writeln!(out, "{double_result}")?;
    writeln!(out, "{string_result}")?;
    Ok(())
}
