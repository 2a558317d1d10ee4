//! `const`/`readonly`, `this` and generics.

use std::io::Write;

use keytour_core::{Introspect, introspect_methods};

use super::DemoResult;
use crate::config::TourConfig;

// ----------------------------------------------------------------------------
// const / readonly
// ----------------------------------------------------------------------------

/// Evaluated at compile time.
pub const MY_CONSTANT1: i32 = 123;

/// Set once in the constructor; only readable afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ConstAndReadonlyExample {
    my_constant2: i32,
}

impl ConstAndReadonlyExample {
    pub fn new(value: i32) -> Self {
        Self { my_constant2: value }
    }

    pub fn my_constant2(&self) -> i32 {
        self.my_constant2
    }
}

pub fn run_const_readonly(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    writeln!(out, "{MY_CONSTANT1}")?;
    let read_only = ConstAndReadonlyExample::new(20);
    writeln!(out, "{}", read_only.my_constant2())?;
    Ok(())
}

// ----------------------------------------------------------------------------
// this
// ----------------------------------------------------------------------------

/// `this._x` is `self.x`.
#[derive(Debug, Clone, Introspect)]
pub struct MyClass {
    x: i32,
}

#[introspect_methods(rename_all = "PascalCase")]
impl MyClass {
    #[introspect(skip)]
    pub fn new(x: i32) -> Self {
        Self { x }
    }

    pub fn get_x(&self) -> i32 {
        self.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }
}

pub fn run_this(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let mut my_class = MyClass::new(10);
    writeln!(out, "{}", my_class.get_x())?;
    my_class.set_x(7);
    writeln!(out, "{}", my_class.get_x())?;
    Ok(())
}

// ----------------------------------------------------------------------------
// generics
// ----------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MyGenericClass<T> {
    my_data: T,
}

impl<T> MyGenericClass<T> {
    pub fn new(my_data: T) -> Self {
        Self { my_data }
    }

    pub fn get_data(&self) -> &T {
        &self.my_data
    }
}

pub fn run_generics(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let my_string_class = MyGenericClass::new("Hello, world!");
    writeln!(out, "{}", my_string_class.get_data())?;

    let my_int_class = MyGenericClass::new(20);
    writeln!(out, "{}", my_int_class.get_data())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn capture(run: fn(&mut dyn Write, &TourConfig) -> DemoResult) -> String {
        let mut out = Vec::new();
        run(&mut out, &TourConfig::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn const_then_readonly() {
        assert_eq!(capture(run_const_readonly), "123\n20\n");
    }

    #[test]
    fn this_reads_and_writes_the_instance() {
        assert_eq!(capture(run_this), "10\n7\n");
    }

    #[test]
    fn generic_holds_any_type() {
        assert_eq!(capture(run_generics), "Hello, world!\n20\n");
        assert_eq!(MyGenericClass::new(vec![1, 2]).get_data().len(), 2);
    }
}
