//! `is`/`as` and boxing.
//!
//! `is` becomes [`Any::is`], `as` becomes [`Any::downcast_ref`] (an `Option` instead of `null`), and
//! `object` becomes `Box<dyn Any>`.

use std::any::Any;
use std::io::Write;

use keytour_core::Introspect;

use super::DemoResult;
use crate::config::TourConfig;

#[derive(Debug, Default, Introspect)]
pub struct IsAsExample;

/// `value is IsAsExample`
pub fn check_is(value: &dyn Any) -> bool {
    value.is::<IsAsExample>()
}

/// `value as IsAsExample`
pub fn check_as(value: &dyn Any) -> Option<&IsAsExample> {
    value.downcast_ref::<IsAsExample>()
}

pub fn run_is_as(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let my_object = IsAsExample;
    let not_it = "a string";

    writeln!(out, "is IsAsExample: {}", check_is(&my_object))?;
    writeln!(out, "is IsAsExample: {}", check_is(&not_it))?;
    writeln!(out, "as IsAsExample: {}", describe_cast(check_as(&my_object)))?;
    writeln!(out, "as IsAsExample: {}", describe_cast(check_as(&not_it)))?;
    Ok(())
}

fn describe_cast(cast: Option<&IsAsExample>) -> &'static str {
    match cast {
        Some(_) => "cast succeeded",
        None => "none",
    }
}

/// Box a value as an opaque `object`.
pub fn boxed<T: Any>(value: T) -> Box<dyn Any> {
    Box::new(value)
}

/// Unbox: succeeds only for the exact type that was boxed.
pub fn unboxed<T: Any + Copy>(object: &dyn Any) -> Option<T> {
    object.downcast_ref::<T>().copied()
}

pub fn run_boxing(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    let obj = boxed(123_i32);

    match unboxed::<i32>(obj.as_ref()) {
        Some(x) => writeln!(out, "{x}")?,
        None => writeln!(out, "unboxing as i32 failed")?,
    }
    match unboxed::<i64>(obj.as_ref()) {
        Some(x) => writeln!(out, "{x}")?,
        None => writeln!(out, "unboxing as i64 failed")?,
    }
    Ok(())
}
