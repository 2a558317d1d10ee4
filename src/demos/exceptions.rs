//! `try`/`catch`: fallible operations return `Result`, and the caller matches on it.

use std::io::Write;

use thiserror::Error;

use super::DemoResult;
use crate::config::TourConfig;

/// Failures of checked integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Attempted to divide by zero.")]
    DivideByZero,

    #[error("Arithmetic operation resulted in an overflow.")]
    Overflow,
}

pub fn divide(x: i32, y: i32) -> Result<i32, ArithmeticError> {
    if y == 0 {
        return Err(ArithmeticError::DivideByZero);
    }
    x.checked_div(y).ok_or(ArithmeticError::Overflow)
}

pub struct ExceptionHandlerClass;

impl ExceptionHandlerClass {
    pub fn try_catch(&self, out: &mut dyn Write) -> DemoResult {
        let x = 10;
        let y = 0;
        match divide(x, y) {
            Ok(z) => writeln!(out, "{z}")?,
            Err(err) => writeln!(out, "An error occurred: {err}")?,
        }
        Ok(())
    }
}

pub fn run_try_catch(out: &mut dyn Write, _config: &TourConfig) -> DemoResult {
    ExceptionHandlerClass.try_catch(out)
}
