//! Scalar expressions over canvas coordinates `x` and `y`.
//!
//! Source text is lexed, parsed, resolved and lowered to a small stack bytecode once; evaluation
//! is allocation-free.

pub(crate) mod ast;
pub(crate) mod bytecode;
pub(crate) mod error;
pub(crate) mod lexer;
pub(crate) mod lower;
pub(crate) mod parser;
pub(crate) mod vm;

use crate::field::expression::bytecode::BytecodeProgram;
use crate::foundation::error::{PaintError, PaintResult};

/// A compiled field component such as `f(x, y) = -y`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldExpr {
    program: BytecodeProgram,
}

impl FieldExpr {
    /// Compile `source`. Unknown identifiers, unknown functions and wrong arity are rejected.
    pub fn compile(source: &str) -> PaintResult<Self> {
        if source.trim().is_empty() {
            return Err(PaintError::field("expression must be non-empty"));
        }
        let ast = parser::parse_expr(source)
            .map_err(|e| PaintError::field(format!("\"{source}\": {e}")))?;
        let program = lower::lower_to_bytecode(&ast)
            .map_err(|e| PaintError::field(format!("\"{source}\": {e}")))?;
        Ok(Self { program })
    }

    /// Value at `(x, y)`. May be NaN or infinite where the expression is undefined.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        vm::eval_program(&self.program, x, y).unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/field/expression/mod.rs"]
mod tests;
