use smallvec::SmallVec;

use crate::field::expression::bytecode::{BuiltinId, BytecodeProgram, Op};

#[derive(Debug, Clone)]
pub(crate) struct VmError {
    pub(crate) message: String,
}

impl VmError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for VmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vm error: {}", self.message)
    }
}

impl std::error::Error for VmError {}

type Stack = SmallVec<[f64; 16]>;

/// Evaluate `p` at `(x, y)`. Domain faults produce NaN or infinities, never errors.
pub(crate) fn eval_program(p: &BytecodeProgram, x: f64, y: f64) -> Result<f64, VmError> {
    let mut stack = Stack::new();

    for &op in &p.ops {
        match op {
            Op::PushConst(idx) => {
                let c = p
                    .consts
                    .get(idx.0 as usize)
                    .ok_or_else(|| VmError::new("const idx out of range"))?;
                stack.push(*c);
            }
            Op::LoadX => stack.push(x),
            Op::LoadY => stack.push(y),

            Op::Neg => {
                let v = pop(&mut stack)?;
                stack.push(-v);
            }
            Op::Add => bin(&mut stack, |a, b| a + b)?,
            Op::Sub => bin(&mut stack, |a, b| a - b)?,
            Op::Mul => bin(&mut stack, |a, b| a * b)?,
            Op::Div => bin(&mut stack, |a, b| a / b)?,
            // Floored modulo: the result takes the sign of the divisor.
            Op::Mod => bin(&mut stack, |a, b| a - b * (a / b).floor())?,
            Op::Pow => bin(&mut stack, f64::powf)?,

            Op::Call(id) => call_builtin(&mut stack, id)?,
        }
    }

    if stack.len() != 1 {
        return Err(VmError::new(format!(
            "stack has {} values at end of program",
            stack.len()
        )));
    }
    pop(&mut stack)
}

fn pop(stack: &mut Stack) -> Result<f64, VmError> {
    stack.pop().ok_or_else(|| VmError::new("stack underflow"))
}

fn bin(stack: &mut Stack, f: impl FnOnce(f64, f64) -> f64) -> Result<(), VmError> {
    let b = pop(stack)?;
    let a = pop(stack)?;
    stack.push(f(a, b));
    Ok(())
}

fn call_builtin(stack: &mut Stack, id: BuiltinId) -> Result<(), VmError> {
    if stack.len() < id.arity() {
        return Err(VmError::new(format!("stack underflow in {id:?} call")));
    }

    let unary = |stack: &mut Stack, f: fn(f64) -> f64| -> Result<(), VmError> {
        let v = pop(stack)?;
        stack.push(f(v));
        Ok(())
    };

    match id {
        BuiltinId::Sin => unary(stack, f64::sin),
        BuiltinId::Cos => unary(stack, f64::cos),
        BuiltinId::Tan => unary(stack, f64::tan),
        BuiltinId::Asin => unary(stack, f64::asin),
        BuiltinId::Acos => unary(stack, f64::acos),
        BuiltinId::Atan => unary(stack, f64::atan),
        BuiltinId::Sinh => unary(stack, f64::sinh),
        BuiltinId::Cosh => unary(stack, f64::cosh),
        BuiltinId::Tanh => unary(stack, f64::tanh),
        BuiltinId::Exp => unary(stack, f64::exp),
        BuiltinId::Log => unary(stack, f64::ln),
        BuiltinId::Sqrt => unary(stack, f64::sqrt),
        BuiltinId::Abs => unary(stack, f64::abs),
        BuiltinId::Floor => unary(stack, f64::floor),
        BuiltinId::Ceil => unary(stack, f64::ceil),
        BuiltinId::Sign => unary(stack, |v| {
            if v > 0.0 {
                1.0
            } else if v < 0.0 {
                -1.0
            } else {
                v
            }
        }),
        BuiltinId::Atan2 => bin(stack, f64::atan2),
        BuiltinId::Min => bin(stack, f64::min),
        BuiltinId::Max => bin(stack, f64::max),
        BuiltinId::Pow => bin(stack, f64::powf),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/field/expression/vm.rs"]
mod tests;
