use crate::field::expression::ast::{BinaryOp, Expr};
use crate::field::expression::bytecode::{BuiltinId, BytecodeProgram, Op};
use crate::field::expression::error::ExprError;

/// Resolve identifiers, check call arity, and emit stack bytecode.
pub(crate) fn lower_to_bytecode(expr: &Expr) -> Result<BytecodeProgram, ExprError> {
    let mut p = BytecodeProgram::new();
    lower_expr(expr, &mut p)?;
    Ok(p)
}

fn lower_expr(e: &Expr, out: &mut BytecodeProgram) -> Result<(), ExprError> {
    match e {
        Expr::Lit(v) => {
            let idx = out.push_const(*v);
            out.ops.push(Op::PushConst(idx));
        }
        Expr::Ident { name, offset } => match name.as_str() {
            "x" => out.ops.push(Op::LoadX),
            "y" => out.ops.push(Op::LoadY),
            "pi" => {
                let idx = out.push_const(std::f64::consts::PI);
                out.ops.push(Op::PushConst(idx));
            }
            "e" => {
                let idx = out.push_const(std::f64::consts::E);
                out.ops.push(Op::PushConst(idx));
            }
            other => {
                return Err(ExprError::new(
                    *offset,
                    format!("unknown identifier \"{other}\" (only x, y, pi and e are allowed)"),
                ));
            }
        },
        Expr::Neg(inner) => {
            lower_expr(inner, out)?;
            out.ops.push(Op::Neg);
        }
        Expr::Binary { op, left, right } => {
            lower_expr(left, out)?;
            lower_expr(right, out)?;
            out.ops.push(match op {
                BinaryOp::Add => Op::Add,
                BinaryOp::Sub => Op::Sub,
                BinaryOp::Mul => Op::Mul,
                BinaryOp::Div => Op::Div,
                BinaryOp::Mod => Op::Mod,
                BinaryOp::Pow => Op::Pow,
            });
        }
        Expr::Call { func, args, offset } => {
            let id = BuiltinId::lookup(func).ok_or_else(|| {
                ExprError::new(*offset, format!("unknown function \"{func}\""))
            })?;
            if args.len() != id.arity() {
                return Err(ExprError::new(
                    *offset,
                    format!(
                        "{func} expects {} argument(s), got {}",
                        id.arity(),
                        args.len()
                    ),
                ));
            }
            for a in args {
                lower_expr(a, out)?;
            }
            out.ops.push(Op::Call(id));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/field/expression/lower.rs"]
mod tests;
