#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Lit(f64),
    /// Bare identifier: a variable (`x`, `y`) or a named constant (`pi`, `e`).
    Ident {
        name: String,
        offset: usize,
    },
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        func: String,
        args: Vec<Expr>,
        offset: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}
