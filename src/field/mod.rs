pub(crate) mod expression;
pub(crate) mod vector_field;
