use super::*;

#[test]
fn compiles_and_evaluates() {
    let f = FieldExpr::compile("x*x + y").unwrap();
    assert_eq!(f.eval(3.0, 1.0), 10.0);
}

#[test]
fn compile_errors_are_field_errors_naming_the_source() {
    let err = FieldExpr::compile("x + q").unwrap_err();
    assert!(matches!(err, PaintError::Field(_)));
    assert!(err.to_string().contains("\"x + q\""));
    assert!(matches!(
        FieldExpr::compile("sin(").unwrap_err(),
        PaintError::Field(_)
    ));
    assert!(FieldExpr::compile("   ").is_err());
}

#[test]
fn undefined_points_evaluate_non_finite() {
    let f = FieldExpr::compile("log(x)").unwrap();
    assert!(!f.eval(-2.0, 0.0).is_finite());
}
