use super::*;

#[test]
fn multiplication_binds_tighter_than_addition() {
    match parse_expr("1+2*3").unwrap() {
        Expr::Binary {
            op: BinaryOp::Add,
            right,
            ..
        } => assert!(matches!(
            *right,
            Expr::Binary {
                op: BinaryOp::Mul,
                ..
            }
        )),
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn negation_wraps_power() {
    match parse_expr("-x^2").unwrap() {
        Expr::Neg(inner) => assert!(matches!(
            *inner,
            Expr::Binary {
                op: BinaryOp::Pow,
                ..
            }
        )),
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn power_is_right_associative() {
    match parse_expr("2**3**2").unwrap() {
        Expr::Binary {
            op: BinaryOp::Pow,
            left,
            right,
        } => {
            assert_eq!(*left, Expr::Lit(2.0));
            assert!(matches!(
                *right,
                Expr::Binary {
                    op: BinaryOp::Pow,
                    ..
                }
            ));
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn parses_calls_with_offsets() {
    match parse_expr("  atan2(y, x)").unwrap() {
        Expr::Call { func, args, offset } => {
            assert_eq!(func, "atan2");
            assert_eq!(args.len(), 2);
            assert_eq!(offset, 2);
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn rejects_trailing_garbage_and_unbalanced_parens() {
    assert!(parse_expr("x y").is_err());
    assert!(parse_expr("(x + 1").is_err());
    assert!(parse_expr("x +").is_err());
    assert!(parse_expr("").is_err());
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let deep = format!("{}x{}", "(".repeat(100_000), ")".repeat(100_000));
    let err = parse_expr(&deep).unwrap_err();
    assert!(err.message.contains("nests deeper"));

    let signs = format!("{}x", "-".repeat(100_000));
    assert!(parse_expr(&signs).is_err());

    let powers = format!("x{}", "^x".repeat(100_000));
    assert!(parse_expr(&powers).is_err());

    let sum = format!("x{}", "+x".repeat(100_000));
    assert!(parse_expr(&sum).is_err());
    assert!(parse_expr(&format!("x{}", "*x".repeat(100))).is_ok());

    let modest = format!("{}x{}", "(".repeat(40), ")".repeat(40));
    assert_eq!(
        parse_expr(&modest).unwrap(),
        Expr::Ident {
            name: "x".to_owned(),
            offset: 40
        }
    );
}

#[test]
fn errors_report_the_byte_offset() {
    let err = parse_expr("x + )").unwrap_err();
    assert_eq!(err.offset, 4);
    assert_eq!(
        err.to_string(),
        format!("field expression error at byte 4: {}", err.message)
    );
}
