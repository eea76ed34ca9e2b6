use super::*;

#[test]
fn constructors_prefix_their_category() {
    assert_eq!(
        PaintError::config("stroke_count must be > 0").to_string(),
        "configuration error: stroke_count must be > 0"
    );
    assert_eq!(
        PaintError::texture("empty").to_string(),
        "texture error: empty"
    );
    assert_eq!(
        PaintError::field("unknown identifier 'z'").to_string(),
        "vector field error: unknown identifier 'z'"
    );
    assert_eq!(
        PaintError::evaluation("pool").to_string(),
        "evaluation error: pool"
    );
}

#[test]
fn other_is_transparent() {
    let err: PaintError = anyhow::anyhow!("disk full").into();
    assert!(matches!(err, PaintError::Other(_)));
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn question_mark_lifts_anyhow() {
    fn inner() -> PaintResult<()> {
        Err(anyhow::anyhow!("decode failed"))?;
        Ok(())
    }
    assert!(matches!(inner(), Err(PaintError::Other(_))));
}
