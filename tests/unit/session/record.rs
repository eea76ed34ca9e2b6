use super::*;
use crate::foundation::core::Point;
use crate::texture::descriptor::{TexelSample, TextureDescriptor};

fn log() -> StrokeLog {
    StrokeLog {
        bounds: Bounds::new(10, 5),
        opacity: 1.0,
        background: Rgba::opaque(0.0, 0.0, 0.0),
        strokes: vec![CommittedStroke {
            texture: "dab".to_owned(),
            pose: StrokePose::uniform(Point::new(5.0, 2.5), 0.0, 1.0),
            color: Rgba::opaque(0.0, 1.0, 0.0),
            score: 2.5,
            iterations: 12,
        }],
    }
}

#[test]
fn json_preserves_the_log() {
    let mut buf = Vec::new();
    log().to_writer(&mut buf).unwrap();
    let back = StrokeLog::from_reader(buf.as_slice()).unwrap();
    assert_eq!(back, log());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = StrokeLog::from_reader("{\"bounds\": 3}".as_bytes()).unwrap_err();
    assert!(matches!(err, PaintError::Config(_)));
}

#[test]
fn render_scales_to_requested_long_side() {
    let mut textures = TextureSet::new();
    textures
        .insert(
            "dab",
            TextureDescriptor::filled(
                2,
                2,
                TexelSample {
                    coverage: 1.0,
                    alpha: 1.0,
                },
            )
            .unwrap(),
        )
        .unwrap();
    let out = log().render(&textures, 40).unwrap();
    assert_eq!((out.width(), out.height()), (40, 20));
    assert_eq!(out.get(20, 10), Rgba::opaque(0.0, 1.0, 0.0));
    assert_eq!(out.get(0, 0), Rgba::opaque(0.0, 0.0, 0.0));
}
