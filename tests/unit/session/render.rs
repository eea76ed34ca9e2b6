use super::*;
use crate::foundation::core::{Point, Rgba};
use crate::raster::pose::StrokePose;
use crate::texture::descriptor::{TexelSample, TextureDescriptor};

fn set() -> TextureSet {
    let mut s = TextureSet::new();
    s.insert(
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
    s
}

fn stroke(texture: &str) -> CommittedStroke {
    CommittedStroke {
        texture: texture.to_owned(),
        pose: StrokePose::uniform(Point::new(4.0, 4.0), 0.0, 1.0),
        color: Rgba::opaque(1.0, 0.0, 0.0),
        score: 1.0,
        iterations: 3,
    }
}

#[test]
fn output_dimensions_scale_longer_side() {
    assert_eq!(
        output_dimensions(Bounds::new(200, 100), 1000).unwrap(),
        (1000, 500, 5.0)
    );
    assert_eq!(
        output_dimensions(Bounds::new(30, 90), 45).unwrap(),
        (15, 45, 0.5)
    );
    assert!(output_dimensions(Bounds::new(30, 90), 0).is_err());
}

#[test]
fn unknown_texture_is_an_error() {
    let base = PixelBuffer::new_filled(8, 8, Rgba::opaque(0.0, 0.0, 0.0)).unwrap();
    let err = render_strokes(&[stroke("missing")], &set(), 1.0, base, 1.0).unwrap_err();
    assert!(matches!(err, PaintError::Texture(_)));
}

#[test]
fn invalid_scale_is_an_error() {
    let base = PixelBuffer::new_filled(8, 8, Rgba::opaque(0.0, 0.0, 0.0)).unwrap();
    for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(render_strokes(&[], &set(), 1.0, base.clone(), scale).is_err());
    }
}

#[test]
fn doubling_scale_quadruples_painted_area() {
    let painted = |canvas: &PixelBuffer| canvas.pixels().iter().filter(|p| p.r > 0.5).count();
    let small = render_strokes(
        &[stroke("dab")],
        &set(),
        1.0,
        PixelBuffer::new_filled(8, 8, Rgba::opaque(0.0, 0.0, 0.0)).unwrap(),
        1.0,
    )
    .unwrap();
    let big = render_strokes(
        &[stroke("dab")],
        &set(),
        1.0,
        PixelBuffer::new_filled(16, 16, Rgba::opaque(0.0, 0.0, 0.0)).unwrap(),
        2.0,
    )
    .unwrap();
    assert_eq!(painted(&small), 4);
    assert_eq!(painted(&big), 16);
}
