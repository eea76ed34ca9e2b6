use super::*;
use crate::foundation::core::{Bounds, Point};
use crate::raster::pose::StrokePose;
use crate::raster::rasterizer::rasterize;
use crate::texture::descriptor::{TexelSample, TextureDescriptor};

fn solid(n: u32) -> TextureDescriptor {
    TextureDescriptor::filled(
        n,
        n,
        TexelSample {
            coverage: 1.0,
            alpha: 1.0,
        },
    )
    .unwrap()
}

fn footprint_at(x: f64, y: f64, bounds: Bounds) -> Footprint {
    rasterize(
        &StrokePose::uniform(Point::new(x, y), 0.0, 1.0),
        &solid(4),
        1.0,
        bounds,
    )
}

/// Left half red, right half blue.
fn split_target() -> PixelBuffer {
    let mut t = PixelBuffer::new_filled(16, 8, Rgba::opaque(1.0, 0.0, 0.0)).unwrap();
    for y in 0..8 {
        for x in 8..16 {
            t.set(x, y, Rgba::opaque(0.0, 0.0, 1.0));
        }
    }
    t
}

#[test]
fn empty_footprint_scores_minimum() {
    let t = split_target();
    let s = score(&Footprint::default(), &t, &t, Rgba::opaque(1.0, 0.0, 0.0));
    assert_eq!(s, EMPTY_FOOTPRINT_SCORE);
    assert_eq!(stroke_color(&Footprint::default(), &t), None);
}

#[test]
fn matching_stroke_scores_positive() {
    let target = split_target();
    let canvas = PixelBuffer::new_filled(16, 8, Rgba::opaque(0.5, 0.5, 0.5)).unwrap();
    let fp = footprint_at(4.0, 4.0, target.bounds());
    let color = stroke_color(&fp, &target).unwrap();
    assert_eq!(color, Rgba::opaque(1.0, 0.0, 0.0));
    assert!(score(&fp, &target, &canvas, color) > 0.0);
}

#[test]
fn stroke_on_already_correct_canvas_scores_zero() {
    let target = split_target();
    let fp = footprint_at(4.0, 4.0, target.bounds());
    let s = score(&fp, &target, &target, Rgba::opaque(1.0, 0.0, 0.0));
    assert_eq!(s, 0.0);
}

#[test]
fn maximally_wrong_color_scores_negative() {
    let target = split_target();
    let fp = footprint_at(4.0, 4.0, target.bounds());
    assert!(score(&fp, &target, &target, Rgba::opaque(0.0, 1.0, 1.0)) < 0.0);
}

#[test]
fn straddling_boundary_averages_both_sides() {
    let target = split_target();
    let fp = footprint_at(8.0, 4.0, target.bounds());
    let color = stroke_color(&fp, &target).unwrap();
    assert!((color.r - 0.5).abs() < 1e-6);
    assert!((color.b - 0.5).abs() < 1e-6);
    assert_eq!(color.a, 1.0);
}

#[test]
fn score_touches_only_footprint_pixels() {
    let target = split_target();
    let mut canvas = PixelBuffer::new_filled(16, 8, Rgba::opaque(0.5, 0.5, 0.5)).unwrap();
    let fp = footprint_at(4.0, 4.0, target.bounds());
    let color = Rgba::opaque(1.0, 0.0, 0.0);
    let before = score(&fp, &target, &canvas, color);
    // Changing pixels outside the footprint does not move the score.
    canvas.set(15, 7, Rgba::opaque(0.0, 0.0, 0.0));
    assert_eq!(score(&fp, &target, &canvas, color), before);
}

#[test]
fn faint_texels_count_as_much_as_opaque_ones() {
    // Black left pixel, white right pixel.
    let mut target = PixelBuffer::new_filled(2, 1, Rgba::opaque(0.0, 0.0, 0.0)).unwrap();
    target.set(1, 0, Rgba::opaque(1.0, 1.0, 1.0));
    let texture = TextureDescriptor::from_texels(
        2,
        1,
        vec![
            TexelSample {
                coverage: 1.0,
                alpha: 0.1,
            },
            TexelSample {
                coverage: 1.0,
                alpha: 1.0,
            },
        ],
    )
    .unwrap();
    let fp = rasterize(
        &StrokePose::uniform(Point::new(1.0, 0.5), 0.0, 1.0),
        &texture,
        1.0,
        target.bounds(),
    );
    assert_eq!(fp.len(), 2);
    let color = stroke_color(&fp, &target).unwrap();
    assert!((color.r - 0.5).abs() < 1e-6, "got {}", color.r);
}
