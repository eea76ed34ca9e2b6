use super::*;
use crate::foundation::core::Vec2;
use crate::texture::descriptor::TexelSample;

const SOLID: TexelSample = TexelSample {
    coverage: 1.0,
    alpha: 1.0,
};

fn solid(w: u32, h: u32) -> TextureDescriptor {
    TextureDescriptor::filled(w, h, SOLID).unwrap()
}

fn coords(fp: &Footprint) -> Vec<(u32, u32)> {
    fp.pixels().iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn axis_aligned_square_covers_exact_block() {
    let pose = StrokePose::uniform(Point::new(5.0, 5.0), 0.0, 1.0);
    let fp = rasterize(&pose, &solid(4, 4), 1.0, Bounds::new(10, 10));
    assert_eq!(fp.len(), 16);
    let mut expected = Vec::new();
    for y in 3..=6 {
        for x in 3..=6 {
            expected.push((x, y));
        }
    }
    assert_eq!(coords(&fp), expected);
    assert!(fp.pixels().iter().all(|p| p.coverage == 1.0 && p.alpha == 1.0));
}

#[test]
fn scale_grows_area_quadratically() {
    let tex = solid(4, 4);
    let small = rasterize(
        &StrokePose::uniform(Point::new(20.0, 20.0), 0.0, 1.0),
        &tex,
        1.0,
        Bounds::new(40, 40),
    );
    let big = rasterize(
        &StrokePose::uniform(Point::new(20.0, 20.0), 0.0, 2.0),
        &tex,
        1.0,
        Bounds::new(40, 40),
    );
    assert_eq!(big.len(), small.len() * 4);
}

#[test]
fn quarter_turn_swaps_extents() {
    let tex = solid(6, 2);
    let bounds = Bounds::new(20, 20);
    let flat = rasterize(
        &StrokePose::uniform(Point::new(10.0, 10.0), 0.0, 1.0),
        &tex,
        1.0,
        bounds,
    );
    let upright = rasterize(
        &StrokePose::uniform(Point::new(10.0, 10.0), std::f64::consts::FRAC_PI_2, 1.0),
        &tex,
        1.0,
        bounds,
    );
    let extent = |fp: &Footprint| {
        let xs: Vec<u32> = fp.pixels().iter().map(|p| p.x).collect();
        let ys: Vec<u32> = fp.pixels().iter().map(|p| p.y).collect();
        (
            xs.iter().max().unwrap() - xs.iter().min().unwrap() + 1,
            ys.iter().max().unwrap() - ys.iter().min().unwrap() + 1,
        )
    };
    assert_eq!(extent(&flat), (6, 2));
    assert_eq!(extent(&upright), (2, 6));
    assert_eq!(flat.len(), upright.len());
}

#[test]
fn rotated_footprint_stays_inside_bounds() {
    let pose = StrokePose::uniform(Point::new(1.0, 1.0), 0.6, 3.0);
    let bounds = Bounds::new(8, 5);
    let fp = rasterize(&pose, &solid(4, 4), 1.0, bounds);
    assert!(!fp.is_empty());
    assert!(fp.pixels().iter().all(|p| p.x < 8 && p.y < 5));
}

#[test]
fn out_of_bounds_pose_is_empty() {
    let pose = StrokePose::uniform(Point::new(-50.0, 5.0), 0.3, 1.0);
    assert!(rasterize(&pose, &solid(4, 4), 1.0, Bounds::new(10, 10)).is_empty());
}

#[test]
fn collapsed_or_non_finite_pose_is_empty() {
    let tex = solid(4, 4);
    let bounds = Bounds::new(10, 10);
    let zero = StrokePose::new(Point::new(5.0, 5.0), 0.0, Vec2::new(0.0, 1.0));
    assert!(rasterize(&zero, &tex, 1.0, bounds).is_empty());
    let nan = StrokePose::uniform(Point::new(f64::NAN, 5.0), 0.0, 1.0);
    assert!(rasterize(&nan, &tex, 1.0, bounds).is_empty());
    let ok = StrokePose::uniform(Point::new(5.0, 5.0), 0.0, 1.0);
    assert!(rasterize(&ok, &tex, 0.0, bounds).is_empty());
}

#[test]
fn transparent_and_black_texels_are_excluded() {
    let texels = vec![
        SOLID,
        TexelSample {
            coverage: 0.0,
            alpha: 1.0,
        },
        TexelSample {
            coverage: 0.0,
            alpha: 0.0,
        },
        SOLID,
    ];
    let tex = TextureDescriptor::from_texels(4, 1, texels).unwrap();
    // Pixel centers land on texel centers, so each sample returns its texel unblended.
    let pose = StrokePose::uniform(Point::new(8.0, 1.0), 0.0, 1.0);
    let fp = rasterize(&pose, &tex, 1.0, Bounds::new(16, 2));
    let xs: Vec<u32> = fp.pixels().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![6, 9]);
}

#[test]
fn opacity_scales_alpha() {
    let pose = StrokePose::uniform(Point::new(2.0, 2.0), 0.0, 1.0);
    let fp = rasterize(&pose, &solid(2, 2), 0.25, Bounds::new(4, 4));
    assert_eq!(fp.len(), 4);
    assert!(fp.pixels().iter().all(|p| p.alpha == 0.25));
}

#[test]
fn rasterize_into_reuses_and_clears() {
    let tex = solid(2, 2);
    let mut fp = Footprint::default();
    rasterize_into(
        &StrokePose::uniform(Point::new(2.0, 2.0), 0.0, 1.0),
        &tex,
        1.0,
        Bounds::new(4, 4),
        &mut fp,
    );
    assert_eq!(fp.len(), 4);
    rasterize_into(
        &StrokePose::uniform(Point::new(-9.0, 2.0), 0.0, 1.0),
        &tex,
        1.0,
        Bounds::new(4, 4),
        &mut fp,
    );
    assert!(fp.is_empty());
}

#[test]
fn commit_composites_only_the_footprint() {
    let mut canvas = PixelBuffer::new_filled(6, 6, Rgba::opaque(0.0, 0.0, 0.0)).unwrap();
    let pose = StrokePose::uniform(Point::new(3.0, 3.0), 0.0, 1.0);
    let fp = commit_stroke(&pose, &solid(2, 2), 1.0, Rgba::opaque(1.0, 0.0, 0.0), &mut canvas);
    assert_eq!(fp.len(), 4);
    for y in 0..6 {
        for x in 0..6 {
            let inside = (2..=3).contains(&x) && (2..=3).contains(&y);
            let expect = if inside { 1.0 } else { 0.0 };
            assert_eq!(canvas.get(x, y).r, expect, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn rasterization_is_deterministic() {
    let pose = StrokePose::uniform(Point::new(7.3, 4.1), 2.2, 1.7);
    let tex = solid(5, 3);
    let a = rasterize(&pose, &tex, 0.8, Bounds::new(16, 12));
    let b = rasterize(&pose, &tex, 0.8, Bounds::new(16, 12));
    assert_eq!(a, b);
}
