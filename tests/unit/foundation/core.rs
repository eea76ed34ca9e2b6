use super::*;

#[test]
fn rgba8_conversion_is_stable_at_the_ends() {
    let c = Rgba::from_rgba8([0, 255, 128, 255]);
    assert_eq!(c.r, 0.0);
    assert_eq!(c.g, 1.0);
    assert_eq!(c.a, 1.0);
    assert_eq!(c.to_rgba8(), [0, 255, 128, 255]);
}

#[test]
fn to_rgba8_clamps_out_of_range_channels() {
    assert_eq!(Rgba::new(-0.5, 2.0, 0.5, 1.0).to_rgba8(), [0, 255, 128, 255]);
}

#[test]
fn rgb_distance_ignores_alpha() {
    let black = Rgba::new(0.0, 0.0, 0.0, 0.0);
    let white = Rgba::opaque(1.0, 1.0, 1.0);
    assert!((black.rgb_distance(white) - 3.0f32.sqrt()).abs() < 1e-6);
    assert_eq!(Rgba::opaque(0.2, 0.2, 0.2).rgb_distance(Rgba::new(0.2, 0.2, 0.2, 0.0)), 0.0);
}

#[test]
fn bounds_helpers() {
    let b = Bounds::new(12, 7);
    assert_eq!(b.pixel_count(), 84);
    assert_eq!(b.longer_side(), 12);
    assert!(!b.is_empty());
    assert!(Bounds::new(0, 7).is_empty());
}
