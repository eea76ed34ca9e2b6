use rand::SeedableRng;

use super::*;

fn perturber(allow_rotate: bool, allow_scale: bool) -> Perturber {
    Perturber::new(
        &PerturbConfig::default(),
        8.0,
        4.0,
        Bounds::new(32, 16),
        allow_rotate,
        allow_scale,
    )
}

#[test]
fn allowed_kinds_follow_flags() {
    assert_eq!(
        perturber(true, true).kinds.as_slice(),
        &[
            Perturbation::Translate,
            Perturbation::Rotate,
            Perturbation::Scale
        ]
    );
    assert_eq!(perturber(false, true).kinds.as_slice(), &[Perturbation::Translate, Perturbation::Scale]);
    assert_eq!(perturber(false, false).kinds.as_slice(), &[Perturbation::Translate]);
}

#[test]
fn fixed_size_never_scales_and_constrained_never_rotates() {
    let p = perturber(false, false);
    let mut rng = rand_pcg::Pcg32::seed_from_u64(11);
    let start = StrokePose::uniform(Point::new(16.0, 8.0), 1.0, 2.0);
    for _ in 0..200 {
        let (kind, next) = p.perturb(&start, &mut rng);
        assert_eq!(kind, Perturbation::Translate);
        assert_eq!(next.scale, start.scale);
        assert_eq!(next.rotation, start.rotation);
    }
}

#[test]
fn perturbations_stay_in_domain() {
    let p = perturber(true, true);
    let mut rng = rand_pcg::Pcg32::seed_from_u64(5);
    let mut pose = StrokePose::uniform(Point::new(1.0, 1.0), 0.0, 1.0);
    for _ in 0..2000 {
        let (_, next) = p.perturb(&pose, &mut rng);
        assert!((0.0..=32.0).contains(&next.center.x));
        assert!((0.0..=16.0).contains(&next.center.y));
        assert!((0.0..std::f64::consts::TAU).contains(&next.rotation));
        assert!(next.scale.x >= 0.25 && next.scale.x <= 16.0);
        assert_eq!(next.scale.x, next.scale.y);
        pose = next;
    }
}

#[test]
fn translation_is_bounded_by_range() {
    let p = perturber(false, false);
    let mut rng = rand_pcg::Pcg32::seed_from_u64(9);
    let start = StrokePose::uniform(Point::new(16.0, 8.0), 0.0, 1.0);
    for _ in 0..200 {
        let (_, next) = p.perturb(&start, &mut rng);
        // Default range is half of the 8 px reference size.
        assert!((next.center.x - 16.0).abs() <= 4.0);
        assert!((next.center.y - 8.0).abs() <= 4.0);
    }
}

#[test]
fn clamp_pulls_outliers_back() {
    let p = perturber(true, true);
    let pose = StrokePose::uniform(Point::new(-3.0, 99.0), 0.5, 1000.0);
    let c = p.clamp(pose);
    assert_eq!(c.center, Point::new(0.0, 16.0));
    assert_eq!(c.scale, Vec2::new(16.0, 16.0));
    assert_eq!(c.rotation, 0.5);
}
