use super::*;

#[test]
fn rgba8_derives_masked_luminance() {
    let rgba = [255u8, 255, 255, 255, 255, 255, 255, 0, 0, 0, 0, 255, 255, 0, 0, 255];
    let tex = TextureDescriptor::from_rgba8(2, 2, &rgba).unwrap();
    assert_eq!(tex.texel(0, 0).coverage, 1.0);
    assert_eq!(tex.texel(1, 0).coverage, 0.0);
    assert_eq!(tex.texel(1, 0).alpha, 0.0);
    assert_eq!(tex.texel(0, 1).coverage, 0.0);
    assert_eq!(tex.texel(0, 1).alpha, 1.0);
    assert!((tex.texel(1, 1).coverage - 0.299).abs() < 1e-6);
}

#[test]
fn construction_rejects_bad_shapes() {
    assert!(TextureDescriptor::from_rgba8(0, 2, &[]).is_err());
    assert!(TextureDescriptor::from_rgba8(2, 2, &[0u8; 12]).is_err());
    let bad = TexelSample {
        coverage: 1.5,
        alpha: 1.0,
    };
    assert!(matches!(
        TextureDescriptor::filled(1, 1, bad),
        Err(PaintError::Texture(_))
    ));
}

#[test]
fn reference_size_is_shorter_side() {
    let t = TextureDescriptor::filled(8, 3, TexelSample::default()).unwrap();
    assert_eq!(t.reference_size(), 3.0);
}

#[test]
fn bilinear_hits_texel_centers_exactly() {
    let texels = vec![
        TexelSample {
            coverage: 0.0,
            alpha: 1.0,
        },
        TexelSample {
            coverage: 1.0,
            alpha: 1.0,
        },
    ];
    let tex = TextureDescriptor::from_texels(2, 1, texels).unwrap();
    assert_eq!(tex.sample(0.5, 0.5).coverage, 0.0);
    assert_eq!(tex.sample(1.5, 0.5).coverage, 1.0);
    assert!((tex.sample(1.0, 0.5).coverage - 0.5).abs() < 1e-6);
}

#[test]
fn bilinear_clamps_to_edges() {
    let texels = vec![
        TexelSample {
            coverage: 0.2,
            alpha: 1.0,
        },
        TexelSample {
            coverage: 0.8,
            alpha: 0.5,
        },
    ];
    let tex = TextureDescriptor::from_texels(2, 1, texels).unwrap();
    assert!((tex.sample(0.0, 0.0).coverage - 0.2).abs() < 1e-6);
    assert!((tex.sample(2.0, 1.0).coverage - 0.8).abs() < 1e-6);
    assert!((tex.sample(2.0, 1.0).alpha - 0.5).abs() < 1e-6);
}
