use crate::foundation::core::Rgba;

/// Straight-alpha "over" of one stroke sample onto `dst`.
///
/// The stroke contributes `color * coverage` with alpha `alpha`. Alpha at or below zero
/// leaves `dst` untouched.
pub(crate) fn over(dst: Rgba, color: Rgba, coverage: f32, alpha: f32) -> Rgba {
    let fa = alpha.clamp(0.0, 1.0);
    if fa <= 0.0 {
        return dst;
    }

    let ba = dst.a.clamp(0.0, 1.0);
    let inv = 1.0 - fa;
    let out_a = fa + ba * inv;
    if out_a <= 0.0 {
        return dst;
    }

    let src_w = fa * coverage.clamp(0.0, 1.0);
    let dst_w = ba * inv;
    Rgba::new(
        (color.r * src_w + dst.r * dst_w) / out_a,
        (color.g * src_w + dst.g * dst_w) / out_a,
        (color.b * src_w + dst.b * dst_w) / out_a,
        out_a,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
