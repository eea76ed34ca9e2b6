use crate::foundation::math::lerp;

/// Search budget for stroke `stroke_index` of `total_strokes`.
///
/// Linear from `min` for the first stroke to `max` for the last, rounded to nearest. Later
/// strokes refine detail and get the larger budget. A single-stroke run gets `min`.
pub fn iteration_budget(stroke_index: u32, total_strokes: u32, min: u32, max: u32) -> u32 {
    if total_strokes <= 1 || max <= min {
        return min;
    }
    let last = total_strokes - 1;
    let t = f64::from(stroke_index.min(last)) / f64::from(last);
    lerp(f64::from(min), f64::from(max), t).round() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/budget.rs"]
mod tests;
