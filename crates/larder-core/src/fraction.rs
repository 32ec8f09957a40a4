//! Kitchen-friendly rounding and display of quantities.
//!
//! Scaled quantities come out as awkward decimals (`1.2375 cup`). These
//! helpers snap them to the fractions a cook actually measures with and
//! render them with vulgar-fraction glyphs.
//!
//! ```rust
//! use larder_core::fraction::{format_quantity, round_to_useful_fraction};
//!
//! assert_eq!(round_to_useful_fraction(1.24), 1.25);
//! assert_eq!(format_quantity(1.5), "1 ½");
//! assert_eq!(format_quantity(1.45), "1.45");
//! ```

/// Fractional remainders below this are dropped.
const WHOLE_THRESHOLD: f64 = 0.05;

/// How far a remainder may sit from a candidate fraction, relative to
/// the candidate's size, and still snap to it.
///
/// Scaling by the candidate keeps `1.45` as `1.45` rather than snapping
/// it to ½. The window around ⅓ is correspondingly narrow: `1.30` stays
/// `1.3` instead of becoming `1 ⅓`.
const RELATIVE_TOLERANCE: f64 = 0.08;

/// Equality slack when matching an already-rounded fraction to a glyph.
const GLYPH_EPSILON: f64 = 1e-9;

/// Candidate fractions in ascending order, with their display glyphs.
const FRACTIONS: &[(f64, &str)] = &[
    (0.25, "¼"),
    (0.33, "⅓"),
    (0.5, "½"),
    (0.66, "⅔"),
    (0.75, "¾"),
];

/// Rounds a value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Snaps a quantity to the nearest useful kitchen fraction.
///
/// - Remainders under `0.05` collapse to the whole number.
/// - Otherwise the closest of ¼, ⅓, ½, ⅔, ¾ is chosen (ties go to the
///   smaller fraction) and used if the remainder is within 8% of it.
/// - Failing that the value is kept, rounded to two decimals.
pub fn round_to_useful_fraction(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let whole = value.trunc();
    let remainder = value - whole;

    if remainder < WHOLE_THRESHOLD {
        return whole;
    }

    let mut closest = FRACTIONS[0].0;
    let mut min_diff = f64::INFINITY;
    for &(candidate, _) in FRACTIONS {
        let diff = (remainder - candidate).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = candidate;
        }
    }

    if min_diff <= closest * RELATIVE_TOLERANCE {
        whole + closest
    } else {
        round2(value)
    }
}

/// Renders a quantity for display, using fraction glyphs where possible.
///
/// `0.5` becomes `"½"`, `1.5` becomes `"1 ½"`, whole numbers print without
/// decimals and anything else prints as its rounded decimal.
pub fn format_quantity(value: f64) -> String {
    let rounded = round_to_useful_fraction(value);
    let whole = rounded.trunc();
    let fraction = rounded - whole;

    if fraction == 0.0 {
        return format!("{whole}");
    }

    let glyph = FRACTIONS
        .iter()
        .find(|(candidate, _)| (fraction - candidate).abs() < GLYPH_EPSILON)
        .map(|(_, glyph)| *glyph);

    match glyph {
        Some(glyph) if whole > 0.0 => format!("{whole} {glyph}"),
        Some(glyph) => glyph.to_string(),
        None => format!("{rounded}"),
    }
}
