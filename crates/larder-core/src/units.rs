//! Unit conversion and normalization.
//!
//! Two immutable tables live here:
//!
//! - The [`ConversionTable`], a set of direct `(from, to) -> factor` pairs
//!   such that `quantity_in(to) = quantity_in(from) * factor`. Only pairs
//!   listed explicitly are known; nothing is chained through an
//!   intermediate unit.
//! - The base-unit table used by consolidation, which maps every known unit
//!   onto one canonical unit of its family. Units outside it are their own
//!   base and never merge with anything else.
//!
//! Both are built once on first use and shared by reference.
//!
//! # Example
//!
//! ```rust
//! use larder_core::units::{convert, to_base_unit};
//!
//! assert_eq!(convert(1.0, "cup", "ml"), 240.0);
//! // Unknown pairs pass the quantity through unchanged.
//! assert_eq!(convert(5.0, "cup", "bogus"), 5.0);
//!
//! let (qty, unit) = to_base_unit(3.0, "tsp");
//! assert_eq!(unit, "tbsp");
//! assert!((qty - 1.0).abs() < 1e-9);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};

// ============================================================================
// Table data
// ============================================================================

/// Direct conversion pairs.
const CONVERSIONS: &[(&str, &str, f64)] = &[
    // Volume
    ("cup", "ml", 240.0),
    ("cup", "l", 0.24),
    ("cup", "tbsp", 16.0),
    ("cup", "tsp", 48.0),
    ("cup", "fl oz", 8.0),
    ("tbsp", "ml", 15.0),
    ("tbsp", "tsp", 3.0),
    ("tbsp", "cup", 1.0 / 16.0),
    ("tsp", "ml", 5.0),
    ("tsp", "tbsp", 1.0 / 3.0),
    ("tsp", "cup", 1.0 / 48.0),
    ("ml", "l", 0.001),
    ("ml", "cup", 1.0 / 240.0),
    ("ml", "tbsp", 1.0 / 15.0),
    ("ml", "tsp", 1.0 / 5.0),
    ("l", "ml", 1000.0),
    ("l", "cup", 4.167),
    // Weight
    ("kg", "g", 1000.0),
    ("kg", "lb", 2.20462),
    ("kg", "oz", 35.274),
    ("g", "kg", 0.001),
    ("g", "oz", 0.035274),
    ("g", "lb", 0.00220462),
    ("lb", "kg", 0.453592),
    ("lb", "g", 453.592),
    ("lb", "oz", 16.0),
    ("oz", "g", 28.3495),
    ("oz", "lb", 1.0 / 16.0),
    ("oz", "kg", 0.0283495),
];

/// Unit -> (base unit, factor into that base).
const BASE_UNITS: &[(&str, &str, f64)] = &[
    // Small volumes collapse onto tablespoons
    ("tsp", "tbsp", 1.0 / 3.0),
    ("tbsp", "tbsp", 1.0),
    // Larger volumes collapse onto cups
    ("cup", "cup", 1.0),
    ("fl oz", "cup", 1.0 / 8.0),
    ("ml", "cup", 1.0 / 240.0),
    ("l", "cup", 4.167),
    // Weight collapses onto pounds; kilograms stay metric
    ("oz", "lb", 1.0 / 16.0),
    ("lb", "lb", 1.0),
    ("g", "lb", 0.00220462),
    ("kg", "kg", 1.0),
    // Count and unmeasurable units are their own base
    ("piece", "piece", 1.0),
    ("pinch", "pinch", 1.0),
    ("dash", "dash", 1.0),
    ("to taste", "to taste", 1.0),
];

/// Case-sensitive tablespoon abbreviation.
const TABLESPOON_ABBREVIATION: &str = "T";

/// Common spellings accepted in recipe data, mapped onto table keys.
const ALIASES: &[(&str, &str)] = &[
    ("cups", "cup"),
    ("c", "cup"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("tbs", "tbsp"),
    ("tbl", "tbsp"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    ("fluid ounce", "fl oz"),
    ("fluid ounces", "fl oz"),
    ("gram", "g"),
    ("grams", "g"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("lbs", "lb"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("pieces", "piece"),
    ("pcs", "piece"),
    ("pc", "piece"),
    ("pinches", "pinch"),
    ("dashes", "dash"),
];

// ============================================================================
// ConversionTable
// ============================================================================

/// Immutable lookup of direct unit conversion factors.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    factors: HashMap<&'static str, HashMap<&'static str, f64>>,
}

static STANDARD_TABLE: LazyLock<ConversionTable> =
    LazyLock::new(|| ConversionTable::from_pairs(CONVERSIONS));

impl ConversionTable {
    /// Builds a table from `(from, to, factor)` triples.
    pub fn from_pairs(pairs: &[(&'static str, &'static str, f64)]) -> Self {
        let mut factors: HashMap<&'static str, HashMap<&'static str, f64>> = HashMap::new();
        for &(from, to, factor) in pairs {
            factors.entry(from).or_default().insert(to, factor);
        }
        Self { factors }
    }

    /// The shared kitchen conversion table.
    pub fn standard() -> &'static ConversionTable {
        &STANDARD_TABLE
    }

    /// Returns the direct factor from `from` to `to`, if one is listed.
    pub fn factor(&self, from: &str, to: &str) -> Option<f64> {
        self.factors.get(from)?.get(to).copied()
    }

    /// Converts a quantity, failing when no direct factor exists.
    ///
    /// Identical units always succeed and return `quantity` untouched.
    /// Unit spellings are resolved with [`canonical_unit`] before lookup.
    pub fn try_convert(&self, quantity: f64, from: &str, to: &str) -> Result<f64> {
        if from == to {
            return Ok(quantity);
        }
        let (canonical_from, canonical_to) = (canonical_unit(from), canonical_unit(to));
        if canonical_from == canonical_to {
            return Ok(quantity);
        }
        self.factor(&canonical_from, &canonical_to)
            .map(|factor| quantity * factor)
            .ok_or_else(|| Error::unsupported_conversion(from, to))
    }

    /// Converts a quantity, passing it through unchanged on unknown pairs.
    ///
    /// An unknown pair is logged as a warning and never aborts the caller.
    pub fn convert(&self, quantity: f64, from: &str, to: &str) -> f64 {
        match self.try_convert(quantity, from, to) {
            Ok(converted) => converted,
            Err(e) => {
                tracing::warn!(from = %from, to = %to, error = %e, "Leaving quantity unconverted");
                quantity
            }
        }
    }

    /// Number of direct pairs in the table.
    pub fn len(&self) -> usize {
        self.factors.values().map(HashMap::len).sum()
    }

    /// Returns `true` if the table has no pairs.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// Converts using the standard table. See [`ConversionTable::convert`].
pub fn convert(quantity: f64, from: &str, to: &str) -> f64 {
    ConversionTable::standard().convert(quantity, from, to)
}

/// Converts using the standard table. See [`ConversionTable::try_convert`].
pub fn try_convert(quantity: f64, from: &str, to: &str) -> Result<f64> {
    ConversionTable::standard().try_convert(quantity, from, to)
}

// ============================================================================
// Base units
// ============================================================================

static BASE_TABLE: LazyLock<HashMap<&'static str, (&'static str, f64)>> = LazyLock::new(|| {
    BASE_UNITS
        .iter()
        .map(|&(unit, base, factor)| (unit, (base, factor)))
        .collect()
});

static ALIAS_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Normalizes a unit string onto the key used by the tables.
///
/// Trims, lowercases and resolves common spellings ("tablespoons" becomes
/// "tbsp"). A bare capital `T` is the cookbook tablespoon and is matched
/// before lowercasing, since lowercase `t` is ambiguous. Anything
/// unrecognized comes back trimmed and lowercased.
pub fn canonical_unit(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == TABLESPOON_ABBREVIATION {
        return "tbsp".to_string();
    }
    let lowered = trimmed.to_lowercase();
    match ALIAS_TABLE.get(lowered.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lowered,
    }
}

/// Expresses a quantity in the canonical base unit of its family.
///
/// Units missing from the base table pass through with themselves as the
/// base, so unknown units never merge with anything else.
pub fn to_base_unit(quantity: f64, unit: &str) -> (f64, String) {
    let unit = canonical_unit(unit);
    match BASE_TABLE.get(unit.as_str()) {
        Some(&(base, factor)) => (quantity * factor, base.to_string()),
        None => (quantity, unit),
    }
}

// ============================================================================
// Unit families
// ============================================================================

/// Family a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    /// Measured by volume (cup, tbsp, ml, ...).
    Volume,
    /// Measured by weight (g, lb, ...).
    Weight,
    /// Counted items.
    Count,
    /// Pinch, dash, to taste.
    Unconvertible,
    /// Not in the vocabulary.
    Unknown,
}

impl UnitFamily {
    /// Lowercase family name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Weight => "weight",
            Self::Count => "count",
            Self::Unconvertible => "unconvertible",
            Self::Unknown => "unknown",
        }
    }
}

/// Classifies a unit (after canonicalization) into its family.
pub fn unit_family(unit: &str) -> UnitFamily {
    match canonical_unit(unit).as_str() {
        "cup" | "tbsp" | "tsp" | "ml" | "l" | "fl oz" => UnitFamily::Volume,
        "g" | "kg" | "lb" | "oz" => UnitFamily::Weight,
        "piece" => UnitFamily::Count,
        "pinch" | "dash" | "to taste" => UnitFamily::Unconvertible,
        _ => UnitFamily::Unknown,
    }
}
