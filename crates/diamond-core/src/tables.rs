//! Static grade-to-multiplier tables.
//!
//! Four constant maps from grade string to price multiplier, initialized
//! once at first use and never mutated. Cut lookups are case-insensitive;
//! color, clarity, and certification lookups are exact matches.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Cut grade multipliers. Keys are lowercase.
pub static CUT_MULTIPLIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("excellent", 1.3),
        ("very-good", 1.2),
        ("good", 1.1),
        ("fair", 1.0),
        ("poor", 0.9),
    ])
});

/// Color grade multipliers, D (colorless) through J (near colorless).
pub static COLOR_MULTIPLIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("D", 1.3),
        ("E", 1.25),
        ("F", 1.2),
        ("G", 1.15),
        ("H", 1.1),
        ("I", 1.05),
        ("J", 1.0),
    ])
});

/// Clarity grade multipliers, FL (flawless) through SI2.
pub static CLARITY_MULTIPLIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("FL", 1.5),
        ("IF", 1.4),
        ("VVS1", 1.3),
        ("VVS2", 1.25),
        ("VS1", 1.2),
        ("VS2", 1.15),
        ("SI1", 1.1),
        ("SI2", 1.05),
    ])
});

/// Certification body multipliers.
pub static CERTIFICATION_MULTIPLIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("GIA", 1.2),
        ("AGS", 1.15),
        ("IGI", 1.1),
        ("HRD", 1.1),
        ("uncertified", 0.9),
    ])
});

/// Multiplier for a cut grade. Case-insensitive.
pub fn cut_multiplier(grade: &str) -> Option<f64> {
    CUT_MULTIPLIERS.get(grade.to_lowercase().as_str()).copied()
}

/// Multiplier for a color grade. Exact match.
pub fn color_multiplier(grade: &str) -> Option<f64> {
    COLOR_MULTIPLIERS.get(grade).copied()
}

/// Multiplier for a clarity grade. Exact match.
pub fn clarity_multiplier(grade: &str) -> Option<f64> {
    CLARITY_MULTIPLIERS.get(grade).copied()
}

/// Multiplier for a certification. Exact match.
pub fn certification_multiplier(certification: &str) -> Option<f64> {
    CERTIFICATION_MULTIPLIERS.get(certification).copied()
}
