//! # Metric Calculators
//!
//! Pure functions deriving totals and estimates from raw record inputs.
//! No rounding, clamping or sign checks are applied: negative and zero
//! inputs flow through unchanged.

/// Metric tons of CO2 per kWh of electricity
pub const EMISSION_FACTOR_ENERGY: f64 = 0.000233;

/// Metric tons of CO2 per mile driven
pub const EMISSION_FACTOR_MILES: f64 = 0.000404;

/// Average shower flow, liters per minute
pub const SHOWER_LITERS_PER_MINUTE: f64 = 9.0;

/// Average dish-washing flow, liters per minute
pub const DISH_WASHING_LITERS_PER_MINUTE: f64 = 6.0;

/// Average flow for other uses, liters per minute
pub const OTHER_USAGE_LITERS_PER_MINUTE: f64 = 8.0;

/// Trees cut per kg of product
pub const TREES_PER_KG: f64 = 0.02;

/// Animals displaced per kg of product
pub const ANIMALS_PER_KG: f64 = 0.01;

/// Total emission in metric tons.
///
/// `other_sources` is already expressed in metric tons and is added as is.
pub fn total_emission(energy_usage_kwh: f64, miles_driven: f64, other_sources: f64) -> f64 {
    energy_usage_kwh * EMISSION_FACTOR_ENERGY + miles_driven * EMISSION_FACTOR_MILES + other_sources
}

/// Total water wastage in liters
pub fn total_wastage(shower_minutes: f64, dish_minutes: f64, other_minutes: f64) -> f64 {
    shower_minutes * SHOWER_LITERS_PER_MINUTE
        + dish_minutes * DISH_WASHING_LITERS_PER_MINUTE
        + other_minutes * OTHER_USAGE_LITERS_PER_MINUTE
}

/// Deforestation estimates for a product weight in kg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeforestationEstimate {
    pub trees_cut: f64,
    pub animals_displaced: f64,
}

/// Estimate trees cut and animals displaced for a product weight
pub fn deforestation_estimate(product_weight: f64) -> DeforestationEstimate {
    DeforestationEstimate {
        trees_cut: product_weight * TREES_PER_KG,
        animals_displaced: product_weight * ANIMALS_PER_KG,
    }
}
