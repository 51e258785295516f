//! Record types for the three tracked collections.
//!
//! Derived fields default to zero when absent from a request body and are
//! overwritten by [`Record::calculated`] before a record is stored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::{RecordError, RecordResult};
use super::metrics;
use super::timestamp::Timestamp;

/// A record held by a [`RecordStore`](super::RecordStore)
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human label used in not-found and deletion messages
    const LABEL: &'static str;

    /// Caller-supplied identifier
    fn id(&self) -> i64;

    /// Recompute every derived field from the raw inputs
    fn apply_metrics(&mut self);

    /// Derived field names paired with their current values
    fn derived_fields(&self) -> Vec<(&'static str, f64)>;

    /// Consume the record and return it with derived fields filled in
    fn with_metrics(mut self) -> Self {
        self.apply_metrics();
        self
    }

    /// Fill in derived fields, failing if any of them overflowed.
    ///
    /// A non-finite value has no JSON representation and would be rendered
    /// as `null`.
    fn calculated(self) -> RecordResult<Self> {
        let record = self.with_metrics();
        if let Some((field, _)) = record
            .derived_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(RecordError::NonFiniteMetric {
                label: Self::LABEL,
                field,
            });
        }
        Ok(record)
    }
}

/// Carbon emission record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonEmission {
    pub id: i64,
    pub timestamp: Timestamp,
    /// Kilowatt-hours
    pub energy_usage_kwh: f64,
    /// Miles
    pub miles_driven: f64,
    /// Metric tons
    pub other_sources: f64,
    /// Metric tons (derived)
    #[serde(default)]
    pub total_emission: f64,
}

impl Record for CarbonEmission {
    const LABEL: &'static str = "Emission";

    fn id(&self) -> i64 {
        self.id
    }

    fn apply_metrics(&mut self) {
        self.total_emission =
            metrics::total_emission(self.energy_usage_kwh, self.miles_driven, self.other_sources);
    }

    fn derived_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("total_emission", self.total_emission)]
    }
}

/// Water wastage record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterWastage {
    pub id: i64,
    pub timestamp: Timestamp,
    pub daily_shower_minutes: f64,
    pub daily_dish_washing_minutes: f64,
    pub daily_other_usage_minutes: f64,
    /// Liters (derived)
    #[serde(default)]
    pub total_wastage: f64,
}

impl Record for WaterWastage {
    const LABEL: &'static str = "Water wastage";

    fn id(&self) -> i64 {
        self.id
    }

    fn apply_metrics(&mut self) {
        self.total_wastage = metrics::total_wastage(
            self.daily_shower_minutes,
            self.daily_dish_washing_minutes,
            self.daily_other_usage_minutes,
        );
    }

    fn derived_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("total_wastage", self.total_wastage)]
    }
}

/// Deforestation impact record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeforestationImpact {
    pub id: i64,
    pub timestamp: Timestamp,
    /// Kilograms
    pub product_weight: f64,
    #[serde(default)]
    pub estimated_trees_cut: f64,
    #[serde(default)]
    pub estimated_animals_displaced: f64,
}

impl Record for DeforestationImpact {
    const LABEL: &'static str = "Deforestation impact";

    fn id(&self) -> i64 {
        self.id
    }

    fn apply_metrics(&mut self) {
        let estimate = metrics::deforestation_estimate(self.product_weight);
        self.estimated_trees_cut = estimate.trees_cut;
        self.estimated_animals_displaced = estimate.animals_displaced;
    }

    fn derived_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("estimated_trees_cut", self.estimated_trees_cut),
            ("estimated_animals_displaced", self.estimated_animals_displaced),
        ]
    }
}
