//! Process-wide store owning one collection per record type.

use std::sync::Arc;

use super::store::RecordStore;
use super::types::{CarbonEmission, DeforestationImpact, WaterWastage};

/// The three record collections, shared with the HTTP layer.
///
/// Cloning is cheap: each collection sits behind its own `Arc`.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentStore {
    pub carbon_emissions: Arc<RecordStore<CarbonEmission>>,
    pub water_wastage: Arc<RecordStore<WaterWastage>>,
    pub deforestation_impact: Arc<RecordStore<DeforestationImpact>>,
}

impl EnvironmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}
