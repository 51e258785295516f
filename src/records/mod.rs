//! # Records
//!
//! Typed environmental records, the metric calculators that fill in their
//! derived fields, and the in-memory stores that hold them.
//!
//! # Collections
//!
//! - Carbon emissions: `total_emission` in metric tons
//! - Water wastage: `total_wastage` in liters
//! - Deforestation impact: estimated trees cut and animals displaced

pub mod collections;
pub mod errors;
pub mod metrics;
pub mod store;
pub mod timestamp;
pub mod types;

pub use collections::EnvironmentStore;
pub use errors::{RecordError, RecordResult};
pub use store::RecordStore;
pub use timestamp::Timestamp;
pub use types::{CarbonEmission, DeforestationImpact, Record, WaterWastage};
