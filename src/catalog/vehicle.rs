//! Vehicle records and the immutable catalog snapshot.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::sync::Arc;

/// A single vehicle in the catalog.
///
/// Text fields are optional so that incomplete records never make a filter
/// panic: an absent value simply never matches a non-empty filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Price in whole currency units.
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seating_capacity: Option<i64>,

    #[serde(default)]
    pub features: Vec<String>,

    /// Fields the engines don't interpret (id, year, image, ...), echoed back as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Vehicle {
    /// Create a vehicle with the fields the engines look at.
    pub fn new(make: impl Into<String>, model: impl Into<String>, price: f64) -> Self {
        Self {
            make: Some(make.into()),
            model: Some(model.into()),
            price,
            fuel_type: None,
            seating_capacity: None,
            features: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    pub fn with_seating_capacity(mut self, seats: i64) -> Self {
        self.seating_capacity = Some(seats);
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole prices are written as JSON integers, so `20000` leaves as `20000`.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Read-only, ordered collection of vehicles shared by every request.
///
/// Cloning is a pointer copy; the records themselves are never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vehicles: Arc<[Vehicle]>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: vehicles.into(),
        }
    }

    /// Vehicles in catalog order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
