//! Query input, its normalized form, and the query result.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::collections::HashSet;

use crate::catalog::Vehicle;
use crate::query::filter::CaseInsensitiveSet;

/// Page used when the request has none or it doesn't parse.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request has none or it doesn't parse.
pub const DEFAULT_LIMIT: i64 = 10;

/// Query body as it arrives over the wire.
///
/// Every field is optional. `page`, `limit` and `sort` are kept as raw JSON
/// values so clients can send numbers or numeric strings; [`Query::from`]
/// applies the defaulting rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<PriceRange>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<Vec<String>>,

    /// Integral floats such as `5.0` count as the integer they equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seating_capacity: Option<Vec<Number>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,

    /// `None` when the field is absent, `Some(Value::Null)` for an explicit null.
    #[serde(
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Inclusive price range. A missing bound never matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// True if `min <= price <= max`. Half-open ranges match nothing.
    pub fn contains(&self, price: f64) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= price && price <= max,
            _ => false,
        }
    }
}

/// Price ordering applied before filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// `sort: 1`, also used when `sort` is absent.
    #[default]
    Ascending,
    /// `sort: -1`.
    Descending,
    /// Any other value: keep catalog order.
    Unsorted,
}

impl SortOrder {
    /// Interpret the wire value. Only the numbers 1 and -1 select an order.
    pub fn from_wire(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return Self::Ascending;
        };
        match value.as_f64() {
            Some(n) if n == 1.0 => Self::Ascending,
            Some(n) if n == -1.0 => Self::Descending,
            _ => Self::Unsorted,
        }
    }

    /// Wire value for this order.
    pub fn to_wire(self) -> Value {
        match self {
            Self::Ascending => Value::from(1),
            Self::Descending => Value::from(-1),
            Self::Unsorted => Value::from(0),
        }
    }
}

/// Parse a page/limit value.
///
/// Numbers are truncated toward zero. Strings are parsed by their leading
/// integer prefix (`" 3"`, `"2abc"`). Anything else yields `default`.
pub fn parse_integer_or(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => parse_leading_integer(s).unwrap_or(default),
        _ => default,
    }
}

/// Seat count as an integer, if the number is a whole value.
fn integral(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

fn parse_leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Query after defaulting and case normalization, ready for evaluation.
#[derive(Debug, Clone)]
pub struct Query {
    pub brands: CaseInsensitiveSet,
    pub fuel_types: CaseInsensitiveSet,
    pub seating_capacity: HashSet<i64>,
    pub prices: Vec<PriceRange>,
    /// Requested page, echoed back unchanged.
    pub page: i64,
    /// Requested page size, as parsed. See [`Query::effective_limit`].
    pub limit: i64,
    pub sort: SortOrder,
}

impl Query {
    /// Page size used for slicing and page counts, never below 1.
    pub fn effective_limit(&self) -> i64 {
        self.limit.max(1)
    }

    /// True if the vehicle passes every non-empty filter category.
    pub fn admits(&self, vehicle: &Vehicle) -> bool {
        self.brands.admits(vehicle.make.as_deref())
            && self.fuel_types.admits(vehicle.fuel_type.as_deref())
            && (self.seating_capacity.is_empty()
                || vehicle
                    .seating_capacity
                    .is_some_and(|seats| self.seating_capacity.contains(&seats)))
            && (self.prices.is_empty() || self.prices.iter().any(|r| r.contains(vehicle.price)))
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::from(&QueryInput::default())
    }
}

impl From<&QueryInput> for Query {
    fn from(input: &QueryInput) -> Self {
        Self {
            brands: input.brands.iter().flatten().collect(),
            fuel_types: input.fuel_type.iter().flatten().collect(),
            seating_capacity: input.seating_capacity.iter().flatten().filter_map(integral).collect(),
            prices: input.prices.clone().unwrap_or_default(),
            page: parse_integer_or(input.page.as_ref(), DEFAULT_PAGE),
            limit: parse_integer_or(input.limit.as_ref(), DEFAULT_LIMIT),
            sort: SortOrder::from_wire(input.sort.as_ref()),
        }
    }
}

impl From<QueryInput> for Query {
    fn from(input: QueryInput) -> Self {
        Self::from(&input)
    }
}

/// One page of filtered, sorted vehicles plus counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<'a> {
    /// Matches before pagination.
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: i64,
    pub items: Vec<&'a Vehicle>,
}
