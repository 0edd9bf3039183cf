//! Filter, sort and paginate over the catalog.
//!
//! Order of operations is fixed: sort by price, then filter, then slice.
//! The sort is stable, so vehicles with equal prices keep catalog order and
//! filtering never reorders them.

use std::ops::Range;

use crate::catalog::{Catalog, Vehicle};
use crate::query::types::{Query, QueryResult, SortOrder};

/// Evaluate a query against a catalog snapshot.
///
/// Total for every `Query`: bad page or limit values produce an empty page,
/// never an error.
pub fn evaluate<'a>(catalog: &'a Catalog, query: &Query) -> QueryResult<'a> {
    let mut vehicles: Vec<&Vehicle> = catalog.vehicles().iter().collect();
    sort_by_price(&mut vehicles, query.sort);

    vehicles.retain(|vehicle| query.admits(vehicle));

    let total_items = vehicles.len();
    let limit = query.effective_limit();
    let total_pages = total_items.div_ceil(limit as usize);

    let range = page_range(query.page, limit, total_items);
    tracing::trace!(
        total_items,
        page = query.page,
        limit,
        start = range.start,
        end = range.end,
        "Query evaluated"
    );

    let items = vehicles.drain(range).collect();
    QueryResult {
        total_items,
        total_pages,
        current_page: query.page,
        items,
    }
}

fn sort_by_price(vehicles: &mut [&Vehicle], order: SortOrder) {
    match order {
        SortOrder::Ascending => vehicles.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Descending => vehicles.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Unsorted => {}
    }
}

/// `[(page-1)*limit, (page-1)*limit + limit)` clamped to `[0, len]`.
pub fn page_range(page: i64, limit: i64, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    let end = start.saturating_add(limit);
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let clamp = |index: i64| index.clamp(0, len) as usize;
    clamp(start)..clamp(end)
}
