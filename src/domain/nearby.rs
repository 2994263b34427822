use crate::domain::weather::NearbyCity;

/// Positions in the 50-entry radius search that the dashboard shows. The
/// API orders results by distance, so these land on a ring of neighbours
/// rather than the searched city itself.
pub const DEFAULT_NEARBY_OFFSETS: [usize; 4] = [19, 24, 35, 38];

/// Size of the radius search the offsets above assume.
pub const NEARBY_SEARCH_COUNT: usize = 50;

/// Cities at `offsets`, in offset order. Offsets past the end are skipped.
#[must_use]
pub fn pick_nearby(cities: &[NearbyCity], offsets: &[usize]) -> Vec<NearbyCity> {
    offsets
        .iter()
        .filter_map(|&offset| {
            let city = cities.get(offset);
            if city.is_none() {
                tracing::warn!(offset, available = cities.len(), "nearby offset out of range");
            }
            city.cloned()
        })
        .collect()
}
