use crate::districts::catalog::DISTRICTS;
use crate::models::District;

pub fn all_districts() -> &'static [District] {
    &DISTRICTS
}

/// The reference district (Dhaka, offset 0).
pub fn reference_district() -> &'static District {
    &DISTRICTS[0]
}

/// Look up a district by id. Unknown ids fall back to the reference
/// district rather than failing.
pub fn find_district(id: &str) -> &'static District {
    match DISTRICTS.iter().find(|d| d.id == id) {
        Some(d) => d,
        None => {
            log::debug!("Unknown district '{}', using {}", id, reference_district().id);
            reference_district()
        }
    }
}

/// Strict lookup for user input, where a typo should be reported.
pub fn lookup_district(id: &str) -> Option<&'static District> {
    let id = id.trim().to_lowercase();
    DISTRICTS.iter().find(|d| d.id == id)
}

/// Case-insensitive match on the English name, literal match on the
/// Bengali name. An empty query returns the whole catalog in catalog order.
pub fn search_districts(query: &str) -> Vec<&'static District> {
    let query = query.trim();
    if query.is_empty() {
        return DISTRICTS.iter().collect();
    }
    let needle = query.to_lowercase();
    DISTRICTS
        .iter()
        .filter(|d| d.name_en.to_lowercase().contains(&needle) || d.name_bn.contains(query))
        .collect()
}
