pub mod catalog;
pub mod registry;

pub use registry::{
    all_districts, find_district, lookup_district, reference_district, search_districts,
};
