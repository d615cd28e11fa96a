pub mod filters;
pub mod sort;

pub use filters::{FilterSet, FilterUpdate, DEFAULT_PRICE_CEILING};
pub use sort::{sort_trips, SortKey};
