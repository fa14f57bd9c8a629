mod move_ordering;
mod searching;

pub use move_ordering::{order_candidates, Killers, PRIORITY_FLOOR, WIN_PRIORITY};
pub use searching::{Search, SearchOptions, SearchResult};
