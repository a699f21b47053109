pub mod day_stops;
pub mod layout;
pub mod place_index;
pub mod pricing;
pub mod selection;
pub mod session;
pub mod splice;
pub mod stop_range;
