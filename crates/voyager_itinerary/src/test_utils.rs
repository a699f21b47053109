use crate::catalog::{
    stop::{Stop, StopBuilder},
    tour::{Tour, TourBuilder},
};

pub fn stop(city: &str, dwell_days: i64) -> Stop {
    let mut builder = StopBuilder::default();
    builder.set_city(city.to_owned());
    builder.set_dwell_days(dwell_days);
    builder.build()
}

pub fn tour(external_id: &str, line_key: &str, stops: Vec<Stop>, total_days: usize) -> Tour {
    let mut builder = TourBuilder::default();
    builder.set_external_id(external_id.to_owned());
    builder.set_title(format!("{external_id} tour"));
    builder.set_line_key(line_key.to_owned());
    builder.set_stops(stops);
    builder.set_total_days(total_days);
    builder.build()
}

/// 3 stops, dwell days [2, 3, 2], 7 days total.
pub fn base_tour() -> Tour {
    tour(
        "base",
        "brand-a",
        vec![stop("A", 2), stop("B", 3), stop("C", 2)],
        7,
    )
}

/// 2 stops, dwell days [1, 1], 2 days total.
pub fn insert_tour() -> Tour {
    tour("insert", "brand-b", vec![stop("X", 1), stop("Y", 1)], 2)
}
