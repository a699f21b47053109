use tracing::warn;

use crate::{catalog::stop::Stop, compose::splice::MergedItinerary};

/// Resolves the canonical stop for every day of the itinerary.
///
/// Under the partition invariant every day has exactly one covering range.
/// Catalog data that violates it leaves holes; a hole inherits the nearest
/// preceding resolved stop, and leading holes take the first stop that
/// resolves anywhere, so the output is fully populated whenever any day
/// resolves at all.
pub fn resolve_day_stops(itinerary: &MergedItinerary) -> Vec<Stop> {
    let total_days = itinerary.total_days();
    if total_days == 0 {
        return Vec::new();
    }

    let mut resolved: Vec<Option<&Stop>> = vec![None; total_days];
    for range in itinerary.ranges() {
        if range.start_day() >= total_days {
            continue;
        }

        let end_day = range.end_day().min(total_days - 1);
        for slot in resolved
            .iter_mut()
            .take(end_day + 1)
            .skip(range.start_day())
        {
            if slot.is_none() {
                *slot = Some(range.stop());
            }
        }
    }

    let Some(first_resolvable) = resolved.iter().flatten().next().copied() else {
        warn!(total_days, "no itinerary day resolves to a stop");
        return Vec::new();
    };

    let mut holes = 0usize;
    let mut previous = first_resolvable;
    let mut day_stops = Vec::with_capacity(total_days);

    for slot in resolved {
        match slot {
            Some(current) => {
                previous = current;
                day_stops.push(current.clone());
            }
            None => {
                holes += 1;
                day_stops.push(previous.clone());
            }
        }
    }

    if holes > 0 {
        warn!(
            holes,
            total_days, "itinerary days without a covering range inherited a neighbouring stop"
        );
    }

    day_stops
}
