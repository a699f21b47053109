use fxhash::FxHashSet;
use serde::Serialize;
use smallvec::SmallVec;

use crate::compose::splice::MergedItinerary;

/// One destination shown for a day, tagged with its origin line colour key.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceEntry {
    city: String,
    line_key: String,
}

impl PlaceEntry {
    pub fn new(city: String, line_key: String) -> Self {
        PlaceEntry { city, line_key }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn line_key(&self) -> &str {
        &self.line_key
    }
}

/// Almost every day has exactly one place; two only at a split boundary.
pub type DayPlaces = SmallVec<[PlaceEntry; 2]>;

/// Lists, per day, every destination whose range covers that day, in range
/// order and de-duplicated by city and line.
pub fn per_day_places(itinerary: &MergedItinerary) -> Vec<DayPlaces> {
    let mut days = Vec::with_capacity(itinerary.total_days());

    for day in 0..itinerary.total_days() {
        let mut entries = DayPlaces::new();
        let mut seen = FxHashSet::default();

        for range in itinerary.ranges().iter().filter(|range| range.covers(day)) {
            let entry = PlaceEntry::new(
                range.stop().city().to_owned(),
                range.origin().line_key().to_owned(),
            );

            if seen.insert(entry.clone()) {
                entries.push(entry);
            }
        }

        days.push(entries);
    }

    days
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{
        compose::splice::{MergedRange, Origin, SpliceRequest, build_merged_itinerary},
        test_utils::{base_tour, insert_tour, stop},
    };

    #[test]
    fn test_partitioned_days_have_a_single_entry() {
        let base = base_tour();
        let insert = insert_tour();
        let splice = SpliceRequest::new(&insert, 2);
        let itinerary = build_merged_itinerary(&base, Some(&splice)).unwrap();

        let places = per_day_places(&itinerary);

        assert_eq!(places.len(), 9);
        assert!(places.iter().all(|entries| entries.len() == 1));
        assert_eq!(places[3][0], PlaceEntry::new("X".into(), "brand-b".into()));
        assert_eq!(places[5][0], PlaceEntry::new("B".into(), "brand-a".into()));
    }

    #[test]
    fn test_overlapping_boundary_day_lists_both_places() {
        let base_origin = Origin::of_tour(&base_tour());
        let insert_origin = Origin::of_tour(&insert_tour());
        // Day 2 is covered by both B and X
        let itinerary = MergedItinerary::from_parts(
            vec![
                MergedRange::new(stop("B", 3), base_origin, 0, 2),
                MergedRange::new(stop("X", 1), insert_origin, 2, 3),
            ],
            4,
        );

        let places = per_day_places(&itinerary);

        assert_eq!(places[1].len(), 1);
        assert_eq!(places[2].len(), 2);
        assert_eq!(places[2][0].city(), "B");
        assert_eq!(places[2][1].city(), "X");
    }

    #[test]
    fn test_duplicate_city_and_line_collapse_to_one_entry() {
        let origin = Origin::of_tour(&base_tour());
        let itinerary = MergedItinerary::from_parts(
            vec![
                MergedRange::new(stop("B", 2), origin.clone(), 0, 1),
                MergedRange::new(stop("B", 2), origin, 1, 2),
            ],
            3,
        );

        let places = per_day_places(&itinerary);

        assert_eq!(places[1].len(), 1);
    }
}
