use serde::Serialize;

use crate::{
    catalog::{stop::Stop, tour::Tour},
    compose::stop_range::build_stop_ranges,
    error::ItineraryError,
};

/// Provenance of a merged range: which tour contributed it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    tour_id: String,
    line_key: String,
}

impl Origin {
    pub fn of_tour(tour: &Tour) -> Origin {
        Origin {
            tour_id: tour.external_id().to_owned(),
            line_key: tour.line_key().to_owned(),
        }
    }

    pub fn tour_id(&self) -> &str {
        &self.tour_id
    }

    pub fn line_key(&self) -> &str {
        &self.line_key
    }
}

/// A [`crate::compose::stop_range::StopRange`] renumbered into the merged
/// itinerary and tagged with its origin tour.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MergedRange {
    stop: Stop,
    origin: Origin,
    start_day: usize,
    end_day: usize,
}

impl MergedRange {
    pub fn new(stop: Stop, origin: Origin, start_day: usize, end_day: usize) -> Self {
        debug_assert!(start_day <= end_day);
        MergedRange {
            stop,
            origin,
            start_day,
            end_day,
        }
    }

    pub fn stop(&self) -> &Stop {
        &self.stop
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn start_day(&self) -> usize {
        self.start_day
    }

    pub fn end_day(&self) -> usize {
        self.end_day
    }

    pub fn day_count(&self) -> usize {
        self.end_day - self.start_day + 1
    }

    pub fn covers(&self, day: usize) -> bool {
        self.start_day <= day && day <= self.end_day
    }
}

/// Request to splice a second tour into the base tour after a chosen day.
pub struct SpliceRequest<'a> {
    insert_tour: &'a Tour,
    insert_after_day: usize,
}

impl<'a> SpliceRequest<'a> {
    pub fn new(insert_tour: &'a Tour, insert_after_day: usize) -> Self {
        SpliceRequest {
            insert_tour,
            insert_after_day,
        }
    }

    pub fn insert_tour(&self) -> &Tour {
        self.insert_tour
    }

    pub fn insert_after_day(&self) -> usize {
        self.insert_after_day
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct MergedItinerary {
    ranges: Vec<MergedRange>,
    total_days: usize,
}

impl MergedItinerary {
    /// Assembles an itinerary from already-built ranges. Intended for hosts
    /// that need to rehydrate derived state; `build_merged_itinerary` is the
    /// normal entry point and the only one that upholds the partition
    /// invariant by construction.
    pub fn from_parts(ranges: Vec<MergedRange>, total_days: usize) -> Self {
        MergedItinerary { ranges, total_days }
    }

    pub fn ranges(&self) -> &[MergedRange] {
        &self.ranges
    }

    pub fn total_days(&self) -> usize {
        self.total_days
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn range_covering(&self, day: usize) -> Option<&MergedRange> {
        self.ranges.iter().find(|range| range.covers(day))
    }
}

// A merged piece before renumbering: the stop, its provenance and how many
// days it keeps.
struct Piece {
    stop: Stop,
    origin: Origin,
    day_count: usize,
}

/// Builds the day-by-day itinerary for the base tour, optionally splicing a
/// second tour into it after `insert_after_day`.
///
/// Ranges that end on or before the splice day keep their indices; ranges
/// past it shift forward by the inserted tour's day count. A range the
/// splice day lands inside is split at the boundary, except when it is the
/// base tour's final range: the final stop is never split and trails the
/// inserted tour whole.
pub fn build_merged_itinerary(
    base: &Tour,
    splice: Option<&SpliceRequest>,
) -> Result<MergedItinerary, ItineraryError> {
    let base_total_days = base.total_days();
    let base_ranges = build_stop_ranges(base.stops(), base_total_days);
    let base_origin = Origin::of_tour(base);

    let Some(splice) = splice else {
        let ranges = base_ranges
            .into_iter()
            .map(|range| {
                let (start_day, end_day) = (range.start_day(), range.end_day());
                MergedRange::new(range.into_stop(), base_origin.clone(), start_day, end_day)
            })
            .collect();

        return Ok(MergedItinerary {
            ranges,
            total_days: base_total_days,
        });
    };

    let day = splice.insert_after_day;
    if day >= base_total_days {
        return Err(ItineraryError::InvalidSpliceDay {
            insert_after_day: day,
            base_total_days,
        });
    }

    let insert_total_days = splice.insert_tour.total_days();
    let insert_ranges = build_stop_ranges(splice.insert_tour.stops(), insert_total_days);
    let insert_origin = Origin::of_tour(splice.insert_tour);

    let mut pieces = Vec::with_capacity(base_ranges.len() + insert_ranges.len() + 1);
    let mut after = Vec::new();

    let last_index = base_ranges.len().saturating_sub(1);

    for (index, range) in base_ranges.into_iter().enumerate() {
        let day_count = range.day_count();
        let (start_day, end_day) = (range.start_day(), range.end_day());

        if index == last_index && range.covers(day) {
            // The final stop is never split; it trails the insert whole.
            after.push(Piece {
                stop: range.into_stop(),
                origin: base_origin.clone(),
                day_count,
            });
        } else if end_day <= day {
            pieces.push(Piece {
                stop: range.into_stop(),
                origin: base_origin.clone(),
                day_count,
            });
        } else if start_day > day {
            after.push(Piece {
                stop: range.into_stop(),
                origin: base_origin.clone(),
                day_count,
            });
        } else {
            // Split at the splice day; the tail rejoins after the insert.
            pieces.push(Piece {
                stop: range.stop().clone(),
                origin: base_origin.clone(),
                day_count: day - start_day + 1,
            });
            after.push(Piece {
                stop: range.into_stop(),
                origin: base_origin.clone(),
                day_count: end_day - day,
            });
        }
    }

    pieces.extend(insert_ranges.into_iter().map(|range| {
        let day_count = range.day_count();
        Piece {
            stop: range.into_stop(),
            origin: insert_origin.clone(),
            day_count,
        }
    }));
    pieces.extend(after);

    // Renumbering by piece length keeps the partition gap- and overlap-free.
    let mut ranges = Vec::with_capacity(pieces.len());
    let mut next_day = 0;
    for piece in pieces {
        ranges.push(MergedRange::new(
            piece.stop,
            piece.origin,
            next_day,
            next_day + piece.day_count - 1,
        ));
        next_day += piece.day_count;
    }

    Ok(MergedItinerary {
        ranges,
        total_days: base_total_days + insert_total_days,
    })
}
