use serde::Serialize;

use crate::catalog::stop::Stop;

/// Contiguous run of days covered by one stop, inclusive 0-based bounds.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StopRange {
    stop: Stop,
    start_day: usize,
    end_day: usize,
}

impl StopRange {
    pub fn new(stop: Stop, start_day: usize, end_day: usize) -> Self {
        debug_assert!(start_day <= end_day);
        StopRange {
            stop,
            start_day,
            end_day,
        }
    }

    pub fn stop(&self) -> &Stop {
        &self.stop
    }

    pub fn into_stop(self) -> Stop {
        self.stop
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

/// Assigns contiguous day indices to an ordered stop sequence.
///
/// Each stop consumes its dwell days starting at day 0. Days the dwell sum
/// does not reach extend the final stop's range; stops the day count cannot
/// accommodate are dropped and the crossing range is clipped, so the output
/// partitions `[0, total_days - 1]` whenever any stop gets a range at all.
pub fn build_stop_ranges(stops: &[Stop], total_days: usize) -> Vec<StopRange> {
    if total_days == 0 || stops.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::with_capacity(stops.len());
    let mut next_day = 0;

    for stop in stops {
        if next_day >= total_days {
            break;
        }

        let end_day = (next_day + stop.dwell_days() - 1).min(total_days - 1);
        ranges.push(StopRange::new(stop.clone(), next_day, end_day));
        next_day = end_day + 1;
    }

    if let Some(last) = ranges.last_mut()
        && last.end_day < total_days - 1
    {
        last.end_day = total_days - 1;
    }

    ranges
}
