use serde::Serialize;

/// Join/leave day selection over a merged itinerary.
///
/// Clicking a day always moves the boundary nearest to it: a selection
/// grows from either end and collapses back to a single day when clicked
/// inside, which is what a drag-to-extend interaction expects.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentSelection {
    #[default]
    Empty,
    Range {
        join_day: usize,
        leave_day: usize,
    },
}

impl SegmentSelection {
    pub fn select_day(self, day: usize) -> SegmentSelection {
        match self {
            SegmentSelection::Empty => SegmentSelection::Range {
                join_day: day,
                leave_day: day,
            },
            SegmentSelection::Range { join_day, leave_day } => {
                if day < join_day {
                    SegmentSelection::Range {
                        join_day: day,
                        leave_day,
                    }
                } else if day > leave_day {
                    SegmentSelection::Range {
                        join_day,
                        leave_day: day,
                    }
                } else {
                    // A click inside the selection restarts it at that day
                    SegmentSelection::Range {
                        join_day: day,
                        leave_day: day,
                    }
                }
            }
        }
    }

    pub fn reset(self) -> SegmentSelection {
        SegmentSelection::Empty
    }

    pub fn contains(&self, day: usize) -> bool {
        match self {
            SegmentSelection::Empty => false,
            SegmentSelection::Range { join_day, leave_day } => {
                *join_day <= day && day <= *leave_day
            }
        }
    }

    pub fn day_span(&self) -> Option<(usize, usize)> {
        match self {
            SegmentSelection::Empty => None,
            SegmentSelection::Range { join_day, leave_day } => Some((*join_day, *leave_day)),
        }
    }

    pub fn day_count(&self) -> usize {
        match self {
            SegmentSelection::Empty => 0,
            SegmentSelection::Range { join_day, leave_day } => leave_day - join_day + 1,
        }
    }
}
