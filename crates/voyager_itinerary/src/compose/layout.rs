use serde::Serialize;

use crate::compose::splice::MergedItinerary;

/// Maximal run of contiguous days drawn from one origin tour.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Span {
    start_day: usize,
    end_day: usize,
    origin_tour_id: String,
    lane: u8,
}

impl Span {
    pub fn start_day(&self) -> usize {
        self.start_day
    }

    pub fn end_day(&self) -> usize {
        self.end_day
    }

    pub fn origin_tour_id(&self) -> &str {
        &self.origin_tour_id
    }

    pub fn lane(&self) -> u8 {
        self.lane
    }
}

/// Transition marker between two index-adjacent spans of differing origin.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
    after_span_index: usize,
    from_lane: u8,
    to_lane: u8,
}

impl Connector {
    pub fn after_span_index(&self) -> usize {
        self.after_span_index
    }

    pub fn from_lane(&self) -> u8 {
        self.from_lane
    }

    pub fn to_lane(&self) -> u8 {
        self.to_lane
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct SpanPlan {
    spans: Vec<Span>,
    connectors: Vec<Connector>,
}

impl SpanPlan {
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }
}

/// Groups the itinerary's ranges into alternating-lane spans.
///
/// A run extends while ranges keep the same origin tour and stay
/// day-contiguous; a day gap breaks the run even for the same origin, which
/// is the one way two adjacent spans can share an origin. Lanes alternate
/// strictly by span position, never by origin. Connectors mark transitions
/// between spans of differing origin only.
///
/// The output is purely symbolic; mapping lanes and day ranges onto actual
/// coordinates is the presentation layer's job.
pub fn plan_spans(itinerary: &MergedItinerary) -> SpanPlan {
    let mut spans: Vec<Span> = Vec::new();

    for range in itinerary.ranges() {
        match spans.last_mut() {
            Some(span)
                if span.origin_tour_id == range.origin().tour_id()
                    && span.end_day + 1 == range.start_day() =>
            {
                span.end_day = range.end_day();
            }
            _ => {
                let lane = (spans.len() % 2) as u8;
                spans.push(Span {
                    start_day: range.start_day(),
                    end_day: range.end_day(),
                    origin_tour_id: range.origin().tour_id().to_owned(),
                    lane,
                });
            }
        }
    }

    let connectors = spans
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].origin_tour_id != pair[1].origin_tour_id)
        .map(|(index, pair)| Connector {
            after_span_index: index,
            from_lane: pair[0].lane,
            to_lane: pair[1].lane,
        })
        .collect();

    SpanPlan { spans, connectors }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{
        compose::splice::{MergedRange, Origin, SpliceRequest, build_merged_itinerary},
        test_utils::{base_tour, insert_tour, stop},
    };

    fn span_days(plan: &SpanPlan) -> Vec<(&str, usize, usize, u8)> {
        plan.spans()
            .iter()
            .map(|span| {
                (
                    span.origin_tour_id(),
                    span.start_day(),
                    span.end_day(),
                    span.lane(),
                )
            })
            .collect()
    }

    #[test]
    fn test_unspliced_itinerary_is_a_single_span() {
        let base = base_tour();
        let itinerary = build_merged_itinerary(&base, None).unwrap();

        let plan = plan_spans(&itinerary);

        assert_eq!(span_days(&plan), vec![("base", 0, 6, 0)]);
        assert!(plan.connectors().is_empty());
    }

    #[test]
    fn test_splice_produces_three_alternating_spans() {
        let base = base_tour();
        let insert = insert_tour();
        let splice = SpliceRequest::new(&insert, 2);
        let itinerary = build_merged_itinerary(&base, Some(&splice)).unwrap();

        let plan = plan_spans(&itinerary);

        assert_eq!(
            span_days(&plan),
            vec![("base", 0, 2, 0), ("insert", 3, 4, 1), ("base", 5, 8, 0)]
        );

        assert_eq!(plan.connectors().len(), 2);
        assert_eq!(plan.connectors()[0].after_span_index(), 0);
        assert_eq!(plan.connectors()[0].from_lane(), 0);
        assert_eq!(plan.connectors()[0].to_lane(), 1);
        assert_eq!(plan.connectors()[1].after_span_index(), 1);
    }

    #[test]
    fn test_consecutive_spans_always_differ_in_lane() {
        let base = base_tour();
        let insert = insert_tour();

        for day in 0..base.total_days() {
            let splice = SpliceRequest::new(&insert, day);
            let itinerary = build_merged_itinerary(&base, Some(&splice)).unwrap();
            let plan = plan_spans(&itinerary);

            for pair in plan.spans().windows(2) {
                assert_ne!(pair[0].lane(), pair[1].lane());
            }
        }
    }

    #[test]
    fn test_day_gap_splits_a_same_origin_span_without_a_connector() {
        let origin = Origin::of_tour(&base_tour());
        // Day 2 is uncovered, so one origin yields two spans
        let itinerary = MergedItinerary::from_parts(
            vec![
                MergedRange::new(stop("A", 2), origin.clone(), 0, 1),
                MergedRange::new(stop("C", 2), origin, 3, 4),
            ],
            5,
        );

        let plan = plan_spans(&itinerary);

        assert_eq!(
            span_days(&plan),
            vec![("base", 0, 1, 0), ("base", 3, 4, 1)]
        );
        assert!(plan.connectors().is_empty());
    }

    #[test]
    fn test_connector_exists_iff_origins_differ() {
        let base = base_tour();
        let insert = insert_tour();
        let splice = SpliceRequest::new(&insert, 4);
        let itinerary = build_merged_itinerary(&base, Some(&splice)).unwrap();

        let plan = plan_spans(&itinerary);

        for (index, pair) in plan.spans().windows(2).enumerate() {
            let has_connector = plan
                .connectors()
                .iter()
                .any(|connector| connector.after_span_index() == index);

            assert_eq!(
                has_connector,
                pair[0].origin_tour_id() != pair[1].origin_tour_id()
            );
        }
    }

    #[test]
    fn test_empty_itinerary_yields_an_empty_plan() {
        let itinerary = MergedItinerary::from_parts(Vec::new(), 0);
        let plan = plan_spans(&itinerary);

        assert!(plan.spans().is_empty());
        assert!(plan.connectors().is_empty());
    }
}
