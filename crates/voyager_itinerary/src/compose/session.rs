use jiff::civil::Date;
use serde::Serialize;

use crate::{
    catalog::{stop::Stop, tour::Tour},
    compose::{
        day_stops::resolve_day_stops,
        layout::{SpanPlan, plan_spans},
        place_index::{DayPlaces, per_day_places},
        pricing::{PriceQuote, price_quote},
        selection::SegmentSelection,
        splice::{MergedItinerary, SpliceRequest, build_merged_itinerary},
    },
    error::ItineraryError,
    schedule,
};

/// One user's customization session over a base tour.
///
/// Mutators only record state; [`TourCustomization::view`] recomputes every
/// derived structure from scratch, so the output can never go stale against
/// the inputs.
pub struct TourCustomization {
    base: Tour,
    insert: Option<(Tour, usize)>,
    selection: SegmentSelection,
    passengers: i64,
    departure: Option<Date>,
}

/// The full derived bundle a presentation layer needs to draw one session.
#[derive(Serialize, Debug, Clone)]
pub struct ItineraryView {
    pub itinerary: MergedItinerary,
    pub day_stops: Vec<Stop>,
    pub day_places: Vec<DayPlaces>,
    pub layout: SpanPlan,
    pub quote: PriceQuote,
    pub day_dates: Option<Vec<Date>>,
    pub selection: SegmentSelection,
}

impl TourCustomization {
    pub fn new(base: Tour) -> Self {
        TourCustomization {
            base,
            insert: None,
            selection: SegmentSelection::Empty,
            passengers: 1,
            departure: None,
        }
    }

    pub fn base(&self) -> &Tour {
        &self.base
    }

    pub fn selection(&self) -> SegmentSelection {
        self.selection
    }

    pub fn passengers(&self) -> i64 {
        self.passengers
    }

    /// Choosing a splice renumbers the merged days, so any day selection
    /// made against the old numbering is discarded.
    pub fn set_splice(&mut self, insert: Tour, insert_after_day: usize) {
        self.insert = Some((insert, insert_after_day));
        self.selection = self.selection.reset();
    }

    pub fn clear_splice(&mut self) {
        self.insert = None;
        self.selection = self.selection.reset();
    }

    pub fn click_day(&mut self, day: usize) {
        self.selection = self.selection.select_day(day);
    }

    pub fn reset_selection(&mut self) {
        self.selection = self.selection.reset();
    }

    pub fn set_passengers(&mut self, passengers: i64) {
        self.passengers = passengers;
    }

    pub fn set_departure(&mut self, departure: Date) {
        self.departure = Some(departure);
    }

    pub fn view(&self) -> Result<ItineraryView, ItineraryError> {
        let splice = self
            .insert
            .as_ref()
            .map(|(tour, day)| SpliceRequest::new(tour, *day));

        let itinerary = build_merged_itinerary(&self.base, splice.as_ref())?;
        let day_stops = resolve_day_stops(&itinerary);
        let day_places = per_day_places(&itinerary);
        let layout = plan_spans(&itinerary);
        let quote = price_quote(
            &self.base,
            self.insert.as_ref().map(|(tour, _)| tour),
            self.passengers,
        );
        let day_dates = self
            .departure
            .map(|departure| schedule::day_dates(departure, itinerary.total_days()));

        Ok(ItineraryView {
            itinerary,
            day_stops,
            day_places,
            layout,
            quote,
            day_dates,
            selection: self.selection,
        })
    }
}
