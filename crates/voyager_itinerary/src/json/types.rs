use jiff::civil::Date;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    catalog::{
        stop::{Stop, StopBuilder},
        tour::{Tour, TourBuilder},
    },
    compose::session::TourCustomization,
    error::ItineraryError,
};

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Stop")]
pub struct JsonStop {
    pub city: String,
    pub country: Option<String>,
    pub dwell_days: Option<i64>,
    pub is_start: Option<bool>,
    pub is_end: Option<bool>,
}

impl JsonStop {
    pub fn build_stop(&self) -> Stop {
        let mut builder = StopBuilder::default();
        builder.set_city(self.city.clone());
        if let Some(country) = &self.country {
            builder.set_country(country.clone());
        }
        if let Some(dwell_days) = self.dwell_days {
            builder.set_dwell_days(dwell_days);
        }
        builder.set_is_start(self.is_start.unwrap_or(false));
        builder.set_is_end(self.is_end.unwrap_or(false));
        builder.build()
    }
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Tour")]
pub struct JsonTour {
    pub id: String,
    pub title: String,
    pub line: Option<String>,
    pub stops: Vec<JsonStop>,
    pub total_days: Option<usize>,
    pub regular_per_person: Option<f64>,
    pub promo_per_person: Option<f64>,
    pub base_per_day: Option<f64>,
}

impl JsonTour {
    pub fn build_tour(&self) -> Tour {
        let mut builder = TourBuilder::default();
        builder.set_external_id(self.id.clone());
        builder.set_title(self.title.clone());
        if let Some(line) = &self.line {
            builder.set_line_key(line.clone());
        }
        builder.set_stops(self.stops.iter().map(JsonStop::build_stop).collect());
        if let Some(total_days) = self.total_days {
            builder.set_total_days(total_days);
        }
        if let Some(regular) = self.regular_per_person {
            builder.set_regular_per_person(regular);
        }
        if let Some(promo) = self.promo_per_person {
            builder.set_promo_per_person(promo);
        }
        if let Some(base_per_day) = self.base_per_day {
            builder.set_base_per_day(base_per_day);
        }
        builder.build()
    }
}

/// A full customization payload: the tour records plus one session's
/// splice/selection/passenger inputs.
#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "TourCustomization")]
pub struct JsonTourCustomization {
    pub tours: Vec<JsonTour>,
    pub base_tour_id: String,
    pub insert_tour_id: Option<String>,
    pub insert_after_day: Option<usize>,
    pub passengers: Option<i64>,
    pub departure: Option<Date>,
    pub clicked_days: Option<Vec<usize>>,
}

impl JsonTourCustomization {
    fn tour(&self, id: &str) -> Result<Tour, ItineraryError> {
        self.tours
            .iter()
            .find(|tour| tour.id == id)
            .map(JsonTour::build_tour)
            .ok_or_else(|| ItineraryError::UnknownTour(id.to_owned()))
    }

    pub fn build_session(&self) -> Result<TourCustomization, ItineraryError> {
        let base = self.tour(&self.base_tour_id)?;
        let mut session = TourCustomization::new(base);

        if let Some(insert_tour_id) = &self.insert_tour_id {
            let insert = self.tour(insert_tour_id)?;
            // A splice without an explicit day goes after the base tour's
            // last day
            let insert_after_day = self
                .insert_after_day
                .unwrap_or_else(|| session.base().total_days().saturating_sub(1));
            session.set_splice(insert, insert_after_day);
        }

        if let Some(passengers) = self.passengers {
            session.set_passengers(passengers);
        }

        if let Some(departure) = self.departure {
            session.set_departure(departure);
        }

        for &day in self.clicked_days.iter().flatten() {
            session.click_day(day);
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn payload() -> &'static str {
        r#"{
            "tours": [
                {
                    "id": "iberia-7",
                    "title": "Iberian Highlights",
                    "line": "brand-a",
                    "total_days": 7,
                    "regular_per_person": 1450.0,
                    "stops": [
                        { "city": "Lisbon", "country": "Portugal", "dwell_days": 2, "is_start": true },
                        { "city": "Sevilla", "country": "Spain", "dwell_days": 3 },
                        { "city": "Madrid", "country": "Spain", "dwell_days": 2, "is_end": true }
                    ]
                },
                {
                    "id": "morocco-2",
                    "title": "Morocco Detour",
                    "line": "brand-b",
                    "base_per_day": 110.0,
                    "stops": [
                        { "city": "Tangier", "dwell_days": 1 },
                        { "city": "Fes", "dwell_days": 1 }
                    ]
                }
            ],
            "base_tour_id": "iberia-7",
            "insert_tour_id": "morocco-2",
            "insert_after_day": 2,
            "passengers": 2,
            "departure": "2026-07-14",
            "clicked_days": [3, 5]
        }"#
    }

    #[test]
    fn test_build_session_from_payload() {
        let input: JsonTourCustomization = serde_json::from_str(payload()).unwrap();
        let session = input.build_session().unwrap();

        assert_eq!(session.base().external_id(), "iberia-7");
        assert_eq!(session.passengers(), 2);
        assert_eq!(session.selection().day_span(), Some((3, 5)));

        let view = session.view().unwrap();
        assert_eq!(view.itinerary.total_days(), 9);
        // Regular rate for the base, per-day rate extended for the insert
        assert_eq!(view.quote.total(), 2.0 * (1450.0 + 220.0));
    }

    #[test]
    fn test_tour_defaults() {
        let input: JsonTourCustomization = serde_json::from_str(payload()).unwrap();
        let insert = input.tour("morocco-2").unwrap();

        // No explicit total_days: the dwell sum applies
        assert_eq!(insert.total_days(), 2);
        assert_eq!(insert.line_key(), "brand-b");
    }

    #[test]
    fn test_unknown_tour_is_rejected() {
        let mut input: JsonTourCustomization = serde_json::from_str(payload()).unwrap();
        input.base_tour_id = String::from("atlantis-3");

        assert!(matches!(
            input.build_session(),
            Err(ItineraryError::UnknownTour(id)) if id == "atlantis-3"
        ));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_str::<JsonStop>(r#"{ "city": "Lisbon", "nights": 2 }"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_splice_without_a_day_goes_after_the_last_day() {
        let mut input: JsonTourCustomization = serde_json::from_str(payload()).unwrap();
        input.insert_after_day = None;

        let session = input.build_session().unwrap();
        let view = session.view().unwrap();

        // Day 6 lands in the base tour's final range, which trails the
        // insert whole
        let last = view.itinerary.ranges().last().unwrap();
        assert_eq!(last.stop().city(), "Madrid");
        assert_eq!(last.end_day(), 8);
    }
}
