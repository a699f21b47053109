use serde::Serialize;

use super::stop::Stop;

/// A multi-day tour record: an ordered stop sequence plus pricing fields.
///
/// `total_days` is the catalog's explicit day count and may exceed or fall
/// short of the sum of stop dwell days; range building reconciles the two.
#[derive(Serialize, Debug, Clone)]
pub struct Tour {
    external_id: String,
    title: String,
    line_key: String,
    stops: Vec<Stop>,
    total_days: Option<usize>,
    regular_per_person: Option<f64>,
    promo_per_person: Option<f64>,
    base_per_day: Option<f64>,
}

impl Tour {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Brand/line key, used as the origin colour key for grouping.
    pub fn line_key(&self) -> &str {
        &self.line_key
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn total_days(&self) -> usize {
        self.total_days.unwrap_or_else(|| self.dwell_day_sum())
    }

    pub fn dwell_day_sum(&self) -> usize {
        self.stops.iter().map(Stop::dwell_days).sum()
    }

    pub fn regular_per_person(&self) -> Option<f64> {
        self.regular_per_person
    }

    pub fn promo_per_person(&self) -> Option<f64> {
        self.promo_per_person
    }

    pub fn base_per_day(&self) -> Option<f64> {
        self.base_per_day
    }
}

#[derive(Default)]
pub struct TourBuilder {
    external_id: Option<String>,
    title: Option<String>,
    line_key: Option<String>,
    stops: Option<Vec<Stop>>,
    total_days: Option<usize>,
    regular_per_person: Option<f64>,
    promo_per_person: Option<f64>,
    base_per_day: Option<f64>,
}

impl TourBuilder {
    pub fn set_external_id(&mut self, external_id: String) -> &mut TourBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_title(&mut self, title: String) -> &mut TourBuilder {
        self.title = Some(title);
        self
    }

    pub fn set_line_key(&mut self, line_key: String) -> &mut TourBuilder {
        self.line_key = Some(line_key);
        self
    }

    pub fn set_stops(&mut self, stops: Vec<Stop>) -> &mut TourBuilder {
        self.stops = Some(stops);
        self
    }

    pub fn set_total_days(&mut self, total_days: usize) -> &mut TourBuilder {
        self.total_days = Some(total_days);
        self
    }

    pub fn set_regular_per_person(&mut self, price: f64) -> &mut TourBuilder {
        self.regular_per_person = Some(price);
        self
    }

    pub fn set_promo_per_person(&mut self, price: f64) -> &mut TourBuilder {
        self.promo_per_person = Some(price);
        self
    }

    pub fn set_base_per_day(&mut self, price: f64) -> &mut TourBuilder {
        self.base_per_day = Some(price);
        self
    }

    pub fn build(self) -> Tour {
        let external_id = self.external_id.expect("External ID is required");
        Tour {
            // Tours without a line fall back to their own id as colour key
            line_key: self.line_key.unwrap_or_else(|| external_id.clone()),
            external_id,
            title: self.title.expect("Title is required"),
            stops: self.stops.unwrap_or_default(),
            total_days: self.total_days,
            regular_per_person: self.regular_per_person,
            promo_per_person: self.promo_per_person,
            base_per_day: self.base_per_day,
        }
    }
}
