use serde::{Deserialize, Serialize};

/// A destination on a tour, as supplied by the catalog.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Stop {
    city: String,
    country: Option<String>,
    dwell_days: Option<i64>,
    is_start: bool,
    is_end: bool,
}

impl Stop {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Days spent at this stop. Absent or non-positive catalog values count as one day.
    pub fn dwell_days(&self) -> usize {
        match self.dwell_days {
            Some(days) if days > 0 => days as usize,
            _ => 1,
        }
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }
}

#[derive(Default)]
pub struct StopBuilder {
    city: Option<String>,
    country: Option<String>,
    dwell_days: Option<i64>,
    is_start: bool,
    is_end: bool,
}

impl StopBuilder {
    pub fn set_city(&mut self, city: String) -> &mut StopBuilder {
        self.city = Some(city);
        self
    }

    pub fn set_country(&mut self, country: String) -> &mut StopBuilder {
        self.country = Some(country);
        self
    }

    pub fn set_dwell_days(&mut self, dwell_days: i64) -> &mut StopBuilder {
        self.dwell_days = Some(dwell_days);
        self
    }

    pub fn set_is_start(&mut self, is_start: bool) -> &mut StopBuilder {
        self.is_start = is_start;
        self
    }

    pub fn set_is_end(&mut self, is_end: bool) -> &mut StopBuilder {
        self.is_end = is_end;
        self
    }

    pub fn build(self) -> Stop {
        Stop {
            city: self.city.expect("City is required"),
            country: self.country,
            dwell_days: self.dwell_days,
            is_start: self.is_start,
            is_end: self.is_end,
        }
    }
}
