use serde::Serialize;

use crate::catalog::tour::Tour;

/// Per-person price of a single tour.
///
/// Exactly one tier applies: the regular rate, else the promotional rate,
/// else the per-day base extended over the tour's days, else zero. Tiers
/// are never summed.
pub fn per_person_price(tour: &Tour) -> f64 {
    if let Some(regular) = tour.regular_per_person() {
        regular
    } else if let Some(promo) = tour.promo_per_person() {
        promo
    } else if let Some(base_per_day) = tour.base_per_day() {
        base_per_day * tour.total_days() as f64
    } else {
        0.0
    }
}

pub fn combined_per_person(base: &Tour, insert: Option<&Tour>) -> f64 {
    per_person_price(base) + insert.map(per_person_price).unwrap_or(0.0)
}

/// Total for the whole group. Counts below one are clamped, not rejected:
/// the composer cannot control caller-side form validation and must always
/// return a usable number.
pub fn total_price(per_person: f64, passengers: i64) -> f64 {
    per_person * passengers.max(1) as f64
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriceLine {
    label: String,
    value: f64,
}

impl PriceLine {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriceQuote {
    per_person_lines: Vec<PriceLine>,
    total: f64,
}

impl PriceQuote {
    pub fn per_person_lines(&self) -> &[PriceLine] {
        &self.per_person_lines
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// One labelled per-person line per tour, and the grand total for the group.
pub fn price_quote(base: &Tour, insert: Option<&Tour>, passengers: i64) -> PriceQuote {
    let mut per_person_lines = vec![PriceLine {
        label: base.title().to_owned(),
        value: per_person_price(base),
    }];

    if let Some(insert) = insert {
        per_person_lines.push(PriceLine {
            label: insert.title().to_owned(),
            value: per_person_price(insert),
        });
    }

    let per_person = per_person_lines.iter().map(|line| line.value).sum();

    PriceQuote {
        per_person_lines,
        total: total_price(per_person, passengers),
    }
}
