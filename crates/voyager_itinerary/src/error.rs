use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error("splice day {insert_after_day} is outside the base tour's day range 0..{base_total_days}")]
    InvalidSpliceDay {
        insert_after_day: usize,
        base_total_days: usize,
    },
    #[error("customization references unknown tour {0}")]
    UnknownTour(String),
}
