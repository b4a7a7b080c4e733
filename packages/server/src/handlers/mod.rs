pub mod admin;
pub mod arena;
pub mod health;
pub mod upload;

use chrono::{Local, NaiveDate};

/// Today's date on the process-local clock.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
