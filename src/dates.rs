use chrono::{Months, NaiveDate};
use serde::Serialize;

const WIRE_SEPARATOR: char = '.';
const FORM_SEPARATOR: char = '-';

/// `DD.MM.YYYY` -> `YYYY-MM-DD`.
pub fn wire_to_form(date: &str) -> String {
    reverse_segments(date, WIRE_SEPARATOR, FORM_SEPARATOR)
}

/// `YYYY-MM-DD` -> `DD.MM.YYYY`.
pub fn form_to_wire(date: &str) -> String {
    reverse_segments(date, FORM_SEPARATOR, WIRE_SEPARATOR)
}

fn reverse_segments(value: &str, from: char, to: char) -> String {
    value
        .split(from)
        .rev()
        .collect::<Vec<_>>()
        .join(to.to_string().as_str())
}

/// Selectable range of the editor's date input, in form format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub min: String,
    pub max: String,
}

impl DateRange {
    pub fn starting(today: NaiveDate) -> Self {
        let max = today
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX);
        Self {
            min: today.format("%Y-%m-%d").to_string(),
            max: max.format("%Y-%m-%d").to_string(),
        }
    }
}
