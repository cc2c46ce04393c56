//! Query resolver: sparse filter request → one store predicate.
//!
//! A request is classified once into a [`FilterShape`]; the shape alone decides
//! the predicate. Combinations outside the fourteen supported shapes classify
//! as [`FilterShape::Unsupported`] and produce no result set.

use crate::db::predicate::{Field, Predicate};
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{Entry, RegisterType};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// "no date" sentinel sent by the search form (`dd/mm/yyyy` with empty parts).
pub const NO_DATE: &str = "//";
/// "no month" sentinel (`mm/yyyy` with empty parts).
pub const NO_MONTH: &str = "/";

/// Search criteria as sent by the caller. Every text field is optional and
/// encoded with a sentinel when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(default = "no_date")]
    pub search_date: String,
    #[serde(default = "no_month")]
    pub month: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub card: String,
    #[serde(rename = "type")]
    pub register: RegisterType,
}

fn no_date() -> String {
    NO_DATE.to_string()
}

fn no_month() -> String {
    NO_MONTH.to_string()
}

fn supplied<'a>(value: &'a str, sentinel: &str) -> Option<&'a str> {
    if value.is_empty() || value == sentinel {
        None
    } else {
        Some(value)
    }
}

impl FilterRequest {
    /// Request with every criterion unset.
    pub fn new(register: RegisterType) -> Self {
        Self {
            search_date: no_date(),
            month: no_month(),
            first_name: String::new(),
            last_name: String::new(),
            card: String::new(),
            register,
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.search_date = date.into();
        self
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn card(mut self, card: impl Into<String>) -> Self {
        self.card = card.into();
        self
    }

    pub fn shape(&self) -> FilterShape {
        FilterShape::classify(self)
    }
}

/// The supported filter combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterShape {
    Date { date: String },
    LastName { last: String },
    FirstName { first: String },
    LastNameOnDate { last: String, date: String },
    LastNameInMonth { last: String, month: String },
    FirstNameOnDate { first: String, date: String },
    FirstNameInMonth { first: String, month: String },
    FullName { first: String, last: String },
    FullNameOnDate { first: String, last: String, date: String },
    FullNameInMonth { first: String, last: String, month: String },
    Card { card: String },
    CardOnDate { card: String, date: String },
    CardInMonth { card: String, month: String },
    Month { month: String },
    /// Date and month together, card with names, card on the visitors
    /// register, or no criterion at all.
    Unsupported,
}

impl FilterShape {
    pub fn classify(req: &FilterRequest) -> Self {
        let date = supplied(&req.search_date, NO_DATE).map(str::to_string);
        let month = supplied(&req.month, NO_MONTH).map(str::to_string);
        let first = supplied(&req.first_name, "").map(str::to_string);
        let last = supplied(&req.last_name, "").map(str::to_string);
        let card = supplied(&req.card, "").map(str::to_string);

        use FilterShape::*;
        match (date, month, first, last, card) {
            (Some(_), Some(_), _, _, _) => Unsupported,

            (Some(date), None, None, None, None) => Date { date },
            (None, Some(month), None, None, None) => Month { month },

            (None, None, None, Some(last), None) => LastName { last },
            (Some(date), None, None, Some(last), None) => LastNameOnDate { last, date },
            (None, Some(month), None, Some(last), None) => LastNameInMonth { last, month },

            (None, None, Some(first), None, None) => FirstName { first },
            (Some(date), None, Some(first), None, None) => FirstNameOnDate { first, date },
            (None, Some(month), Some(first), None, None) => FirstNameInMonth { first, month },

            (None, None, Some(first), Some(last), None) => FullName { first, last },
            (Some(date), None, Some(first), Some(last), None) => {
                FullNameOnDate { first, last, date }
            }
            (None, Some(month), Some(first), Some(last), None) => {
                FullNameInMonth { first, last, month }
            }

            (date, month, None, None, Some(card)) if req.register.is_colleagues() => {
                match (date, month) {
                    (None, None) => Card { card },
                    (Some(date), None) => CardOnDate { card, date },
                    (None, Some(month)) => CardInMonth { card, month },
                    (Some(_), Some(_)) => Unsupported,
                }
            }

            _ => Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FilterShape::Unsupported)
    }

    /// Store predicate for this shape within `register`; `None` when unsupported.
    pub fn predicate(&self, register: RegisterType) -> Option<Predicate> {
        use FilterShape::*;

        let base = Predicate::register(register);
        let p = match self {
            Date { date } => base.eq(Field::Date, date),
            Month { month } => base.contains(Field::Date, month),

            LastName { last } => base.contains(Field::LastName, last),
            LastNameOnDate { last, date } => base
                .eq(Field::Date, date)
                .contains(Field::LastName, last),
            LastNameInMonth { last, month } => base
                .contains(Field::LastName, last)
                .contains(Field::Date, month),

            FirstName { first } => base.contains(Field::FirstName, first),
            FirstNameOnDate { first, date } => base
                .eq(Field::Date, date)
                .contains(Field::FirstName, first),
            FirstNameInMonth { first, month } => base
                .contains(Field::FirstName, first)
                .contains(Field::Date, month),

            FullName { first, last } => base
                .contains(Field::FirstName, first)
                .contains(Field::LastName, last),
            FullNameOnDate { first, last, date } => base
                .eq(Field::Date, date)
                .contains(Field::FirstName, first)
                .contains(Field::LastName, last),
            FullNameInMonth { first, last, month } => base
                .contains(Field::FirstName, first)
                .contains(Field::LastName, last)
                .contains(Field::Date, month),

            Card { card } => base.eq(Field::Card, card),
            CardOnDate { card, date } => base.eq(Field::Card, card).eq(Field::Date, date),
            CardInMonth { card, month } => base
                .eq(Field::Card, card)
                .contains(Field::Date, month),

            Unsupported => return None,
        };
        Some(p)
    }
}

/// Resolve and run a filter request.
///
/// `Ok(None)` means the combination is unsupported: the caller gets no result
/// set at all, not an empty one.
pub fn resolve(conn: &Connection, req: &FilterRequest) -> AppResult<Option<Vec<Entry>>> {
    match req.shape().predicate(req.register) {
        Some(predicate) => Ok(Some(queries::find_by(conn, &predicate)?)),
        None => Ok(None),
    }
}
