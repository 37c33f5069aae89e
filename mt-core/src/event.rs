//! User interaction events emitted by a renderer.
//!
//! Text form is `level=value`, for example `decade=1960s`, `year=1965`,
//! `year=none` or `department=civil`.

use crate::catalog::{Catalog, DecadeId, DepartmentId};
use crate::error::ParseEventError;
use crate::selector::CascadingSelector;
use std::fmt;
use std::str::FromStr;

const NONE: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Decade(Option<DecadeId>),
    Year(Option<i32>),
    Department(DepartmentId),
}

impl CascadingSelector {
    /// Process one event to completion, cascades included.
    pub fn apply(&mut self, catalog: &Catalog, event: &SelectionEvent) {
        match event {
            SelectionEvent::Decade(id) => self.select_decade(catalog, id.as_ref()),
            SelectionEvent::Year(year) => self.select_year(catalog, *year),
            SelectionEvent::Department(id) => self.select_department(catalog, id),
        }
    }
}

impl FromStr for SelectionEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (level, value) = s
            .split_once('=')
            .ok_or_else(|| ParseEventError::MissingValue(s.to_string()))?;
        let value = value.trim();
        let cleared = value.is_empty() || value.eq_ignore_ascii_case(NONE);

        match level.trim().to_ascii_lowercase().as_str() {
            "decade" => Ok(SelectionEvent::Decade(
                (!cleared).then(|| DecadeId::from(value)),
            )),
            "year" => {
                if cleared {
                    return Ok(SelectionEvent::Year(None));
                }
                value
                    .parse::<i32>()
                    .map(|y| SelectionEvent::Year(Some(y)))
                    .map_err(|_| ParseEventError::InvalidYear(value.to_string()))
            }
            "department" | "dept" => {
                if cleared {
                    return Err(ParseEventError::MissingValue(s.to_string()));
                }
                Ok(SelectionEvent::Department(DepartmentId::from(value)))
            }
            other => Err(ParseEventError::UnknownLevel(other.to_string())),
        }
    }
}

impl fmt::Display for SelectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionEvent::Decade(Some(id)) => write!(f, "decade={id}"),
            SelectionEvent::Decade(None) => write!(f, "decade={NONE}"),
            SelectionEvent::Year(Some(year)) => write!(f, "year={year}"),
            SelectionEvent::Year(None) => write!(f, "year={NONE}"),
            SelectionEvent::Department(id) => write!(f, "department={id}"),
        }
    }
}
