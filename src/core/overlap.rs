use crate::domain::model::HourRange;
use crate::utils::error::{Result, ZooError};
use std::str::FromStr;

pub const MAX_HOUR: u32 = 24;

/// `[vs, ve)` and `[as, ae)` overlap iff `max(vs, as) < min(ve, ae)`.
pub fn overlaps(visitor_start: u32, visitor_end: u32, animal_start: u32, animal_end: u32) -> bool {
    visitor_start.max(animal_start) < visitor_end.min(animal_end)
}

impl HourRange {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start >= end {
            return Err(ZooError::InvalidTimeRange {
                reason: "Start time must be before end time".to_string(),
            });
        }
        if end > MAX_HOUR {
            return Err(ZooError::InvalidTimeRange {
                reason: format!("Time must be between 0 and {}", MAX_HOUR),
            });
        }
        Ok(Self { start, end })
    }

    pub fn overlaps(&self, other: &HourRange) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }
}

impl FromStr for HourRange {
    type Err = ZooError;

    /// Parses `start-end`, e.g. `9-17`. Surrounding whitespace on either bound is allowed.
    fn from_str(s: &str) -> Result<Self> {
        let format_error = || ZooError::InvalidTimeFormat {
            value: s.to_string(),
        };

        let (start, end) = s.split_once('-').ok_or_else(format_error)?;
        let start: u32 = start.trim().parse().map_err(|_| format_error())?;
        let end: u32 = end.trim().parse().map_err(|_| format_error())?;

        HourRange::new(start, end)
    }
}
