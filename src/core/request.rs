use crate::core::season::season_for_month;
use crate::domain::model::{HourRange, VisitRequest};
use crate::utils::error::{Result, ZooError};

pub const PROMPT: &str =
    "What day will you come? (Format: day month time-range, e.g., '15 june 9-17'): ";

impl VisitRequest {
    /// Parses `"<day> <month> <start-end>"`.
    ///
    /// The time range is checked before the month, so `"1 smarch 17-9"` reports the range.
    /// Tokens after the third are ignored and the day is taken as-is.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let parts: Vec<&str> = normalized.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(ZooError::InvalidInput);
        }

        let window: HourRange = parts[2].parse()?;
        let season = season_for_month(parts[1])?;

        Ok(Self {
            day: parts[0].to_string(),
            month: parts[1].to_string(),
            season,
            window,
        })
    }

    pub fn season_line(&self) -> String {
        format!(
            "You're visiting in {} (season {})",
            self.season,
            self.season.index()
        )
    }
}
