use crate::utils::error::ZooError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
    ];

    /// 0=Winter, 1=Spring, 2=Summer, 3=Autumn
    pub fn index(self) -> u8 {
        match self {
            Season::Winter => 0,
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Autumn => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open hour interval `[start, end)` within `0..=24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub name: String,
    pub hibernation_season: String,
    /// Third column of the data file, carried through but never interpreted.
    pub unused: String,
    pub active_range: HourRange,
}

impl AnimalRecord {
    pub fn hibernates_in(&self, season: Season) -> bool {
        self.hibernation_season
            .parse::<Season>()
            .map(|hibernation| hibernation == season)
            .unwrap_or(false)
    }
}

impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.active_range)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRequest {
    pub day: String,
    pub month: String,
    pub season: Season,
    pub window: HourRange,
}

/// One data line, in file order. Errors are always `ZooError::MalformedLine`.
pub type ParsedLine = std::result::Result<AnimalRecord, ZooError>;

#[derive(Debug)]
pub struct ParsedAnimals {
    pub source: String,
    pub lines: Vec<ParsedLine>,
}

impl ParsedAnimals {
    pub fn records(&self) -> impl Iterator<Item = &AnimalRecord> {
        self.lines.iter().filter_map(|line| line.as_ref().ok())
    }

    pub fn malformed_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_err()).count()
    }
}

#[derive(Debug)]
pub enum ReportEntry {
    Available(AnimalRecord),
    Warning(ZooError),
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEntry::Available(animal) => write!(f, "{}", animal),
            ReportEntry::Warning(err) => f.write_str(&err.user_friendly_message()),
        }
    }
}

#[derive(Debug)]
pub struct VisitReport {
    pub request: VisitRequest,
    pub entries: Vec<ReportEntry>,
}

impl VisitReport {
    pub const NONE_FOUND: &'static str = "No animals available during your specified time.";

    pub fn available(&self) -> impl Iterator<Item = &AnimalRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Available(animal) => Some(animal),
            ReportEntry::Warning(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.available().next().is_none()
    }

    pub fn header(&self) -> String {
        format!(
            "Animals available during your visit on {} {} between {}:",
            self.request.day, self.request.month, self.request.window
        )
    }

    /// Formatted output lines, header first, none-found message last when nothing qualifies.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.header()];
        lines.extend(self.entries.iter().map(|entry| entry.to_string()));
        if self.is_empty() {
            lines.push(Self::NONE_FOUND.to_string());
        }
        lines
    }
}
