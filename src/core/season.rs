use crate::domain::model::Season;
use crate::utils::error::{Result, ZooError};
use std::str::FromStr;

pub const MONTH_TO_SEASON: [(&str, Season); 12] = [
    ("january", Season::Winter),
    ("february", Season::Winter),
    ("march", Season::Spring),
    ("april", Season::Spring),
    ("may", Season::Spring),
    ("june", Season::Summer),
    ("july", Season::Summer),
    ("august", Season::Summer),
    ("september", Season::Autumn),
    ("october", Season::Autumn),
    ("november", Season::Autumn),
    ("december", Season::Winter),
];

/// 月份名稱不分大小寫，查不到就回傳 InvalidMonth
pub fn season_for_month(month: &str) -> Result<Season> {
    let key = month.trim().to_lowercase();
    MONTH_TO_SEASON
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, season)| *season)
        .ok_or_else(|| ZooError::InvalidMonth {
            month: month.to_string(),
        })
}

impl FromStr for Season {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_june_is_summer_and_december_is_winter() {
        assert_eq!(season_for_month("june").unwrap(), Season::Summer);
        assert_eq!(season_for_month("december").unwrap(), Season::Winter);
    }

    #[test]
    fn test_month_lookup_is_case_insensitive() {
        assert_eq!(season_for_month("MARCH").unwrap(), Season::Spring);
        assert_eq!(season_for_month(" October ").unwrap(), Season::Autumn);
    }

    #[test]
    fn test_unknown_month_is_rejected() {
        match season_for_month("smarch") {
            Err(ZooError::InvalidMonth { month }) => assert_eq!(month, "smarch"),
            other => panic!("expected InvalidMonth, got {:?}", other),
        }
        assert!(season_for_month("").is_err());
    }

    #[test]
    fn test_every_season_has_three_months() {
        for season in Season::ALL {
            let count = MONTH_TO_SEASON.iter().filter(|(_, s)| *s == season).count();
            assert_eq!(count, 3, "{} should cover three months", season);
        }
    }

    #[test]
    fn test_parse_hibernation_season() {
        assert_eq!("Winter".parse::<Season>(), Ok(Season::Winter));
        assert_eq!("fall".parse::<Season>(), Ok(Season::Autumn));
        assert_eq!(" summer ".parse::<Season>(), Ok(Season::Summer));
        assert!("none".parse::<Season>().is_err());
        assert!("".parse::<Season>().is_err());
    }
}
