use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::utils::error::{DatavizError, Result};

/// Earliest season with published player and team statistics.
pub const FIRST_SEASON: i32 = 1999;

/// Season exported when nothing else is configured.
pub const DEFAULT_SEASON: i32 = 2025;

/// The NFL season in progress on `today`: a season starts on the Thursday after
/// Labor Day (first Monday of September).
pub fn current_season(today: NaiveDate) -> i32 {
    let year = today.year();
    match season_kickoff(year) {
        Some(kickoff) if today >= kickoff => year,
        Some(_) => year - 1,
        None => year,
    }
}

fn season_kickoff(year: i32) -> Option<NaiveDate> {
    let sept_first = NaiveDate::from_ymd_opt(year, 9, 1)?;
    let to_monday = (7 + Weekday::Mon.num_days_from_monday()
        - sept_first.weekday().num_days_from_monday())
        % 7;
    let labor_day = sept_first.checked_add_days(Days::new(u64::from(to_monday)))?;
    labor_day.checked_add_days(Days::new(3))
}

pub fn validate_season_on(season: i32, today: NaiveDate) -> Result<()> {
    let latest = current_season(today);
    if season < FIRST_SEASON || season > latest {
        return Err(DatavizError::ValidationError {
            message: format!(
                "Season {} is not available; choose a season between {} and {}",
                season, FIRST_SEASON, latest
            ),
        });
    }
    Ok(())
}

pub fn validate_season(season: i32) -> Result<()> {
    validate_season_on(season, Local::now().date_naive())
}
