//! Time utilities for the monthly reporting window

use crate::analysis::classifier::ReportWindow;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Months, NaiveDate, TimeZone};

/// A calendar month resolved to concrete instants in a timezone
#[derive(Debug, Clone)]
pub struct MonthWindow<Tz: TimeZone> {
    /// First of the month, 00:00, inclusive
    pub start: DateTime<Tz>,
    /// First of the following month, 00:00, exclusive
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> MonthWindow<Tz> {
    /// Epoch-seconds window used by the statistics pass
    pub fn report_window(&self) -> ReportWindow {
        ReportWindow::new(self.start.timestamp() as f64, self.end.timestamp() as f64)
    }
}

/// Parse a strict `YYYY-MM` month string into the first day of that month
pub fn parse_month(month: &str) -> AppResult<NaiveDate> {
    let invalid = |reason: &str| AppError::InvalidMonth {
        month: month.to_string(),
        reason: reason.to_string(),
    };

    let (year, mon) = month
        .split_once('-')
        .ok_or_else(|| invalid("expected YYYY-MM"))?;
    if year.len() != 4 || mon.len() != 2 {
        return Err(invalid("expected YYYY-MM"));
    }
    if !year.bytes().chain(mon.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid("year and month must be numeric"));
    }

    let year: i32 = year.parse().map_err(|_| invalid("year is not a number"))?;
    let mon: u32 = mon.parse().map_err(|_| invalid("month is not a number"))?;

    NaiveDate::from_ymd_opt(year, mon, 1).ok_or_else(|| invalid("month out of range"))
}

/// Resolve `YYYY-MM` to the half-open window [first of month, first of next month)
/// at local midnight in `tz`.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use lsp_routing_stats::utils::time::month_window;
///
/// let window = month_window("2024-04", &Utc).unwrap();
/// assert_eq!(window.start.timestamp(), 1711929600);
/// assert_eq!(window.end.timestamp(), 1714521600);
/// ```
pub fn month_window<Tz: TimeZone>(month: &str, tz: &Tz) -> AppResult<MonthWindow<Tz>> {
    let first = parse_month(month)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| AppError::InvalidMonth {
            month: month.to_string(),
            reason: "following month is out of range".to_string(),
        })?;

    Ok(MonthWindow {
        start: local_midnight(month, first, tz)?,
        end: local_midnight(month, next, tz)?,
    })
}

fn local_midnight<Tz: TimeZone>(month: &str, date: NaiveDate, tz: &Tz) -> AppResult<DateTime<Tz>> {
    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| tz.from_local_datetime(&midnight).earliest())
        .ok_or_else(|| AppError::InvalidMonth {
            month: month.to_string(),
            reason: format!("midnight on {} does not exist in this timezone", date),
        })
}
