use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::aggregate::{bucket_by_date, month_summary, period_summary, sum_shots, week_window};
use crate::calendar::{days_in_month, month_grid, week_grid, year_months};
use crate::error::Result;
use crate::model::{DrillRecord, PeriodSummary};
use crate::repository::KeyValueBackend;
use crate::service::LedgerService;

/// One calendar day as a view renders it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub is_today: bool,
    pub drills: Vec<DrillRecord>,
    pub total_shots: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailyView {
    pub date: NaiveDate,
    pub drills: Vec<DrillRecord>,
    pub total_shots: u64,
    /// Names offered for quick re-entry.
    pub saved_names: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeeklyView {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<DaySlot>,
    pub summary: PeriodSummary,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthlyView {
    pub year: i32,
    pub month: u32,
    /// Leading `None` cells pad the first week row; see `calendar::month_grid`.
    pub cells: Vec<Option<DaySlot>>,
    pub summary: PeriodSummary,
    /// Denominator for "days trained / N": today's day-of-month while the
    /// month is still running, the full month length otherwise.
    pub elapsed_days: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthOverview {
    pub month: u32,
    pub summary: PeriodSummary,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct YearlyView {
    pub year: i32,
    pub months: Vec<MonthOverview>,
    pub summary: PeriodSummary,
}

/// Builds the data each screen renders. Reads only; all "today" inputs are
/// passed by the caller so builds are reproducible.
pub struct ViewUseCase<'a, B: KeyValueBackend> {
    service: &'a LedgerService<B>,
}

impl<'a, B: KeyValueBackend> ViewUseCase<'a, B> {
    pub fn new(service: &'a LedgerService<B>) -> Self {
        Self { service }
    }

    pub fn daily(&self, date: NaiveDate) -> Result<DailyView> {
        let drills = self.service.drills_on(date)?;
        let total_shots = sum_shots(&drills);
        Ok(DailyView {
            date,
            drills,
            total_shots,
            saved_names: self.service.saved_names()?,
        })
    }

    pub fn weekly(&self, today: NaiveDate) -> Result<WeeklyView> {
        let (start, end) = week_window(today);
        let records = self.service.drills_between(start, end)?;
        let mut buckets = bucket_by_date(&records);

        let days = week_grid(today)
            .into_iter()
            .map(|date| day_slot(date, buckets.remove(&date).unwrap_or_default(), today))
            .collect();

        Ok(WeeklyView {
            start,
            end,
            days,
            summary: period_summary(&records),
        })
    }

    pub fn monthly(&self, year: i32, month: u32, today: NaiveDate) -> Result<MonthlyView> {
        let records = self.service.drills_in_month(year, month)?;
        let mut buckets = bucket_by_date(&records);

        let cells = month_grid(year, month)?
            .into_iter()
            .map(|cell| {
                cell.map(|date| day_slot(date, buckets.remove(&date).unwrap_or_default(), today))
            })
            .collect();

        let elapsed_days = if today.year() == year && today.month() == month {
            today.day()
        } else {
            days_in_month(year, month)?
        };

        Ok(MonthlyView {
            year,
            month,
            cells,
            summary: period_summary(&records),
            elapsed_days,
        })
    }

    pub fn yearly(&self, year: i32) -> Result<YearlyView> {
        let records = self.service.drills_in_year(year)?;

        let months = year_months()
            .map(|month| MonthOverview {
                month,
                summary: month_summary(&records, year, month),
            })
            .collect();

        Ok(YearlyView {
            year,
            months,
            summary: period_summary(&records),
        })
    }
}

fn day_slot(date: NaiveDate, drills: Vec<DrillRecord>, today: NaiveDate) -> DaySlot {
    let total_shots = sum_shots(&drills);
    DaySlot {
        date,
        is_today: date == today,
        drills,
        total_shots,
    }
}
