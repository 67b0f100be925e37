pub mod views;
mod views_test;

pub use views::{
    DailyView, DaySlot, MonthOverview, MonthlyView, ViewUseCase, WeeklyView, YearlyView,
};
