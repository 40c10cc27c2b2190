//! Month grid builder.
//!
//! Lays out a month as Monday-first weeks of exactly seven cells. Days
//! outside the month are padded with blank cells so that every day lands
//! under its weekday column.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::domain::foundation::{CalendarMonth, DateKey};

/// Number of cells in one grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// A single calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Padding outside the month.
    Blank,
    /// A day of the month.
    Day(DayCell),
}

/// A day of the rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: DateKey,
    pub selected: bool,
}

impl Cell {
    /// Returns the day cell, if this is not padding.
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Cell::Day(day) => Some(day),
            Cell::Blank => None,
        }
    }
}

/// One Monday-to-Sunday row.
pub type Week = [Cell; DAYS_PER_WEEK];

/// A rendered month with per-day selection flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: CalendarMonth,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Iterates over the day cells in calendar order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().filter_map(Cell::as_day)
    }
}

/// Builds the grid for `month`, flagging every day found in `selected`.
///
/// Dates in `selected` that fall outside `month` are ignored.
pub fn build_grid(month: CalendarMonth, selected: &BTreeSet<DateKey>) -> MonthGrid {
    let first = month.first_day();
    let leading = first.weekday().num_days_from_monday() as usize;
    let days = month.days_in_month();

    let mut cells: Vec<Cell> = Vec::with_capacity(42);
    cells.extend(std::iter::repeat(Cell::Blank).take(leading));
    for (offset, date) in first.iter_days().take(days as usize).enumerate() {
        let date = DateKey::from(date);
        cells.push(Cell::Day(DayCell {
            day: offset as u32 + 1,
            date,
            selected: selected.contains(&date),
        }));
    }
    while cells.len() % DAYS_PER_WEEK != 0 {
        cells.push(Cell::Blank);
    }

    let weeks = cells
        .chunks_exact(DAYS_PER_WEEK)
        .map(|chunk| {
            let mut week = [Cell::Blank; DAYS_PER_WEEK];
            week.copy_from_slice(chunk);
            week
        })
        .collect();

    MonthGrid { month, weeks }
}
