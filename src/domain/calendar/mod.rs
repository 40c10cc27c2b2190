//! Calendar rendering.
//!
//! Pure functions that turn a month and a selection into a grid of cells.

mod grid;

pub use grid::{build_grid, Cell, DayCell, MonthGrid, Week, DAYS_PER_WEEK};
