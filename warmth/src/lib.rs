//! Heater placement on a sensor grid.
//!
//! A grid of empty cells, cold sensors (`c`), warm sensors (`w`) and
//! emitters (anything else) is read once, cold sensors fence off their
//! 8-neighborhood, and every warm sensor is classified by the sum of the
//! cell codes around it. Under-warmed sensors report the empty cells where
//! an emitter could still go.

pub mod cell;
pub mod classify;
pub mod error;
pub mod grid;
pub mod ingest;
pub mod patterns;
pub mod report;
pub mod zones;

pub use cell::Cell;
pub use classify::{Band, Warmth, classify, classify_entity, neighborhood_sum};
pub use error::{Result, WarmthError};
pub use grid::{Grid, MAX_EXTENT, Pos};
pub use ingest::{Layout, parse_input};
pub use report::{EntityResult, Report, Summary, TOO_COLD};
pub use zones::stamp_forbidden;

/// Stamps a copy of the layout's grid and classifies its warm sensors.
/// Returns the stamped grid alongside the report.
pub fn run(layout: &Layout) -> (Grid, Report) {
    let mut grid = layout.grid.clone();
    stamp_forbidden(&mut grid, &layout.cold);
    let report = classify(&grid, &layout.warm);
    (grid, report)
}

pub fn classify_input(input: &str) -> Result<Report> {
    let layout = parse_input(input)?;
    Ok(run(&layout).1)
}
