// classify.rs - Warm-sensor classification by neighborhood sum

use serde::Serialize;
use tracing::{debug, info};

use crate::cell::Cell;
use crate::grid::{Grid, Pos};
use crate::report::{EntityResult, Report};

// Band thresholds over the summed cell codes
pub const SUFFICIENT_SUM: i32 = 200;
pub const INSUFFICIENT_SUM: i32 = 100;

/// Which band a neighborhood sum falls in, checked in this order:
/// `>= 200` sufficient, `< 100` insufficient, otherwise borderline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Sufficient,
    Insufficient,
    Borderline,
}

impl Band {
    pub fn for_sum(sum: i32) -> Self {
        if sum >= SUFFICIENT_SUM {
            Band::Sufficient
        } else if sum < INSUFFICIENT_SUM {
            Band::Insufficient
        } else {
            Band::Borderline
        }
    }
}

/// Outcome for one warm sensor. Only an under-warmed sensor carries
/// candidate cells; a borderline sensor is a deliberate no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "band", rename_all = "snake_case")]
pub enum Warmth {
    Sufficient,
    Insufficient { candidates: Vec<Pos> },
    Borderline,
}

impl Warmth {
    pub fn band(&self) -> Band {
        match self {
            Warmth::Sufficient => Band::Sufficient,
            Warmth::Insufficient { .. } => Band::Insufficient,
            Warmth::Borderline => Band::Borderline,
        }
    }

    pub fn candidates(&self) -> &[Pos] {
        match self {
            Warmth::Insufficient { candidates } => candidates,
            _ => &[],
        }
    }
}

/// Sum of cell codes over the 3x3 block around `center`, its own cell
/// included. Cells outside the grid contribute nothing.
pub fn neighborhood_sum(grid: &Grid, center: Pos) -> i32 {
    grid.neighborhood(center)
        .filter_map(|pos| grid.get(pos))
        .map(Cell::code)
        .sum()
}

pub fn classify_entity(grid: &Grid, center: Pos) -> EntityResult {
    let sum = neighborhood_sum(grid, center);
    let warmth = match Band::for_sum(sum) {
        Band::Sufficient => Warmth::Sufficient,
        Band::Borderline => Warmth::Borderline,
        Band::Insufficient => Warmth::Insufficient {
            candidates: grid
                .neighborhood(center)
                .filter(|&pos| grid.get(pos) == Some(Cell::Empty))
                .collect(),
        },
    };
    debug!(row = center.row, col = center.col, sum, band = ?warmth.band(), "warm sensor classified");
    EntityResult { pos: center, sum, warmth }
}

/// Classifies every warm sensor against an already-stamped grid.
pub fn classify(grid: &Grid, warm: &[Pos]) -> Report {
    let entities: Vec<EntityResult> = warm.iter().map(|&pos| classify_entity(grid, pos)).collect();
    let report = Report::new(entities);
    info!(
        sensors = warm.len(),
        flagged = report.flagged().count(),
        summary = ?report.summary(),
        "classification finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_input;
    use crate::zones::stamp_forbidden;

    fn stamped(input: &str) -> (Grid, Vec<Pos>) {
        let layout = parse_input(input).unwrap();
        let mut grid = layout.grid;
        stamp_forbidden(&mut grid, &layout.cold);
        (grid, layout.warm)
    }

    #[test]
    fn band_edges() {
        assert_eq!(Band::for_sum(200), Band::Sufficient);
        assert_eq!(Band::for_sum(199), Band::Borderline);
        assert_eq!(Band::for_sum(150), Band::Borderline);
        assert_eq!(Band::for_sum(100), Band::Borderline);
        assert_eq!(Band::for_sum(99), Band::Insufficient);
        assert_eq!(Band::for_sum(-18), Band::Insufficient);
    }

    #[test]
    fn one_emitter_is_sufficient() {
        let (grid, warm) = stamped("3 3 H.. .w. ...");
        let result = classify_entity(&grid, warm[0]);
        assert_eq!(result.sum, 256);
        assert_eq!(result.warmth, Warmth::Sufficient);
        assert!(result.warmth.candidates().is_empty());
    }

    #[test]
    fn lone_sensor_flags_all_eight_neighbors() {
        let (grid, warm) = stamped("3 3 ... .w. ...");
        let result = classify_entity(&grid, warm[0]);
        assert_eq!(result.sum, 1);
        let candidates = result.warmth.candidates();
        assert_eq!(candidates.len(), 8);
        assert!(!candidates.contains(&Pos::new(2, 2)));
        assert!(candidates.iter().all(|&p| grid.get(p) == Some(Cell::Empty)));
        assert!(candidates.windows(2).all(|w| w[0] < w[1]), "row-major order");
    }

    #[test]
    fn emitter_outweighs_forbidden_cells() {
        // Cold sensor below stamps most of the warm sensor's block
        let (grid, warm) = stamped("4 3 Hw. ... .c. ...");
        let result = classify_entity(&grid, warm[0]);
        assert_eq!(result.sum, 255 + 1 - 2 * 3);
        assert_eq!(result.warmth, Warmth::Sufficient);
    }

    #[test]
    fn stamped_warm_sensor_sums_its_current_cell() {
        let (grid, warm) = stamped("1 2 cw");
        assert_eq!(grid.get(warm[0]), Some(Cell::Forbidden));
        let result = classify_entity(&grid, warm[0]);
        assert_eq!(result.sum, -1 - 2);
        assert_eq!(result.warmth, Warmth::Insufficient { candidates: vec![] });
    }

    #[test]
    fn occupied_neighborhood_yields_no_candidates() {
        let (grid, warm) = stamped("3 3 www www www");
        let report = classify(&grid, &warm);
        assert_eq!(report.entities.len(), 9);
        assert!(report.entities.iter().all(|e| e.warmth == (Warmth::Insufficient { candidates: vec![] })));
        assert_eq!(report.flagged().count(), 0);
    }

    #[test]
    fn borderline_has_no_candidates() {
        assert_eq!(Warmth::Borderline.band(), Band::Borderline);
        assert!(Warmth::Borderline.candidates().is_empty());
    }
}
