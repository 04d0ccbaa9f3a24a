// zones.rs - Forbidden-zone stamping around cold sensors

use tracing::debug;

use crate::cell::Cell;
use crate::grid::{Grid, Pos};

/// Overwrites the 8-neighborhood of every cold sensor with `Forbidden`,
/// whatever was there before. The sensor's own cell is left alone.
///
/// Pure overwrite, so the result does not depend on the order of `cold`
/// and stamping twice changes nothing. Returns the number of writes made.
pub fn stamp_forbidden(grid: &mut Grid, cold: &[Pos]) -> usize {
    let mut writes = 0;
    for &center in cold {
        let targets: Vec<Pos> = grid
            .neighborhood(center)
            .filter(|&pos| pos != center)
            .collect();
        for pos in targets {
            let written = grid.set(pos, Cell::Forbidden);
            debug_assert!(written.is_ok(), "neighborhood yielded {pos:?} outside the grid");
            writes += 1;
        }
    }
    debug!(sensors = cold.len(), writes, "forbidden zones stamped");
    writes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_input;

    #[test]
    fn no_cold_sensors_is_a_no_op() {
        let layout = parse_input("3 3 w.H .w. H..").unwrap();
        let mut grid = layout.grid.clone();
        assert_eq!(stamp_forbidden(&mut grid, &layout.cold), 0);
        assert_eq!(grid, layout.grid);
        assert_eq!(grid.count(Cell::Forbidden), 0);
    }

    #[test]
    fn stamps_eight_neighbors_but_not_center() {
        let layout = parse_input("3 3 ... .c. ...").unwrap();
        let mut grid = layout.grid;
        stamp_forbidden(&mut grid, &layout.cold);
        assert_eq!(grid.count(Cell::Forbidden), 8);
        assert_eq!(grid.get(Pos::new(2, 2)), Some(Cell::ColdSensor));
    }

    #[test]
    fn overwrites_emitters_and_sensors() {
        let layout = parse_input("2 3 cHw ...").unwrap();
        let mut grid = layout.grid;
        stamp_forbidden(&mut grid, &layout.cold);
        assert_eq!(grid.to_string(), "cxw\nxx.\n");
    }

    #[test]
    fn clips_at_the_border() {
        let layout = parse_input("3 3 c.. ... ...").unwrap();
        let mut grid = layout.grid;
        assert_eq!(stamp_forbidden(&mut grid, &layout.cold), 3);
        assert_eq!(grid.to_string(), "cx.\nxx.\n...\n");
    }

    #[test]
    fn overlapping_zones_count_every_write() {
        let layout = parse_input("3 5 ..... .c.c. .....").unwrap();
        let mut grid = layout.grid;
        assert_eq!(stamp_forbidden(&mut grid, &layout.cold), 16);
        assert_eq!(grid.to_string(), "xxxxx\nxcxcx\nxxxxx\n");
    }

    #[test]
    fn stamping_is_idempotent() {
        let layout = parse_input("4 4 c.w. .H.. ..c. w...").unwrap();
        let mut once = layout.grid.clone();
        stamp_forbidden(&mut once, &layout.cold);
        let mut twice = once.clone();
        stamp_forbidden(&mut twice, &layout.cold);
        assert_eq!(once, twice);
    }

    #[test]
    fn stamping_order_does_not_matter() {
        // Adjacent cold sensors stamp each other
        let layout = parse_input("3 4 cc.. .H.c w...").unwrap();
        let mut forward = layout.grid.clone();
        stamp_forbidden(&mut forward, &layout.cold);

        let reversed: Vec<Pos> = layout.cold.iter().rev().copied().collect();
        let mut backward = layout.grid.clone();
        stamp_forbidden(&mut backward, &reversed);

        assert_eq!(forward, backward);
        assert_eq!(forward.get(Pos::new(1, 1)), Some(Cell::Forbidden));
        assert_eq!(forward.get(Pos::new(1, 2)), Some(Cell::Forbidden));
    }
}
