// ingest.rs - Builds the grid and entity lists from text input

use tracing::{debug, warn};

use crate::cell::Cell;
use crate::error::{Result, WarmthError};
use crate::grid::{Grid, Pos};

/// The grid as read, plus the sensors found while reading it.
/// Entity lists are in row-major scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub cold: Vec<Pos>,
    pub warm: Vec<Pos>,
}

impl Layout {
    /// Builds a layout from `rows` strings of exactly `cols` characters each.
    pub fn from_rows<S: AsRef<str>>(rows: usize, cols: usize, lines: &[S]) -> Result<Self> {
        let mut grid = Grid::new(rows, cols)?;
        let mut cold = Vec::new();
        let mut warm = Vec::new();

        if lines.len() < rows {
            return Err(WarmthError::malformed(
                lines.len() + 1,
                format!("expected {rows} rows, found {}", lines.len()),
            ));
        }

        for (r, line) in lines.iter().take(rows).enumerate() {
            let row = r + 1;
            let line = line.as_ref();
            let len = line.chars().count();
            if len != cols {
                return Err(WarmthError::malformed(
                    row,
                    format!("expected {cols} characters, found {len}"),
                ));
            }

            for (c, marker) in line.chars().enumerate() {
                let pos = Pos::new(row, c + 1);
                let cell = Cell::from_marker(marker);
                match cell {
                    Cell::ColdSensor => cold.push(pos),
                    Cell::WarmSensor => warm.push(pos),
                    _ => {}
                }
                grid.set(pos, cell)?;
            }
        }

        debug!(rows, cols, cold = cold.len(), warm = warm.len(), "grid ingested");
        Ok(Self { grid, cold, warm })
    }
}

/// Parses `rows cols` followed by `rows` whitespace-separated row tokens.
pub fn parse_input(input: &str) -> Result<Layout> {
    let mut tokens = input.split_whitespace();
    let rows = parse_dimension(tokens.next(), "row count")?;
    let cols = parse_dimension(tokens.next(), "column count")?;
    // Reject before collecting so an absurd header cannot size the buffer
    Grid::new(rows, cols)?;

    let lines: Vec<&str> = tokens.by_ref().take(rows).collect();
    let layout = Layout::from_rows(rows, cols, &lines)?;

    let trailing = tokens.count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last grid row");
    }
    Ok(layout)
}

fn parse_dimension(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| WarmthError::malformed(0, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| WarmthError::malformed(0, format!("{what} {token:?} is not a non-negative integer")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_entities_in_scan_order() {
        let layout = parse_input("3 4\nw.c.\n.H..\nc..w\n").unwrap();
        assert_eq!(layout.cold, vec![Pos::new(1, 3), Pos::new(3, 1)]);
        assert_eq!(layout.warm, vec![Pos::new(1, 1), Pos::new(3, 4)]);
        assert_eq!(layout.grid.get(Pos::new(2, 2)), Some(Cell::Emitter));
        assert_eq!(layout.grid.count(Cell::Empty), 7);
    }

    #[test]
    fn any_unknown_character_is_an_emitter() {
        let layout = parse_input("1 4 #?Hz").unwrap();
        assert_eq!(layout.grid.count(Cell::Emitter), 4);
        assert!(layout.cold.is_empty() && layout.warm.is_empty());
    }

    #[test]
    fn short_row_is_malformed() {
        let err = parse_input("2 3\n...\n..\n").unwrap_err();
        assert!(matches!(err, WarmthError::MalformedInput { row: 2, .. }), "{err}");
    }

    #[test]
    fn long_row_is_malformed() {
        let err = parse_input("1 2\n...\n").unwrap_err();
        assert!(matches!(err, WarmthError::MalformedInput { row: 1, .. }), "{err}");
    }

    #[test]
    fn missing_row_is_malformed() {
        let err = parse_input("3 2\n..\n..\n").unwrap_err();
        assert!(matches!(err, WarmthError::MalformedInput { row: 3, .. }), "{err}");
    }

    #[test]
    fn bad_header_is_malformed() {
        assert!(matches!(parse_input(""), Err(WarmthError::MalformedInput { row: 0, .. })));
        assert!(matches!(parse_input("3"), Err(WarmthError::MalformedInput { row: 0, .. })));
        assert!(matches!(parse_input("-1 2"), Err(WarmthError::MalformedInput { row: 0, .. })));
        assert!(matches!(parse_input("a b"), Err(WarmthError::MalformedInput { row: 0, .. })));
    }

    #[test]
    fn oversized_header_is_rejected() {
        assert!(matches!(
            parse_input("101 1"),
            Err(WarmthError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let layout = parse_input("1 1 w extra tokens").unwrap();
        assert_eq!(layout.warm, vec![Pos::new(1, 1)]);
    }

    #[test]
    fn row_length_counts_characters_not_bytes() {
        let layout = parse_input("1 2 éw").unwrap();
        assert_eq!(layout.grid.get(Pos::new(1, 1)), Some(Cell::Emitter));
        assert_eq!(layout.warm, vec![Pos::new(1, 2)]);
    }

    #[test]
    fn from_rows_matches_parse_input() {
        let built = Layout::from_rows(2, 2, &["c.", ".w"]).unwrap();
        let parsed = parse_input("2 2 c. .w").unwrap();
        assert_eq!(built, parsed);
    }
}
