// patterns.rs - Named sample layouts

use crate::error::Result;
use crate::ingest::Layout;

pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl Pattern {
    pub fn layout(&self) -> Result<Layout> {
        let cols = self.rows.first().map_or(0, |r| r.chars().count());
        Layout::from_rows(self.rows.len(), cols, self.rows)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Corner cold",
        rows: &["c..", "..w", "..."],
    },
    Pattern {
        name: "Lone sensor",
        rows: &["...", ".w.", "..."],
    },
    Pattern {
        name: "Heated",
        rows: &["H..", ".w.", "..."],
    },
    Pattern {
        name: "Crowded",
        rows: &["www", "www", "www"],
    },
    Pattern {
        name: "Empty room",
        rows: &["....", "....", "...."],
    },
    Pattern {
        name: "Mixed ward",
        rows: &[
            "..........",
            ".w....c...",
            "......H.w.",
            "..c.......",
            ".w....w...",
            "......H...",
            "c........w",
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
