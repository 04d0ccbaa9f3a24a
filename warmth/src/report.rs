// report.rs - Classification report and its text/JSON renderings

use std::io::Write;

use serde::Serialize;

use crate::classify::Warmth;
use crate::error::Result;
use crate::grid::Pos;

pub const TOO_COLD: &str = "Too cold!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityResult {
    pub pos: Pos,
    pub sum: i32,
    pub warmth: Warmth,
}

/// Whole-run outcome, decided once after every warm sensor is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Summary {
    /// At least one candidate cell was flagged.
    Candidates(usize),
    /// Warm sensors exist and every one of them is already sufficiently warmed.
    AllSufficient,
    /// Nothing flagged: no warm sensors, or the under-warmed ones have no
    /// empty neighbor, or all remaining sensors are borderline.
    TooCold,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entities: Vec<EntityResult>,
}

impl Report {
    pub fn new(entities: Vec<EntityResult>) -> Self {
        Self { entities }
    }

    /// Flagged cells in output order: entity order, then row-major within
    /// each block. A cell shared by two under-warmed sensors appears twice.
    pub fn flagged(&self) -> impl Iterator<Item = Pos> + '_ {
        self.entities
            .iter()
            .flat_map(|e| e.warmth.candidates().iter().copied())
    }

    pub fn summary(&self) -> Summary {
        let flagged = self.flagged().count();
        if flagged > 0 {
            Summary::Candidates(flagged)
        } else if !self.entities.is_empty()
            && self.entities.iter().all(|e| e.warmth == Warmth::Sufficient)
        {
            Summary::AllSufficient
        } else {
            Summary::TooCold
        }
    }

    /// One `row col` line per flagged cell, or the too-cold line.
    /// An all-sufficient run prints nothing. Every line, `Too cold!`
    /// included, ends with a newline.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.summary() {
            Summary::Candidates(_) => {
                for pos in self.flagged() {
                    writeln!(out, "{pos}")?;
                }
            }
            Summary::TooCold => writeln!(out, "{TOO_COLD}")?,
            Summary::AllSufficient => {}
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let doc = JsonReport {
            summary: self.summary(),
            flagged: self.flagged().collect(),
            entities: &self.entities,
        };
        serde_json::to_writer_pretty(&mut *out, &doc).map_err(std::io::Error::from)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    flagged: Vec<Pos>,
    entities: &'a [EntityResult],
}
