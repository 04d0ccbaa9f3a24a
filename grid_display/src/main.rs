// main.rs - Desktop viewer for heater-placement grids

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use tracing::info;
use warmth::{Layout, Report, patterns};

mod ui;

/// Shows a classified sensor grid and lets you edit it.
#[derive(Parser, Debug)]
#[command(name = "grid_display")]
struct Cli {
    /// Grid file in the `rows cols row...` format; a sample layout otherwise
    layout: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let app = match &cli.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let layout = warmth::parse_input(&text).context("invalid grid")?;
            info!(path = %path.display(), "layout loaded");
            GridApp::new(&layout)
        }
        None => GridApp::from_pattern(0)?,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Heater Placement",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}

/// Editable input markers plus the result of classifying them.
pub struct GridApp {
    pub markers: Vec<Vec<char>>, // Input characters, 0-indexed
    pub stamped: warmth::Grid,
    pub report: Report,
    pub selected_pattern: usize,
    pub show_stamped: bool,
    pub error: Option<String>,
}

impl GridApp {
    pub fn new(layout: &Layout) -> Self {
        let cells: Vec<char> = layout
            .grid
            .positions()
            .map(|pos| layout.grid.get(pos).map_or('.', |c| c.marker()))
            .collect();
        let markers = cells
            .chunks(layout.grid.cols().max(1))
            .map(<[char]>::to_vec)
            .collect();
        let (stamped, report) = warmth::run(layout);
        Self {
            markers,
            stamped,
            report,
            selected_pattern: 0,
            show_stamped: true,
            error: None,
        }
    }

    pub fn from_pattern(index: usize) -> Result<Self> {
        let pattern = patterns::PATTERNS
            .get(index)
            .ok_or_else(|| anyhow!("no pattern #{index}"))?;
        let mut app = Self::new(&pattern.layout()?);
        app.selected_pattern = index;
        Ok(app)
    }

    /// Re-reads the markers and runs a fresh classification.
    pub fn reclassify(&mut self) {
        let rows: Vec<String> = self.markers.iter().map(|r| r.iter().collect()).collect();
        let cols = self.markers.first().map_or(0, Vec::len);
        match Layout::from_rows(rows.len(), cols, &rows) {
            Ok(layout) => {
                let (stamped, report) = warmth::run(&layout);
                self.stamped = stamped;
                self.report = report;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Cycles a cell through the input alphabet: empty, cold, warm, emitter.
    pub fn cycle_marker(&mut self, row: usize, col: usize) {
        if let Some(marker) = self.markers.get_mut(row).and_then(|r| r.get_mut(col)) {
            *marker = match *marker {
                '.' => 'c',
                'c' => 'w',
                'w' => 'H',
                _ => '.',
            };
            self.reclassify();
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        match patterns::PATTERNS.get(self.selected_pattern).map(|p| p.layout()) {
            Some(Ok(layout)) => {
                let selected = self.selected_pattern;
                let show_stamped = self.show_stamped;
                *self = Self::new(&layout);
                self.selected_pattern = selected;
                self.show_stamped = show_stamped;
            }
            Some(Err(e)) => self.error = Some(e.to_string()),
            None => {}
        }
    }

    pub fn clear_grid(&mut self) {
        for row in &mut self.markers {
            row.fill('.');
        }
        self.reclassify();
    }
}
