//! Plain-text month view.
//!
//! Draws a [`MonthGrid`] as a seven-column table for the terminal. Multi-day
//! activities keep one row per lane inside a week so their bars line up from
//! cell to cell; lanes unused in a week are folded away.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use crate::services::month_grid::{GridCell, LoadStatus, MonthGrid, Occurrence, Position};
use crate::ui::labels::Labels;
use crate::ui::utils::{fit, parse_color};

const DEFAULT_CELL_WIDTH: usize = 16;
const MIN_CELL_WIDTH: usize = 6;
const COLUMN_SEPARATOR: &str = " | ";

pub struct MonthTextRenderer<'a> {
    labels: &'a Labels,
    first_day_of_week: u8,
    cell_width: usize,
    use_color: bool,
}

impl<'a> MonthTextRenderer<'a> {
    pub fn new(labels: &'a Labels, first_day_of_week: u8) -> Self {
        Self {
            labels,
            first_day_of_week,
            cell_width: DEFAULT_CELL_WIDTH,
            use_color: false,
        }
    }

    pub fn cell_width(mut self, width: usize) -> Self {
        self.cell_width = width.max(MIN_CELL_WIDTH);
        self
    }

    /// Paint occurrences in their category color (24-bit ANSI).
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render(&self, grid: &MonthGrid) -> String {
        let mut out = String::new();
        let width = self.cell_width;
        let separator = "-".repeat(width * 7 + COLUMN_SEPARATOR.len() * 6);

        let _ = writeln!(
            out,
            "{} {}",
            self.labels.month_name(grid.month0()),
            grid.year()
        );
        let headers: Vec<String> = self
            .labels
            .weekday_headers(self.first_day_of_week)
            .iter()
            .map(|name| fit(name, width))
            .collect();
        let _ = writeln!(out, "{}", headers.join(COLUMN_SEPARATOR).trim_end());
        let _ = writeln!(out, "{}", separator);

        for week in grid.cells().chunks(7) {
            let columns = self.week_columns(week);
            let height = columns.iter().map(Vec::len).max().unwrap_or(0);

            for line in 0..height {
                let row: Vec<String> = (0..7)
                    .map(|col| {
                        columns
                            .get(col)
                            .and_then(|lines| lines.get(line))
                            .cloned()
                            .unwrap_or_else(|| fit("", width))
                    })
                    .collect();
                let _ = writeln!(out, "{}", row.join(COLUMN_SEPARATOR).trim_end());
            }
            let _ = writeln!(out, "{}", separator);
        }

        match grid.status() {
            LoadStatus::FetchFailed { .. } => {
                let _ = writeln!(out, "{}", self.labels.fetch_failed);
            }
            LoadStatus::Loaded { .. } if grid.occurrence_count() == 0 => {
                let _ = writeln!(out, "{}", self.labels.no_activities);
            }
            LoadStatus::Loaded { .. } => {}
        }

        out
    }

    /// Lines of each cell in one week row.
    fn week_columns(&self, week: &[GridCell]) -> Vec<Vec<String>> {
        // Lanes used in this week, mapped to consecutive rows in lane order.
        let rows: BTreeMap<usize, usize> = week
            .iter()
            .flat_map(GridCell::occurrences)
            .filter_map(|occurrence| occurrence.lane)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(row, lane)| (lane, row))
            .collect();

        week.iter()
            .map(|cell| {
                let mut lines = Vec::with_capacity(1 + rows.len());
                let header = cell
                    .day_of_month()
                    .map(|day| format!("{:>2}", day))
                    .unwrap_or_default();
                lines.push(fit(&header, self.cell_width));

                let mut lane_lines = vec![fit("", self.cell_width); rows.len()];
                let mut single_lines = Vec::new();
                for occurrence in cell.occurrences() {
                    let line = self.occurrence_line(occurrence);
                    match occurrence.lane.and_then(|lane| rows.get(&lane)) {
                        Some(&row) => lane_lines[row] = line,
                        None => single_lines.push(line),
                    }
                }

                lines.extend(lane_lines);
                lines.extend(single_lines);
                lines
            })
            .collect()
    }

    fn occurrence_line(&self, occurrence: &Occurrence) -> String {
        let text = fit(&occurrence_label(occurrence), self.cell_width);
        if !self.use_color {
            return text;
        }
        match parse_color(&occurrence.color) {
            Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
            None => text,
        }
    }
}

/// Text of one occurrence. Single days show time, title and location;
/// multi-day bars show title and location behind a position marker.
pub fn occurrence_label(occurrence: &Occurrence) -> String {
    let mut body = occurrence.title.clone();
    if let Some(location) = occurrence.location.as_deref() {
        body = format!("{} @ {}", body, location);
    }

    match occurrence.position {
        Position::Single => match occurrence.time.as_deref() {
            Some(time) => format!("{} {}", time, body),
            None => format!("* {}", body),
        },
        Position::Start => format!("[ {}", body),
        Position::Middle => format!("= {}", body),
        Position::End => format!("] {}", body),
    }
}
