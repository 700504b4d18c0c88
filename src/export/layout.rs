//! Placement of a [`StarChart`] on the sheet.
//!
//! ```text
//!        B            C        D            E..
//!   1  A1: updated-at stamp
//!   2                          given        received count per column
//!   3                          rank label   rank per column
//!   4   received   rank label  corner       name per column
//!   5                          interviewer
//!   6+  count      rank        name         cells
//! ```

use crate::config::Config;
use crate::export::sheet::CellWrite;
use crate::models::StarChart;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const START_ROW: u32 = 4;
pub const START_COLUMN: u32 = 4;

/// Sheet row of roster member `index` (1-based).
pub fn member_row(index: usize) -> u32 {
    index as u32 + START_ROW + 2
}

/// Sheet column of roster member `index` (1-based).
pub fn member_col(index: usize) -> u32 {
    index as u32 + START_COLUMN + 1
}

/// Column letters for a 1-based column number: 1 → A, 26 → Z, 27 → AA.
pub fn col_name(mut num: u32) -> String {
    let mut letters = Vec::new();
    while num > 0 {
        let rem = (num - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        num = (num - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Every write needed to render `chart`, in drawing order.
pub fn plan<Tz>(chart: &StarChart, cfg: &Config, now: &DateTime<Tz>) -> Vec<CellWrite>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let markers = &cfg.markers;
    let labels = &cfg.labels;
    let n = chart.len();
    let mut writes = Vec::with_capacity(n * n + 6 * n + 7);

    // grid
    for row in 0..n {
        for col in 0..n {
            let marker = chart.cell(row, col).marker(markers);
            if !marker.is_empty() {
                writes.push(CellWrite::text(member_row(row), member_col(col), marker));
            }
        }
    }

    // row headers: name, rank, interviewer count
    for (row, member) in chart.roster.iter().enumerate() {
        let r = member_row(row);
        writes.push(CellWrite::text(r, START_COLUMN, member.display_name()));
        if let Some(rank) = member.rank {
            writes.push(CellWrite::number(r, START_COLUMN - 1, rank));
        }
        writes.push(CellWrite::number(
            r,
            START_COLUMN - 2,
            chart.counts[row].interviewer_count as f64,
        ));
    }

    // column headers: name, rank, interviewee count
    for (col, member) in chart.roster.iter().enumerate() {
        let c = member_col(col);
        writes.push(CellWrite::text(START_ROW, c, member.display_name()));
        if let Some(rank) = member.rank {
            writes.push(CellWrite::number(START_ROW - 1, c, rank));
        }
        writes.push(CellWrite::number(
            START_ROW - 2,
            c,
            chart.counts[col].interviewee_count as f64,
        ));
    }

    let stamp = now.format("%Y-%m-%d %H:%M:%S");
    writes.push(CellWrite::text(1, 1, format!("{}{stamp}", labels.updated_at)));
    writes.push(CellWrite::text(START_ROW - 1, START_COLUMN, &labels.rank));
    writes.push(CellWrite::text(START_ROW, START_COLUMN - 1, &labels.rank));
    writes.push(CellWrite::text(START_ROW, START_COLUMN - 2, &labels.received));
    writes.push(CellWrite::text(START_ROW - 2, START_COLUMN, &labels.given));
    writes.push(CellWrite::formula(START_ROW, START_COLUMN, &labels.corner_formula));
    writes.push(CellWrite::text(START_ROW + 1, START_COLUMN, &labels.interviewer));

    writes
}
