use crate::config::Markers;
use crate::models::Member;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Own,
    Done,
    Scheduled,
}

impl Cell {
    /// Literal string written for this cell.
    pub fn marker<'a>(&self, markers: &'a Markers) -> &'a str {
        match self {
            Cell::Empty => &markers.empty,
            Cell::Own => &markers.own,
            Cell::Done => &markers.done,
            Cell::Scheduled => &markers.scheduled,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemberCounts {
    pub interviewer_count: u32,
    pub interviewee_count: u32,
}

/// The computed N×N matrix plus per-member counts, indexed like `roster`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarChart {
    pub roster: Vec<Member>,
    pub cells: Vec<Vec<Cell>>,
    pub counts: Vec<MemberCounts>,
}

impl StarChart {
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Grid rendered with the given markers.
    pub fn labels(&self, markers: &Markers) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.marker(markers).to_string()).collect())
            .collect()
    }
}
