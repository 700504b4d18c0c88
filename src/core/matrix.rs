use crate::core::pairing::PairingIndex;
use crate::models::{Cell, MemberCounts, Member, StarChart};

/// Fill the N×N star chart for `roster`.
///
/// For each ordered pair (row, col) the checks run in a fixed order:
/// 1. diagonal cells get [`Cell::Own`]
/// 2. a completed entry increments the row member's interviewer count and the
///    column member's interviewee count, and marks the cell [`Cell::Done`]
/// 3. a pending entry marks the cell [`Cell::Scheduled`], overwriting a done
///    mark from step 2 while the counts stay incremented
///
/// The diagonal keeps its own marker, but a self-interview still counts.
/// (The spreadsheet script this replaces let ◎/予 overwrite the diagonal.)
pub fn build_chart(roster: Vec<Member>, index: &PairingIndex) -> StarChart {
    let n = roster.len();
    let mut cells = vec![vec![Cell::Empty; n]; n];
    let mut counts = vec![MemberCounts::default(); n];

    for row in 0..n {
        let interviewer = roster[row].id.as_deref();

        for col in 0..n {
            let interviewee = roster[col].id.as_deref();
            let diagonal = row == col;

            if diagonal {
                cells[row][col] = Cell::Own;
            }

            let status = index.lookup(interviewer, interviewee);

            if status.any_done {
                counts[row].interviewer_count += 1;
                counts[col].interviewee_count += 1;
                if !diagonal {
                    cells[row][col] = Cell::Done;
                }
            }

            if status.any_scheduled && !diagonal {
                cells[row][col] = Cell::Scheduled;
            }
        }
    }

    StarChart {
        roster,
        cells,
        counts,
    }
}
