use crate::models::Member;
use std::cmp::Ordering;

/// Build the ordered roster used for both axes of the chart.
///
/// - drops inactive members and members without a name or an identity
/// - sorts by rank ascending; members without a rank go last
/// - the sort is stable, so unranked members keep their input order
/// - duplicate identities are passed through untouched
pub fn normalize(members: Vec<Member>) -> Vec<Member> {
    let mut roster: Vec<Member> = members.into_iter().filter(Member::is_eligible).collect();
    roster.sort_by(|a, b| compare_rank(a.rank, b.rank));
    roster
}

fn compare_rank(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}
