pub mod chart;
pub mod interview;
pub mod member;

pub use chart::{Cell, MemberCounts, StarChart};
pub use interview::InterviewEvent;
pub use member::Member;
