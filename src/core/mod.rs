pub mod chart;
pub mod matrix;
pub mod pairing;
pub mod roster;

pub use chart::ChartLogic;
pub use matrix::build_chart;
pub use pairing::{PairStatus, PairingIndex};
pub use roster::normalize;
