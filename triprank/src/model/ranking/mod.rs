mod color_scale;
mod criterion;
mod linear_scale;
pub mod ranking_ops;
mod ranking_row;

pub use color_scale::{ColorScale, Rgb};
pub use criterion::RankingCriterion;
pub use linear_scale::LinearScale;
pub use ranking_row::RankingRow;
