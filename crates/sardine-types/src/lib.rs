pub mod api;
pub mod models;
pub mod mood;
pub mod stamps;
pub mod stations;

pub use models::{AdviceType, Can, Industry, ReleasedSardine};
pub use stamps::Stamp;
