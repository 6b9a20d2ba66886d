pub mod render;

pub use render::{display_score, format_score};
