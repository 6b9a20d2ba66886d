pub mod persistence;

pub use persistence::{load_input, save_input};
