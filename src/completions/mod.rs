pub mod generator;

pub use generator::{generate_completions, render_completions, Shell};
