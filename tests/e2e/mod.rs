//! End-to-end tests for hookshed
//!
//! Every test drives the compiled binary inside a throwaway git repository.

pub mod helpers;

mod delegator;
mod lifecycle;
mod run;
mod seed;
mod show;

pub use helpers::*;
