//! Static resources for the filing wizard.

mod steps;

pub use steps::*;
