//! Turns raw form input into the classifier's numeric feature vector.
pub mod measurements;
pub mod stem;

pub use measurements::*;
pub use stem::*;
