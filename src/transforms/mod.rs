pub mod method_a;
pub mod method_b;
pub mod runs;

pub use runs::{Run, Runs, MAX_RUN};
