pub mod errors;
pub mod experiment;
pub mod extract;
pub mod invoke;
pub mod stats;
pub mod sweep;
pub mod types;
