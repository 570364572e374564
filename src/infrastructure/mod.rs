pub mod detectors;
pub mod observability;
