pub mod aggregator;
pub mod log;
pub mod logic;
pub mod normalizer;
pub mod reconstructor;
pub mod report;
