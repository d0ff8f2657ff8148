pub mod cli;
pub mod error;
pub mod log;
pub mod model;
pub mod range;
pub mod report;
pub mod repos;
