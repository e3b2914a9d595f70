pub mod registry;
pub mod report;
