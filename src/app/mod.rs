pub mod caller;
pub mod contract;
pub mod handler;
pub mod report;
