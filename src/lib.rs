pub mod logging;
pub mod poi;
pub mod report;
