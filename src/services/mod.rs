pub mod enrichment;
pub mod filters;
pub mod fixtures;
pub mod renewal;
pub mod summary;
pub mod uptime;
