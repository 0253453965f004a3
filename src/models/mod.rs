pub mod enriched;
pub mod entities;
pub mod errors;
pub mod templates;
