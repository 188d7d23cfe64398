// Domain layer - Pure data shaping for the dashboard pages
pub mod color;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod master;
pub mod series;
pub mod stats;
