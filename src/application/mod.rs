// Application layer - Use cases over the repository seam
pub mod dashboard_repository;
pub mod dashboard_service;
pub mod view_state;
