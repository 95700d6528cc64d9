pub mod backends;
pub mod base;
pub mod flux_status_service;
pub mod result_cache;
