pub mod upsert_repository;
