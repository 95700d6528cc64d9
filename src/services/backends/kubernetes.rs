pub mod cluster_client;
pub mod cluster_error;
pub mod list_fetcher;
pub mod resource_update_handler;
pub mod resource_url_builder;
pub mod status_fetcher;
pub mod watch_registry;
pub mod watch_session;
