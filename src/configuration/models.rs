pub mod cluster_configuration;
pub mod status_watch_settings;
