pub mod auth_config;
pub mod auth_error;
pub mod credential_store;
pub mod webdav_auth;
