pub mod webdav_client;
pub mod webdav_session;
