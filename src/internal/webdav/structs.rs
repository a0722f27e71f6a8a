pub mod directory_upload;
pub mod move_retry_policy;
pub mod request_outcome;
pub mod upload_source;
pub mod webdav_error;
pub mod webdav_request;
