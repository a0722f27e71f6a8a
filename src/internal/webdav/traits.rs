pub mod local_fs;
pub mod transport;
