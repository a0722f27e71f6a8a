pub mod reqwest_transport;
pub mod tokio_local_fs;
