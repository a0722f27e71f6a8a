pub mod move_resource;
pub mod put_directory;
pub mod put_file;
pub mod resource;
