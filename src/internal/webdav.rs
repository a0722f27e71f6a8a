pub mod enums;
pub mod functions;
pub mod impl_traits;
pub mod structs;
pub mod traits;
