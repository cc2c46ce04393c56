pub mod entry;
pub mod register_type;
pub mod return_status;

pub use entry::Entry;
pub use register_type::RegisterType;
pub use return_status::ReturnStatus;
