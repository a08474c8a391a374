pub mod config_ops;
pub mod convert_ops;
pub mod edit_ops;
pub mod load;
pub mod profile_ops;
