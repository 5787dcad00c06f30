pub mod dev_constants;
pub mod fs_constants;

pub use dev_constants::*;
pub use fs_constants::*;
