pub mod mmap;
pub mod target;
pub mod types;

pub use mmap::*;
pub use target::*;
pub use types::*;
