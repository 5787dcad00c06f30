//! Posix mmap-call construction.
//!
//! Generated programs get their working memory from fixed anonymous
//! mappings the framework prepends to every program.  The builder resolves
//! the protection and flag constants once from the target description and
//! stamps out `mmap` calls with page-granular address and length.

use crate::interface::target::{Target, TargetError};
use crate::interface::types::{Arg, Call};

/// Builds the fixed mmap(2) call shared by the posix-like targets.
#[derive(Debug, Clone, Copy)]
pub struct PosixMmapBuilder {
    prot: u64,
    flags: u64,
}

impl PosixMmapBuilder {
    pub fn new(target: &Target) -> Result<PosixMmapBuilder, TargetError> {
        let prot = target.get_const("PROT_READ")? | target.get_const("PROT_WRITE")?;
        let flags = target.get_const("MAP_ANON")?
            | target.get_const("MAP_PRIVATE")?
            | target.get_const("MAP_FIXED")?;
        Ok(PosixMmapBuilder { prot, flags })
    }

    /// An mmap call mapping `npages` pages at page `page_index`.  The fd
    /// argument is -1: the mapping is anonymous.
    pub fn make_mmap(&self, page_index: u64, npages: u64, page_size: u64) -> Call {
        // mmap(addr, len, prot, flags, fd, offset)
        Call::new(
            "mmap",
            vec![
                Arg::pointer(page_index * page_size),
                Arg::constant(npages * page_size),
                Arg::constant(self.prot),
                Arg::constant(self.flags),
                Arg::constant(!0u64),
                Arg::constant(0),
            ],
        )
    }
}
