//! Family-generic sanitization shared by the unix-like targets.

use log::debug;

use crate::interface::target::{Target, TargetError};
use crate::interface::types::Call;
use crate::sanitization::CallSanitizer;

// mmap(addr, len, prot, flags, fd, offset)
const MMAP_FLAGS_ARG: usize = 3;

/// The fallback policy engine for any unix-like OS.  OS-specific sanitizers
/// hold one of these and delegate every call they do not special-case.
pub struct UnixSanitizer {
    map_fixed: u64,
}

impl UnixSanitizer {
    pub fn new(target: &Target) -> Result<UnixSanitizer, TargetError> {
        Ok(UnixSanitizer {
            map_fixed: target.get_const("MAP_FIXED")?,
        })
    }
}

impl CallSanitizer for UnixSanitizer {
    fn sanitize_call(&self, call: &mut Call) {
        if call.call_name() == "mmap" {
            // Force MAP_FIXED, otherwise the kernel picks the address and
            // replayed programs stop being deterministic.
            if let Some(flags) = call.const_arg_mut(MMAP_FLAGS_ARG) {
                if flags.val & self.map_fixed == 0 {
                    debug!("mmap: forcing MAP_FIXED into flags {:#x}", flags.val);
                }
                flags.val |= self.map_fixed;
            }
        }
    }
}
