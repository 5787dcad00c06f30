//! Per-call argument sanitization.
//!
//! Two engines implement [`CallSanitizer`]: the family-generic Unix
//! sanitizer and the OpenBSD-specific one, which holds the generic engine
//! and delegates every call it does not special-case.  Both are pure,
//! synchronous, and reentrant; the only state either carries is constants
//! resolved at construction.

pub mod devnum;
pub mod openbsd;
pub mod unix;

pub use devnum::*;
pub use openbsd::*;
pub use unix::*;

use crate::interface::types::Call;

/// A per-call rewrite pass.
///
/// Implementations mutate constant-argument values in place and must never
/// change a call's shape (argument count, variants, or name).  A call is
/// sanitized exactly once, under exclusive access guaranteed by the caller.
pub trait CallSanitizer: Send + Sync {
    fn sanitize_call(&self, call: &mut Call);
}
