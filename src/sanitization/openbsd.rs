//! OpenBSD-specific call sanitization.
//!
//! The rules here exist because a handful of OpenBSD syscalls can, with the
//! wrong constant arguments, take down the fuzzing session itself rather
//! than just fail: chflags can freeze the tty backing the control
//! connection, and mknod can create vnodes the kernel asserts on or device
//! nodes that alias the executor's coverage descriptors or the raw root
//! disk.  Everything else is delegated to the family-generic sanitizer.

use std::sync::Arc;

use log::debug;

use crate::constants::dev_constants::{DEV_NULL, RAWDISK_MAJOR, RAWDISK_MINOR};
use crate::constants::fs_constants::{
    MAP_ANON, MAP_FIXED, MAP_PRIVATE, MAP_SHARED, PAGESIZE, PROT_EXEC, PROT_READ, PROT_WRITE,
    SF_APPEND, SF_IMMUTABLE, S_IFBLK, S_IFCHR, S_IFDIR, S_IFIFO, S_IFLNK, S_IFMT, S_IFREG,
    S_IFSOCK, UF_APPEND, UF_IMMUTABLE,
};
use crate::interface::mmap::PosixMmapBuilder;
use crate::interface::target::{register_target, Target, TargetError};
use crate::interface::types::Call;
use crate::sanitization::devnum::{dev_major, dev_minor, is_kcov_fd};
use crate::sanitization::unix::UnixSanitizer;
use crate::sanitization::CallSanitizer;

// Offsets of the mode and dev arguments relative to arg_start.
const MKNOD_MODE: usize = 0;
const MKNOD_DEV: usize = 1;

// chflags(2) flags a generated call must never set.
const BAD_MUTABILITY_FLAGS: [u64; 4] = [UF_IMMUTABLE, UF_APPEND, SF_IMMUTABLE, SF_APPEND];

/// The OpenBSD policy engine.  Holds the two file-type constants resolved
/// from the target description and the family-generic sanitizer it
/// delegates unmatched calls to.
pub struct OpenbsdSanitizer {
    unix: UnixSanitizer,
    s_ifmt: u64,
    s_ifchr: u64,
}

/// Wire the OpenBSD adapter into a target: resolve the constants the
/// sanitizer needs, install it as the target's call-sanitization hook, and
/// install the posix mmap builder.  A constant missing from the target
/// description fails initialization; the target cannot be used without it.
pub fn init_target(target: &Arc<Target>) -> Result<(), TargetError> {
    let sanitizer = OpenbsdSanitizer {
        unix: UnixSanitizer::new(target)?,
        s_ifmt: target.get_const("S_IFMT")?,
        s_ifchr: target.get_const("S_IFCHR")?,
    };

    target.set_mmap_builder(PosixMmapBuilder::new(target)?);
    target.set_sanitize_hook(Arc::new(sanitizer));
    Ok(())
}

impl CallSanitizer for OpenbsdSanitizer {
    fn sanitize_call(&self, call: &mut Call) {
        // The "at" variants take a leading directory descriptor, shifting
        // the interesting arguments one position right.
        match call.call_name() {
            "chflagsat" => self.strip_mutability_flags(call, 2),
            "chflags" | "fchflags" => self.strip_mutability_flags(call, 1),
            "mknodat" => self.sanitize_mknod(call, 2),
            "mknod" => self.sanitize_mknod(call, 1),
            _ => self.unix.sanitize_call(call),
        }
    }
}

impl OpenbsdSanitizer {
    /// Clear the immutable and append-only flags from a chflags-family
    /// flags argument.  Setting them on a file the execution transport
    /// depends on (the tty/pty devices backing the control connection in
    /// particular) kills the session uncontrollably, so they are stripped
    /// before the call ever runs.
    fn strip_mutability_flags(&self, call: &mut Call, arg_start: usize) {
        if let Some(flags) = call.const_arg_mut(arg_start) {
            for &flag in BAD_MUTABILITY_FLAGS.iter() {
                flags.val &= !flag;
            }
        }
    }

    fn sanitize_mknod(&self, call: &mut Call, arg_start: usize) {
        // A mode whose file-type bits are all set maps to no valid vnode
        // type; the kernel answers with an assertion, not an error.  Turn
        // the request into a character device instead.
        if let Some(mode) = call.const_arg_mut(arg_start + MKNOD_MODE) {
            if mode.val & self.s_ifmt == self.s_ifmt {
                mode.val &= !self.s_ifmt;
                mode.val |= self.s_ifchr;
            }
        }

        if let Some(dev) = call.const_arg_mut(arg_start + MKNOD_DEV) {
            // /dev/fd/X nodes where X is an open kcov descriptor interfere
            // with coverage collection and cause corpus explosion.
            if is_kcov_fd(dev.val) {
                debug!("mknod: dev {:#x} aliases a coverage fd, using /dev/null", dev.val);
                dev.val = DEV_NULL;
            }

            // /dev/sd0c refers to the raw root disk.
            if dev_major(dev.val) == RAWDISK_MAJOR && dev_minor(dev.val) == RAWDISK_MINOR {
                debug!("mknod: dev {:#x} is the raw root disk, using /dev/null", dev.val);
                dev.val = DEV_NULL;
            }
        }
    }
}

/// Name→value table backing `get_const` for the canned openbsd/amd64
/// description.  Values live in `constants::fs_constants`.
pub const OPENBSD_AMD64_CONSTS: &[(&str, u64)] = &[
    ("MAP_ANON", MAP_ANON),
    ("MAP_FIXED", MAP_FIXED),
    ("MAP_PRIVATE", MAP_PRIVATE),
    ("MAP_SHARED", MAP_SHARED),
    ("PROT_EXEC", PROT_EXEC),
    ("PROT_READ", PROT_READ),
    ("PROT_WRITE", PROT_WRITE),
    ("S_IFBLK", S_IFBLK),
    ("S_IFCHR", S_IFCHR),
    ("S_IFDIR", S_IFDIR),
    ("S_IFIFO", S_IFIFO),
    ("S_IFLNK", S_IFLNK),
    ("S_IFMT", S_IFMT),
    ("S_IFREG", S_IFREG),
    ("S_IFSOCK", S_IFSOCK),
];

/// Build, initialize, and register the openbsd/amd64 target.
pub fn openbsd_amd64() -> Result<Arc<Target>, TargetError> {
    let target = Arc::new(Target::new(
        "openbsd",
        "amd64",
        PAGESIZE,
        OPENBSD_AMD64_CONSTS,
    ));
    init_target(&target)?;
    register_target(Arc::clone(&target));
    Ok(target)
}
