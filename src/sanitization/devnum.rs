//! BSD device-number codec.
//!
//! OpenBSD packs a device's major (class) and minor (instance) numbers into
//! one integer with the minor split around the major byte.  The sanitizer
//! needs the unpacking direction to classify device numbers a generated
//! mknod would create; `makedev` is the packing direction for callers that
//! build device numbers.

use crate::constants::dev_constants::{DEV_FD_MAJOR, KCOV_FD_MINOR_MAX, KCOV_FD_MINOR_MIN};

// Source: openbsd:src/sys/sys/types.h
pub fn dev_major(dev: u64) -> u64 {
    (dev >> 8) & 0xff
}

// Source: openbsd:src/sys/sys/types.h
pub fn dev_minor(dev: u64) -> u64 {
    (dev & 0xff) | ((dev & 0xffff_0000) >> 8)
}

/// Pack a (major, minor) pair into a dev_t.
pub fn makedev(major: u64, minor: u64) -> u64 {
    (major << 8) | (minor & 0xff) | ((minor & 0xff_ff00) << 8)
}

/// Does this device number alias one of the executor's reserved coverage
/// descriptors?  /dev/fd/X nodes in that band interfere with kcov data
/// collection and cause corpus explosion.
pub fn is_kcov_fd(dev: u64) -> bool {
    let major = dev_major(dev);
    let minor = dev_minor(dev);

    major == DEV_FD_MAJOR && minor >= KCOV_FD_MINOR_MIN && minor < KCOV_FD_MINOR_MAX
}
