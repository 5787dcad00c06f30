//! Device-number layout constants for the OpenBSD sanitizer.
//!
//! These are fixed by the target OS's device naming convention and by the
//! executor's reserved descriptor range.  A port to a related BSD overrides
//! them here; nothing derives them.

// ===== Reserved Device Majors =====
// Source: openbsd:src/etc/etc.amd64/MAKEDEV
pub const DEV_FD_MAJOR: u64 = 22; // /dev/fd/* file-descriptor pseudo-devices
pub const RAWDISK_MAJOR: u64 = 4; // /dev/sd0c, the raw root disk
pub const RAWDISK_MINOR: u64 = 2;

// /dev/null as a packed dev_t (major 2, minor 2).  Substituted for any
// device number the sanitizer refuses to let a generated mknod create.
pub const DEV_NULL: u64 = 0x0202;

// ===== Coverage Descriptor Band =====
// The executor keeps its kcov descriptors and control pipes in a fixed fd
// band; /dev/fd/X nodes with X in that band alias them.  Bounds are the
// executor's kCoverFd and kOutPipeFd descriptors.
pub const KCOV_FD_MINOR_MIN: u64 = 232;
pub const KCOV_FD_MINOR_MAX: u64 = 248; // Exclusive
