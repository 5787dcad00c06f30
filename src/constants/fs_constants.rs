#![allow(dead_code)]

// ===== File Type Bits =====
// Source: openbsd:src/sys/sys/stat.h
pub const S_IFMT: u64 = 0o170000; // Mask covering the file-type bits of a mode
pub const S_IFIFO: u64 = 0o010000; // Named pipe
pub const S_IFCHR: u64 = 0o020000; // Character device
pub const S_IFDIR: u64 = 0o040000; // Directory
pub const S_IFBLK: u64 = 0o060000; // Block device
pub const S_IFREG: u64 = 0o100000; // Regular file
pub const S_IFLNK: u64 = 0o120000; // Symbolic link
pub const S_IFSOCK: u64 = 0o140000; // Socket

// ===== chflags(2) File Flags =====
// Source: openbsd:src/sys/sys/stat.h
// The user-settable and superuser-settable halves of the immutable and
// append-only flags.  Setting any of these on a file the fuzzing transport
// depends on makes that file unmodifiable until cleared from single-user
// mode, so the sanitizer strips them wholesale.
pub const UF_IMMUTABLE: u64 = 0x00000002; // File may not be changed
pub const UF_APPEND: u64 = 0x00000004; // Writes may only append
pub const SF_IMMUTABLE: u64 = 0x00020000; // File may not be changed (superuser)
pub const SF_APPEND: u64 = 0x00040000; // Writes may only append (superuser)

// ===== Memory Protection Flags =====
// Source: openbsd:src/sys/sys/mman.h
pub const PROT_NONE: u64 = 0x00;
pub const PROT_READ: u64 = 0x01;
pub const PROT_WRITE: u64 = 0x02;
pub const PROT_EXEC: u64 = 0x04;

// ===== Memory Mapping Flags =====
// Source: openbsd:src/sys/sys/mman.h
pub const MAP_SHARED: u64 = 0x0001;
pub const MAP_PRIVATE: u64 = 0x0002;
pub const MAP_FIXED: u64 = 0x0010;
pub const MAP_ANON: u64 = 0x1000; // Anonymous memory, fd is ignored

// ===== Page Size Constants =====
// amd64 uses 4KB pages; other OpenBSD archs would override the target's
// page_size field, not these.
pub const PAGESHIFT: u64 = 12;
pub const PAGESIZE: u64 = 1 << PAGESHIFT;
