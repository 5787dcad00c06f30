//! Syscall-argument sanitization for kernel fuzzing targets.
//!
//! A fuzzer that feeds generated programs to a real kernel has to keep the
//! generator from emitting calls that take down its own transport or pollute
//! coverage collection: marking the control tty immutable, creating device
//! nodes that shadow the executor's reserved coverage descriptors, writing to
//! the raw root disk.  This crate is that guard layer.  It runs once per
//! generated call, immediately after generation/mutation and before
//! execution, and rewrites specific constant arguments in place.
//!
//! The crate is split the way the concerns are split:
//! - `interface` holds the host-facing types: the call/argument model the
//!   sanitizer mutates and the per-(os, arch) target description it is wired
//!   into.
//! - `sanitization` holds the policy engines: the family-generic Unix
//!   sanitizer, the OpenBSD-specific sanitizer layered on top of it, and the
//!   BSD device-number codec the latter needs.
//! - `constants` holds the OS constants, kept as named values so a port to a
//!   related BSD edits one module.
//!
//! Sanitizers are stateless after construction and never change the shape of
//! a call, only numeric payloads of constant arguments at fixed positions.

pub mod constants;
pub mod interface;
pub mod sanitization;

mod tests;
