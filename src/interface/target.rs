//! Fuzzing-target descriptions and the global target registry.
//!
//! A `Target` describes one (os, arch) pair: its symbolic-constant table,
//! its page size, and the two hook slots the OS adapter fills in at
//! initialization (the call-sanitization hook and the mmap builder).  The
//! constant table is the only place OS constants enter the crate at
//! runtime; resolving a name that the table does not carry is a fatal
//! configuration error, not a per-call condition.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::interface::mmap::PosixMmapBuilder;
use crate::interface::types::Call;
use crate::sanitization::CallSanitizer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    /// A constant required at initialization is missing from the target
    /// description.  The target cannot be used.
    #[error("{os}/{arch}: unknown constant {name}")]
    UnknownConst {
        os: String,
        arch: String,
        name: String,
    },
}

/// Description of one fuzzing target.
///
/// Stateless after initialization apart from the hook slots, which are
/// written once during OS-adapter setup and only read afterwards.
pub struct Target {
    pub os: &'static str,
    pub arch: &'static str,
    pub page_size: u64,
    consts: HashMap<&'static str, u64>,
    sanitize: RwLock<Option<Arc<dyn CallSanitizer>>>,
    mmap_builder: RwLock<Option<PosixMmapBuilder>>,
}

impl Target {
    pub fn new(
        os: &'static str,
        arch: &'static str,
        page_size: u64,
        consts: &[(&'static str, u64)],
    ) -> Target {
        Target {
            os,
            arch,
            page_size,
            consts: consts.iter().cloned().collect(),
            sanitize: RwLock::new(None),
            mmap_builder: RwLock::new(None),
        }
    }

    /// Resolve a symbolic OS constant from the target description.
    pub fn get_const(&self, name: &str) -> Result<u64, TargetError> {
        self.consts
            .get(name)
            .copied()
            .ok_or_else(|| TargetError::UnknownConst {
                os: self.os.to_string(),
                arch: self.arch.to_string(),
                name: name.to_string(),
            })
    }

    /// Install the call-sanitization hook.  Called once by the OS adapter.
    pub fn set_sanitize_hook(&self, hook: Arc<dyn CallSanitizer>) {
        *self.sanitize.write() = Some(hook);
    }

    /// Run the installed sanitization hook over one call.  The framework
    /// invokes this exactly once per generated/mutated call, before
    /// execution; a target with no hook installed leaves calls untouched.
    pub fn sanitize_call(&self, call: &mut Call) {
        if let Some(hook) = self.sanitize.read().as_ref() {
            hook.sanitize_call(call);
        }
    }

    /// Install the mmap builder.  Called once by the OS adapter.
    pub fn set_mmap_builder(&self, builder: PosixMmapBuilder) {
        *self.mmap_builder.write() = Some(builder);
    }

    /// Build the fixed mmap call mapping `npages` pages at `page_index`,
    /// if a builder has been installed.
    pub fn make_mmap(&self, page_index: u64, npages: u64) -> Option<Call> {
        self.mmap_builder
            .read()
            .as_ref()
            .map(|builder| builder.make_mmap(page_index, npages, self.page_size))
    }
}

/// All initialized targets, keyed by (os, arch).  Targets register here
/// once at startup; workers look them up read-only afterwards.
static TARGET_MAP: Lazy<DashMap<(String, String), Arc<Target>>> = Lazy::new(DashMap::new);

pub fn register_target(target: Arc<Target>) {
    TARGET_MAP.insert((target.os.to_string(), target.arch.to_string()), target);
}

pub fn get_target(os: &str, arch: &str) -> Option<Arc<Target>> {
    TARGET_MAP
        .get(&(os.to_string(), arch.to_string()))
        .map(|entry| Arc::clone(entry.value()))
}
