//! The program representation the sanitizer operates on.
//!
//! A generated test program is a sequence of calls; this crate only ever
//! sees one call at a time, by mutable reference, and only ever rewrites
//! the numeric payloads of constant-valued arguments.  The model derives
//! serde traits so the host framework can persist corpus programs in
//! whatever format it picks.

use log::warn;
use serde::{Deserialize, Serialize};

/// One system-call invocation within a generated test program.
///
/// `name` may carry a `$variant` suffix for specialized descriptions of the
/// same syscall (`mknod$loop`); dispatch always goes through [`Call::call_name`],
/// which strips it.  The argument vector's length and variants are fixed by
/// the call's signature; sanitization mutates values in place and never
/// adds, removes, or reorders arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    pub args: Vec<Arg>,
}

impl Call {
    pub fn new(name: &str, args: Vec<Arg>) -> Call {
        Call {
            name: name.to_string(),
            args,
        }
    }

    /// The base syscall name, with any `$variant` suffix stripped.
    pub fn call_name(&self) -> &str {
        match self.name.find('$') {
            Some(idx) => &self.name[..idx],
            None => &self.name,
        }
    }

    /// The constant-valued argument at `idx`, if the call has one there.
    ///
    /// Sanitization rules assume a constant argument at a fixed position.
    /// If the argument is some other variant, or the call is shorter than
    /// the rule expects, the call's declared signature and the rule
    /// disagree; the rewrite is skipped and the inconsistency logged rather
    /// than guessed around.
    pub fn const_arg_mut(&mut self, idx: usize) -> Option<&mut ConstArg> {
        let args_len = self.args.len();
        match self.args.get_mut(idx) {
            Some(Arg::Const(arg)) => Some(arg),
            Some(_) => {
                warn!(
                    "{}: argument {} is not constant-valued, skipping rewrite",
                    self.name, idx
                );
                None
            }
            None => {
                warn!(
                    "{}: argument {} out of range ({} args), skipping rewrite",
                    self.name,
                    idx,
                    args_len
                );
                None
            }
        }
    }
}

/// One argument of a call.  Only `Const` is ever rewritten; the other
/// variants exist so the model is honest about argument polymorphism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arg {
    Const(ConstArg),
    Pointer(PointerArg),
    Data(DataArg),
}

impl Arg {
    pub fn constant(val: u64) -> Arg {
        Arg::Const(ConstArg { val })
    }

    pub fn pointer(address: u64) -> Arg {
        Arg::Pointer(PointerArg { address })
    }

    pub fn data(data: Vec<u8>) -> Arg {
        Arg::Data(DataArg { data })
    }
}

/// A literal unsigned integer argument (flags, modes, device numbers, fds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstArg {
    pub val: u64,
}

/// An address into the program's mapped memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerArg {
    pub address: u64,
}

/// An in-memory byte buffer argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataArg {
    pub data: Vec<u8>,
}
