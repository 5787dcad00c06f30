#[cfg(test)]
pub mod target_tests {
    use crate::constants::fs_constants::{
        MAP_ANON, MAP_FIXED, MAP_PRIVATE, PAGESIZE, PROT_READ, PROT_WRITE, S_IFCHR, S_IFMT,
    };
    use crate::interface::target::{get_target, Target, TargetError};
    use crate::interface::types::{Arg, Call};
    use crate::sanitization::openbsd::{init_target, openbsd_amd64, OPENBSD_AMD64_CONSTS};
    use std::sync::Arc;

    #[test]
    pub fn ut_get_const_resolves_from_table() {
        let target = Target::new("openbsd", "amd64", PAGESIZE, OPENBSD_AMD64_CONSTS);
        assert_eq!(target.get_const("S_IFMT").unwrap(), S_IFMT);
        assert_eq!(target.get_const("S_IFCHR").unwrap(), S_IFCHR);
        assert_eq!(target.get_const("MAP_FIXED").unwrap(), MAP_FIXED);
    }

    #[test]
    pub fn ut_get_const_unknown_name_is_fatal() {
        let target = Target::new("openbsd", "amd64", PAGESIZE, OPENBSD_AMD64_CONSTS);
        let err = target.get_const("S_IFWHT").unwrap_err();
        assert_eq!(
            err,
            TargetError::UnknownConst {
                os: "openbsd".to_string(),
                arch: "amd64".to_string(),
                name: "S_IFWHT".to_string(),
            }
        );
        assert!(err.to_string().contains("unknown constant S_IFWHT"));
    }

    #[test]
    pub fn ut_init_target_fails_without_required_consts() {
        // A description missing S_IFMT/S_IFCHR cannot host the sanitizer.
        let target = Arc::new(Target::new(
            "openbsd",
            "amd64",
            PAGESIZE,
            &[("MAP_FIXED", MAP_FIXED)],
        ));
        assert!(init_target(&target).is_err());
    }

    #[test]
    pub fn ut_uninitialized_target_leaves_calls_alone() {
        let target = Target::new("openbsd", "amd64", PAGESIZE, OPENBSD_AMD64_CONSTS);
        let mut call = Call::new(
            "chflags",
            vec![Arg::pointer(0x1000), Arg::constant(0xffff_ffff)],
        );
        let before = call.clone();
        target.sanitize_call(&mut call);
        assert_eq!(call, before);
        assert!(target.make_mmap(0, 1).is_none());
    }

    #[test]
    pub fn ut_init_target_installs_hook_and_mmap_builder() {
        let target = Arc::new(Target::new(
            "openbsd",
            "amd64",
            PAGESIZE,
            OPENBSD_AMD64_CONSTS,
        ));
        init_target(&target).unwrap();

        // Hook active: the chflags rule fires.
        let mut call = Call::new(
            "chflags",
            vec![Arg::pointer(0x1000), Arg::constant(0x2)],
        );
        target.sanitize_call(&mut call);
        assert_eq!(call.args[1], Arg::constant(0));

        // Builder active and producing the fixed mmap shape.
        let mmap = target.make_mmap(2, 3).unwrap();
        assert_eq!(mmap.name, "mmap");
        assert_eq!(mmap.args.len(), 6);
        assert_eq!(mmap.args[0], Arg::pointer(2 * PAGESIZE));
        assert_eq!(mmap.args[1], Arg::constant(3 * PAGESIZE));
        assert_eq!(mmap.args[2], Arg::constant(PROT_READ | PROT_WRITE));
        assert_eq!(
            mmap.args[3],
            Arg::constant(MAP_ANON | MAP_PRIVATE | MAP_FIXED)
        );
        assert_eq!(mmap.args[4], Arg::constant(!0u64));
        assert_eq!(mmap.args[5], Arg::constant(0));
    }

    #[test]
    pub fn ut_openbsd_amd64_registers_itself() {
        let target = openbsd_amd64().unwrap();
        let found = get_target("openbsd", "amd64").expect("target not registered");
        assert_eq!(found.os, target.os);
        assert_eq!(found.arch, target.arch);
        assert_eq!(found.page_size, PAGESIZE);
        assert!(get_target("openbsd", "sparc64").is_none());
    }

    #[test]
    pub fn ut_sanitized_call_survives_corpus_round_trip() {
        // The host persists corpus programs; a sanitized call must come
        // back bit-identical from the serialized form.
        let target = openbsd_amd64().unwrap();
        let mut call = Call::new(
            "mknod",
            vec![
                Arg::pointer(0x1000),
                Arg::constant(S_IFMT | 0o644),
                Arg::constant(0x0402),
            ],
        );
        target.sanitize_call(&mut call);

        let bytes = serde_cbor::to_vec(&call).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.cbor");
        std::fs::write(&path, &bytes).unwrap();

        let back: Call = serde_cbor::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(back, call);
    }
}
