//! Property tests for command-line flag scanning.

use proptest::prelude::*;

use create_service_push::config::{
    Invocation, ManifestChoice, NO_PUSH_FLAG, NO_SERVICE_MANIFEST_FLAG, SERVICE_MANIFEST_FLAG,
};

/// Arguments `cf push` might receive; never one of our flags
fn push_arg() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap(),
        Just("-f".to_string()),
        Just("-i".to_string()),
        Just("--no-start".to_string()),
    ]
    .prop_filter("not a plugin flag", |s| {
        s != NO_PUSH_FLAG && s != NO_SERVICE_MANIFEST_FLAG && s != SERVICE_MANIFEST_FLAG
    })
}

/// Plugin flags, each as the tokens it occupies on the command line
fn plugin_flag() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        Just(vec![NO_PUSH_FLAG.to_string()]),
        Just(vec![NO_SERVICE_MANIFEST_FLAG.to_string()]),
        proptest::string::string_regex("[a-z]{1,8}\\.yml")
            .unwrap()
            .prop_map(|p| vec![SERVICE_MANIFEST_FLAG.to_string(), p]),
    ]
}

/// Push arguments with plugin flags interleaved
fn command_line() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop_oneof![push_arg().prop_map(|a| vec![a]), plugin_flag()],
        0..12,
    )
    .prop_map(|parts| parts.into_iter().flatten().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning never panics on arbitrary arguments.
    #[test]
    fn property_scan_never_panics(args in proptest::collection::vec("(?s).{0,16}", 0..8)) {
        let _ = Invocation::scan(&args);
    }

    /// PROPERTY: `push` receives every argument, in order, plugin flags included.
    #[test]
    fn property_arguments_are_forwarded_verbatim(args in command_line()) {
        let inv = Invocation::scan(&args).unwrap();
        prop_assert_eq!(&inv.forwarded, &args);
    }

    /// PROPERTY: `--no-push` anywhere disables the push.
    #[test]
    fn property_no_push_anywhere(
        mut args in command_line(),
        position in any::<prop::sample::Index>(),
    ) {
        let at = position.index(args.len() + 1);
        // Don't split a `--service-manifest <path>` pair.
        let at = if at > 0 && args[at - 1] == SERVICE_MANIFEST_FLAG { at - 1 } else { at };
        args.insert(at, NO_PUSH_FLAG.to_string());

        let inv = Invocation::scan(&args).unwrap();
        prop_assert!(!inv.push);
    }

    /// PROPERTY: the first manifest flag wins.
    #[test]
    fn property_first_manifest_flag_wins(args in command_line()) {
        let inv = Invocation::scan(&args).unwrap();
        let first = args
            .iter()
            .position(|a| a == SERVICE_MANIFEST_FLAG || a == NO_SERVICE_MANIFEST_FLAG);
        let expected = match first {
            None => ManifestChoice::Default,
            Some(i) if args[i] == NO_SERVICE_MANIFEST_FLAG => ManifestChoice::Disabled,
            Some(i) => ManifestChoice::Path(args[i + 1].clone().into()),
        };
        prop_assert_eq!(inv.manifest, expected);
    }
}
