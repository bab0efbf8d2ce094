//! Override scenarios across the whole stack
//!
//! Each test opens a config file from disk, declares global and scoped
//! options, feeds command-line arguments and an injected environment, and
//! checks the effective values after `parse_args`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tierconf_core::{ConfigStore, FlagSet, MapEnv, Origin};
use tierconf_model::Format;
use tierconf_test_utils::TestDir;
use tierconf_test_utils::fixtures::SAMPLE_CONFIG;

const PREFIX: &str = "CONFTEST_";

// =============================================================================
// Test Infrastructure
// =============================================================================

/// A store over `SAMPLE_CONFIG` with the given environment.
fn open_sample(dir: &TestDir, env: MapEnv, prefix: &str) -> ConfigStore<MapEnv> {
    let path = dir.write("app.ini", SAMPLE_CONFIG);
    ConfigStore::open(&path, Format::default())
        .unwrap()
        .with_environment(env)
        .with_env_prefix(prefix)
}

fn custom_scope(d: &str) -> FlagSet {
    let mut custom = FlagSet::new("custom");
    custom.string("d", d, "");
    custom
}

// =============================================================================
// Global scope
// =============================================================================

#[test]
fn test_env_fills_options_missing_from_file() {
    let dir = TestDir::new();
    let env = MapEnv::new()
        .with("CONFTEST_D", "EnvD")
        .with("CONFTEST_E", "true")
        .with("CONFTEST_F", "5.5");
    let mut store = open_sample(&dir, env, PREFIX);
    store
        .global_mut()
        .bool("a", false, "")
        .float("b", 0.0, "")
        .string("c", "", "")
        .string("d", "", "")
        .bool("e", false, "")
        .float("f", 0.0, "");

    store.parse_args(Vec::<String>::new()).unwrap();

    let global = store.global();
    assert_eq!(global.get_bool("a"), Some(true));
    assert_eq!(global.get_float("b"), Some(5.6));
    assert_eq!(global.get("c"), Some("Hello world"));
    assert_eq!(global.get("d"), Some("EnvD"));
    assert_eq!(global.get_bool("e"), Some(true));
    assert_eq!(global.get_float("f"), Some(5.5));
}

#[test]
fn test_untouched_options_keep_their_defaults() {
    let dir = TestDir::new();
    let env = MapEnv::new().with("CONFTEST_D", "EnvD");
    let mut store = open_sample(&dir, env, PREFIX);
    store
        .global_mut()
        .string("d", "default", "")
        .bool("e", true, "");

    store.parse_args(Vec::<String>::new()).unwrap();

    assert_eq!(store.global().get("d"), Some("EnvD"));
    assert_eq!(store.global().get_bool("e"), Some(true));
    assert_eq!(store.global().flag("e").unwrap().origin(), Origin::Default);
}

#[test]
fn test_dotted_option_name() {
    let dir = TestDir::new();
    let env = MapEnv::new().with("CONFTEST_SOME_VALUE", "some-value");
    let mut store = open_sample(&dir, env, PREFIX);
    store.global_mut().string("some.value", "", "");

    store.parse_args(Vec::<String>::new()).unwrap();

    assert_eq!(store.global().get("some.value"), Some("some-value"));
}

#[test]
fn test_dotted_option_name_from_file_without_env() {
    let dir = TestDir::new();
    let mut store = open_sample(&dir, MapEnv::new(), PREFIX);
    store.global_mut().string("some.value", "", "");

    store.parse_args(Vec::<String>::new()).unwrap();

    assert_eq!(store.global().get("some.value"), Some("from-file"));
}

#[rstest]
#[case(&["-b=7.6"], 7.6)]
#[case(&["--b", "7.6"], 7.6)]
#[case(&[], 5.6)]
fn test_argument_overrides_file(#[case] args: &[&str], #[case] expected: f64) {
    let dir = TestDir::new();
    let mut store = open_sample(&dir, MapEnv::new(), "");
    store.global_mut().float("b", 0.0, "");

    store.parse_args(args.iter().copied()).unwrap();

    assert_eq!(store.global().get_float("b"), Some(expected));
}

#[test]
fn test_argument_overrides_env() {
    let dir = TestDir::new();
    let env = MapEnv::new().with("CONFTEST_C", "from env");
    let mut store = open_sample(&dir, env, PREFIX);
    store.global_mut().string("c", "", "");

    store.parse_args(["-c=from args"]).unwrap();

    assert_eq!(store.global().get("c"), Some("from args"));
}

// =============================================================================
// Custom scopes
// =============================================================================

#[test]
fn test_custom_scope_reads_file_and_scoped_env() {
    let dir = TestDir::new();
    let env = MapEnv::new().with("CONFTEST_CUSTOM_E", "Hello Env");
    let mut store = open_sample(&dir, env, PREFIX);
    store.global_mut().float("bee", 5.0, "");
    let mut custom = custom_scope("dd");
    custom.string("e", "ee", "");
    store.register("custom", custom);

    store.parse_args(Vec::<String>::new()).unwrap();

    assert_eq!(store.global().get_float("bee"), Some(5.0));
    let custom = store.scope("custom").unwrap();
    assert_eq!(custom.get("d"), Some("Hello d"));
    assert_eq!(custom.get("e"), Some("Hello Env"));
}

#[test]
fn test_global_arguments_with_custom_scope() {
    let dir = TestDir::new();
    let mut store = open_sample(&dir, MapEnv::new(), "");
    store.global_mut().float("b", 5.0, "");
    store.register("custom", custom_scope("dd"));

    store.parse_args(["-b=6"]).unwrap();

    assert_eq!(store.global().get_float("b"), Some(6.0));
    assert_eq!(store.scope("custom").unwrap().get("d"), Some("Hello d"));
}

#[test]
fn test_global_and_custom_overwrite() {
    let dir = TestDir::new();
    let mut store = open_sample(&dir, MapEnv::new(), "");
    store
        .global_mut()
        .bool("a", false, "")
        .float("b", 0.0, "")
        .string("c", "", "");
    store.register("custom", custom_scope(""));

    store.parse_args(["-a=true", "-b=5", "-c=Hello"]).unwrap();

    let global = store.global();
    assert_eq!(global.get_bool("a"), Some(true));
    assert_eq!(global.get_float("b"), Some(5.0));
    assert_eq!(global.get("c"), Some("Hello"));
    assert_eq!(store.scope("custom").unwrap().get("d"), Some("Hello d"));
}

#[test]
fn test_scope_registered_after_first_pass() {
    let dir = TestDir::new();
    let mut store = open_sample(&dir, MapEnv::new(), "");
    store.global_mut().float("b", 5.0, "");
    store.parse_args(["-b=6"]).unwrap();

    store.register("custom", custom_scope("dd"));
    store.parse_all();

    assert_eq!(store.global().get_float("b"), Some(6.0));
    assert_eq!(store.scope("custom").unwrap().get("d"), Some("Hello d"));
}

#[test]
fn test_parse_all_report_records_origins() {
    let dir = TestDir::new();
    let env = MapEnv::new().with("CONFTEST_D", "EnvD");
    let mut store = open_sample(&dir, env, PREFIX);
    store
        .global_mut()
        .bool("a", false, "")
        .float("b", 0.0, "")
        .string("d", "default", "")
        .string("z", "zz", "");
    store.global_mut().set("a", "false").unwrap();

    let report = store.parse_all();

    let origins: Vec<_> = report[""].iter().map(|r| (r.name.as_str(), r.origin)).collect();
    assert_eq!(
        origins,
        vec![
            ("a", Origin::Explicit),
            ("b", Origin::File),
            ("d", Origin::Environment),
            ("z", Origin::Default),
        ]
    );
}
