//! Set and delete round trips through the backing file.

use pretty_assertions::assert_eq;
use tierconf_core::{ConfigStore, GLOBAL_SCOPE, MapEnv};
use tierconf_model::{Comment, Config, Format, Separator};
use tierconf_test_utils::TestDir;

fn reopen(path: &std::path::Path) -> ConfigStore<MapEnv> {
    ConfigStore::open(path, Format::default())
        .unwrap()
        .with_environment(MapEnv::new())
}

#[test]
fn test_set_is_visible_after_reopen() {
    let dir = TestDir::new();
    let path = dir.write("app.ini", "");

    let mut store = reopen(&path);
    store.set(GLOBAL_SCOPE, "a", "test").unwrap();

    let mut store = reopen(&path);
    store.global_mut().string("a", "", "");
    store.parse_all();
    assert_eq!(store.global().get("a"), Some("test"));
}

#[test]
fn test_delete_is_visible_after_reopen() {
    let dir = TestDir::new();
    let path = dir.write("app.ini", "");

    let mut store = reopen(&path);
    store.set(GLOBAL_SCOPE, "a", "test").unwrap();
    store.delete(GLOBAL_SCOPE, "a").unwrap();

    let mut store = reopen(&path);
    store.global_mut().string("a", "", "");
    store.parse_all();
    assert_eq!(store.global().get("a"), Some(""));
}

#[test]
fn test_scoped_set_lands_in_named_section() {
    let dir = TestDir::new();
    let path = dir.write("app.ini", "[DEFAULT]\nkeep: 1\n");

    let mut store = reopen(&path);
    store.set("net", "http.proxy", "proxy:3128").unwrap();

    let config = Config::read_default(&path).unwrap();
    assert_eq!(config.sections(), vec!["DEFAULT", "net"]);
    assert_eq!(config.raw_string("net", "http.proxy").unwrap(), "proxy:3128");
    assert_eq!(config.raw_string("DEFAULT", "keep").unwrap(), "1");
}

#[test]
fn test_file_written_with_store_format() {
    let dir = TestDir::new();
    let path = dir.path("app.ini");
    let format = Format::new(Comment::Semicolon, Separator::Equals, true, true);

    let mut store = ConfigStore::open_or_create(&path, format)
        .unwrap()
        .with_environment(MapEnv::new());
    store.set("s", "k", "v").unwrap();

    assert_eq!(
        dir.read("app.ini"),
        "; action set s:k = v\n\n[s]\nk = v\n"
    );
}

#[test]
fn test_multiline_value_survives_rewrite() {
    let dir = TestDir::new();
    let path = dir.write("app.ini", "[s]\nmotd: first\n  second\n");

    let mut store = reopen(&path);
    store.set("s", "other", "x").unwrap();

    let config = Config::read_default(&path).unwrap();
    assert_eq!(config.raw_string("s", "motd").unwrap(), "first\nsecond");
    assert_eq!(config.options("s").unwrap(), vec!["motd", "other"]);
}
