//! Integration tests for the line parser.

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::{self, BufRead, Read};
use tierconf_model::{Comment, Config, DEFAULT_SECTION, Error, Format, Separator};

#[test]
fn test_empty_input_yields_default_only() {
    let config: Config = "".parse().unwrap();
    assert_eq!(config.sections(), vec![DEFAULT_SECTION]);
}

#[test]
fn test_sections_and_options() {
    let config: Config = "[server]\nhost: localhost\nport = 8080\n\n[client]\nretries: 3\n"
        .parse()
        .unwrap();

    assert_eq!(config.sections(), vec![DEFAULT_SECTION, "server", "client"]);
    assert_eq!(config.options("server").unwrap(), vec!["host", "port"]);
    assert_eq!(config.raw_string("server", "port").unwrap(), "8080");
    assert_eq!(config.raw_string("client", "retries").unwrap(), "3");
}

#[test]
fn test_options_before_any_header_go_to_empty_section() {
    let config: Config = "a: 1\nb: 2\n[s]\nc: 3\n".parse().unwrap();

    assert_eq!(config.sections(), vec![DEFAULT_SECTION, "", "s"]);
    assert_eq!(config.raw_string("", "a").unwrap(), "1");
}

#[test]
fn test_multiline_continuation() {
    let config: Config = "a: x\n  y".parse().unwrap();
    assert_eq!(config.raw_string("", "a").unwrap(), "x\ny");
}

#[test]
fn test_multiline_continuation_across_several_lines() {
    let config: Config = "[s]\nmotd: first\n  second\n\tthird # trailing note\nnext: 1\n"
        .parse()
        .unwrap();
    assert_eq!(config.raw_string("s", "motd").unwrap(), "first\nsecond\nthird");
    assert_eq!(config.raw_string("s", "next").unwrap(), "1");
}

#[test]
fn test_continuation_attaches_to_most_recent_option() {
    let config: Config = "[s]\na: 1\nb: 2\n  more\n".parse().unwrap();
    assert_eq!(config.raw_string("s", "a").unwrap(), "1");
    assert_eq!(config.raw_string("s", "b").unwrap(), "2\nmore");
}

#[test]
fn test_comment_lines_do_not_end_continuation() {
    let config: Config = "[s]\na: 1\n# note\n\n  2\n".parse().unwrap();
    assert_eq!(config.raw_string("s", "a").unwrap(), "1\n2");
}

#[test]
fn test_section_header_resets_continuation() {
    let err = Config::from_str_with("[s]\na: 1\n[t]\norphan\n", Format::default()).unwrap_err();
    match err {
        Error::Syntax { line, content } => {
            assert_eq!(line, 4);
            assert_eq!(content, "orphan");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_line_without_separator_before_any_option_is_syntax_error() {
    let err = "just some words\n".parse::<Config>().unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 1, .. }));
}

#[rstest]
#[case("a: x # note", "x")]
#[case("a: x ; note", "x")]
#[case("a: x\t# note", "x")]
#[case("a: x#note", "x#note")]
#[case("a: x;note", "x;note")]
#[case("a = http://host:80/path", "http://host:80/path")]
#[case("a:", "")]
#[case("a:    padded    ", "padded")]
fn test_value_forms(#[case] line: &str, #[case] expected: &str) {
    let config: Config = line.parse().unwrap();
    assert_eq!(config.raw_string("", "a").unwrap(), expected);
}

#[rstest]
#[case("# full-line comment")]
#[case("; full-line comment")]
#[case("   # indented comment")]
#[case("")]
#[case("   \t ")]
fn test_ignored_lines(#[case] line: &str) {
    let config: Config = format!("{line}\n").parse().unwrap();
    assert!(config.entries().is_empty());
}

#[test]
fn test_section_name_is_trimmed() {
    let config: Config = "  [  spaced name  ]  \nk: v\n".parse().unwrap();
    assert!(config.has_section("spaced name"));
}

#[test]
fn test_repeated_section_header_appends_to_existing_section() {
    let config: Config = "[a]\nx: 1\n[b]\ny: 2\n[a]\nz: 3\n".parse().unwrap();
    assert_eq!(config.sections(), vec![DEFAULT_SECTION, "a", "b"]);
    assert_eq!(config.options("a").unwrap(), vec!["x", "z"]);
}

#[test]
fn test_duplicate_option_last_value_wins() {
    let config: Config = "[a]\nx: 1\ny: 2\nx: 3\n".parse().unwrap();
    assert_eq!(config.options("a").unwrap(), vec!["x", "y"]);
    assert_eq!(config.raw_string("a", "x").unwrap(), "3");
}

#[test]
fn test_crlf_line_endings() {
    let config: Config = "[s]\r\na: 1\r\nb: 2\r\n".parse().unwrap();
    assert_eq!(config.raw_string("s", "b").unwrap(), "2");
}

#[test]
fn test_format_is_attached_to_parsed_model() {
    let format = Format::new(Comment::Semicolon, Separator::Equals, true, true);
    let config = Config::from_str_with("[s]\na: 1\n", format.clone()).unwrap();
    assert_eq!(config.format(), &format);
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn test_stream_failure_is_propagated() {
    let reader: Box<dyn BufRead> = Box::new(io::BufReader::new(FailingReader));
    let err = Config::read(reader, Format::default()).unwrap_err();
    assert!(matches!(err, Error::Stream { .. }));
}

#[test]
fn test_read_file_missing_is_fs_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let err = Config::read_default(temp.path().join("absent.ini")).unwrap_err();
    assert!(matches!(err, Error::Fs(_)));
}
