//! Sample config texts.

/// Global options in `DEFAULT` plus a `custom` scope section.
pub const SAMPLE_CONFIG: &str = "\
# Sample configuration used across test suites
[DEFAULT]
a: true
b: 5.6
c: Hello world
some.value: from-file

[custom]
d: Hello d
";

/// Options before any header, i.e. in the unnamed section.
pub const UNNAMED_SECTION_CONFIG: &str = "\
a: false
b: 1.5 ; inline comment

[DEFAULT]
b: 9.9
";
