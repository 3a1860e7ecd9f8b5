//! Data-driven parser tests
//!
//! Cases live in `spec-cases.toml`; each one is a spec string with the
//! expected descriptor fields, or an expected failure. Failures are
//! collected so one bad case does not hide the rest.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use format_spec::{Align, FormatSpec, Grouping, Presentation, Sign, parse_format_spec};

#[derive(Debug, Deserialize)]
struct TestCase {
    spec: String,
    #[serde(default)]
    error: bool,
    fill: Option<String>,
    align: Option<String>,
    sign: Option<String>,
    #[serde(default)]
    alternate: bool,
    width: Option<usize>,
    grouping: Option<String>,
    precision: Option<usize>,
    presentation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    cases: Vec<TestCase>,
}

fn one_char(field: &Option<String>) -> Option<char> {
    field.as_ref().and_then(|s| s.chars().next())
}

fn expected_descriptor(case: &TestCase) -> FormatSpec {
    FormatSpec {
        fill: one_char(&case.fill),
        align: one_char(&case.align).and_then(Align::from_char),
        sign: one_char(&case.sign).and_then(Sign::from_char),
        alternate: case.alternate,
        width: case.width,
        grouping: one_char(&case.grouping).and_then(Grouping::from_char),
        precision: case.precision,
        presentation: one_char(&case.presentation).and_then(Presentation::from_char),
    }
}

fn run_test_case(case: &TestCase) -> Result<(), String> {
    match (parse_format_spec(&case.spec), case.error) {
        (Ok(_), true) => Err(format!("spec {:?} should have failed", case.spec)),
        (Err(e), false) => Err(format!("spec {:?} failed to parse: {}", case.spec, e)),
        (Err(_), true) => Ok(()),
        (Ok(parsed), false) => {
            let expected = expected_descriptor(case);
            if parsed != expected {
                return Err(format!(
                    "\nMismatch for spec {:?}\nExpected: {:?}\nActual:   {:?}",
                    case.spec, expected, parsed
                ));
            }
            Ok(())
        }
    }
}

#[test]
fn run_spec_corpus() {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("spec-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", toml_path.display(), e));

    let suite: TestCases = toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", toml_path.display(), e));

    let mut failed = 0;
    for (i, case) in suite.cases.iter().enumerate() {
        if let Err(msg) = run_test_case(case) {
            failed += 1;
            eprintln!("[Case {}] {}", i + 1, msg);
        }
    }

    assert_eq!(failed, 0, "{} corpus case(s) failed", failed);
}
