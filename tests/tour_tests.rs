//! End-to-end tests for the keyword tour
//!
//! These run the demonstrations through the same entry point the binary uses and check the printed output.

use std::fs;
use std::path::PathBuf;

use keytour::demos::{self, DEMOS};
use keytour::{TourConfig, run_tour};
use keytour_core::lang::keywords::KeywordId;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("keytour-tour-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn run_to_string(config: &TourConfig) -> (String, keytour::TourSummary) {
    let mut out = Vec::new();
    let summary = run_tour(&mut out, config);
    (String::from_utf8(out).expect("utf-8 output"), summary)
}

#[test]
fn full_tour_output() {
    let dir = scratch_dir("full");
    let config = TourConfig::new().with_headers(false).with_scratch_dir(&dir);
    let (output, summary) = run_to_string(&config);

    assert!(summary.is_success(), "failures: {:?}", summary.failed);
    assert_eq!(summary.completed.len(), DEMOS.len());
    insta::assert_snapshot!(output.trim_end(), @r"
Static Method
42
9.00
3.14
SealedClass1 cannot be extended outside its module
2
1
2
123
20
15
5
acquired scratch handle
using scratch handle
disposed scratch handle
wrote 13 bytes
Hello, world!
downloaded 40 bytes from https://example.com/file.txt
7
MyMethod called.
Hello
Hello, world!
4
two
Hello, world!
20
5
5
Hello, world!
The animal speaks.
The dog barks.
Rex (3): Woof!
Fido (5): Woof!
6
30
9
An error occurred: Attempted to divide by zero.
10
7
is IsAsExample: true
is IsAsExample: false
as IsAsExample: cast succeeded
as IsAsExample: none
123
unboxing as i64 failed
Properties:
- MyProperty
Methods:
- MyMethod
");

    // Scratch files are removed by the demonstrations that create them.
    assert_eq!(fs::read_dir(&dir).expect("read scratch dir").count(), 0);
    fs::remove_dir(&dir).expect("remove scratch dir");
}

#[test]
fn banners_name_each_demonstration() {
    let config = TourConfig::new().with_only([KeywordId::Static, KeywordId::Delegate]);
    let (output, _) = run_to_string(&config);
    insta::assert_snapshot!(output.trim_end(), @r"
== static ==
Static Method
42
== delegate ==
15
5
");
}

#[test]
fn failing_demonstration_does_not_stop_the_tour() {
    let config = TourConfig::new()
        .with_headers(false)
        .with_scratch_dir("/nonexistent/keytour/scratch")
        .with_only([KeywordId::Using, KeywordId::This]);
    let (output, summary) = run_to_string(&config);

    assert_eq!(summary.completed, vec!["this"]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, "disposal");
    assert!(output.ends_with("10\n7\n"));
}

#[test]
fn reflection_demonstration_output() {
    let mut out = Vec::new();
    demos::reflection::run_reflection(&mut out, &TourConfig::default()).expect("reflection demo");
    assert_eq!(
        String::from_utf8(out).expect("utf-8 output"),
        "Properties:\n- MyProperty\nMethods:\n- MyMethod\n"
    );
}
