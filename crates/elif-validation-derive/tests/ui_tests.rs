//! UI tests for the Validatable derive using trybuild
//!
//! These tests verify that:
//! 1. Valid derive usage compiles successfully
//! 2. Unsupported shapes and invalid attributes produce meaningful errors

#[test]
fn ui_pass_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}

#[test]
fn ui_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/fail/*.rs");
}
