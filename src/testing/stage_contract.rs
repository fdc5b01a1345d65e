//! Universal stage contract tests.
//!
//! Every stage opts in by implementing [`StageTestConfig`] and invoking
//! `assert_stage_contract!` from a test. The contracts:
//!
//! 1. `stage_is_idempotent`: applying twice equals applying once
//! 2. `needs_apply_is_accurate`: predicts exactly whether `apply` changes
//!    the text (skippable for stages whose pre-check is conservative)
//! 3. `pass_through_unchanged`: declared clean samples are not touched and
//!    are not flagged by `needs_apply`
//! 4. `transforms_match_expected`: declared input/output pairs hold
//! 5. `handles_empty_and_plain_ascii`: graceful on edge cases
//! 6. `no_panic_on_mixed_scripts`: survives pathological real-world input

use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", "déjà-vu", "TEST", ""]
    }

    /// Samples that must pass through unchanged.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs that verify concrete transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Stages whose pre-check is allowed to over-report (e.g. NFKC
    /// quick-check) set this to true.
    fn skip_needs_apply_test() -> bool {
        false
    }
}

#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::pass_through_unchanged(&$stage);
        $crate::testing::stage_contract::transforms_match_expected(&$stage);
        $crate::testing::stage_contract::handles_empty_and_plain_ascii(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input)).unwrap();
        let twice = stage.apply(once.clone()).unwrap();
        assert_eq!(
            once,
            twice,
            "stage `{}` not idempotent on {input:?}",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    if S::skip_needs_apply_test() {
        return;
    }
    let must_not_touch = ["", "hello", "world123", "abc def"];
    for input in S::samples().iter().chain(must_not_touch.iter()) {
        let predicted = stage.needs_apply(input).expect("needs_apply errored");
        let output = stage
            .apply(Cow::Owned((*input).to_owned()))
            .expect("apply errored");
        let actually_changes = output != *input;
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for stage `{}` on {input:?} (output = {output:?})",
            stage.name()
        );
    }
}

pub fn pass_through_unchanged<S: StageTestConfig>(stage: &S) {
    for &input in S::should_pass_through() {
        assert!(
            !stage.needs_apply(input).unwrap(),
            "stage `{}` flagged clean sample {input:?}",
            stage.name()
        );
        let output = stage.apply(Cow::Borrowed(input)).unwrap();
        assert_eq!(
            output.as_ref(),
            input,
            "stage `{}` altered clean sample",
            stage.name()
        );
    }
}

pub fn transforms_match_expected<S: StageTestConfig>(stage: &S) {
    for &(input, expected) in S::should_transform() {
        let output = stage.apply(Cow::Borrowed(input)).unwrap();
        assert_eq!(
            output.as_ref(),
            expected,
            "stage `{}` wrong output for {input:?}",
            stage.name()
        );
    }
}

pub fn handles_empty_and_plain_ascii<S: StageTestConfig>(stage: &S) {
    let result = stage.apply(Cow::Borrowed("")).unwrap();
    assert_eq!(result.as_ref(), "");
    // Plain unpunctuated ASCII must not be semantically altered by any stage.
    let ascii = "hello world 123";
    let result = stage.apply(Cow::Borrowed(ascii)).unwrap();
    assert_eq!(result.as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let _ = stage
        .apply(Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文"))
        .unwrap();
}
