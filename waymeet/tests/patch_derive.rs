//! `#[derive(Patch)]` expansion checks.

use waymeet::Patch;
use waymeet::{FilterStatePatch, UserPatch, mock};

#[test]
fn patch_derive_pass_cases() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}

#[test]
fn patch_derive_rejects_unsupported_input() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/fail/*.rs");
}

#[test]
fn skipped_fields_are_not_patchable() {
    let user = mock::first_user();
    let updated = UserPatch::new().display_name("Ana S.").followers_count(0).applied_to(&user);
    assert_eq!(updated.display_name, "Ana S.");
    assert_eq!(updated.followers_count, 0);
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.created_at, user.created_at);
}

#[test]
fn empty_patch_is_a_no_op() {
    let patch = FilterStatePatch::new();
    assert!(patch.is_empty());
    let filters = waymeet::FilterState::default();
    assert_eq!(patch.applied_to(&filters), filters);
}
