//! Integration tests for the debug command handler.
//!
//! These verify the full contract of each command against mock adapters:
//! dump emission, the token sentinel write, and the silent no-op paths.

use chatdiag::app::commands::DebugCommand;
use chatdiag::app::records::StoreValue;
use chatdiag::app::service::{
    CORRUPT_TOKEN_VALUE, DEFAULT_STORE, DebugService, LOGIN_STORE, REGISTRATION_STORE,
    SCALAR_TOKEN_KEY_PREFIX,
};

use crate::mock_env::{MockFs, MockSession, MockStores, RecordingSink};

fn make_env() -> (DebugService, MockFs, RecordingSink) {
    (DebugService::new(), MockFs::new(), RecordingSink::new())
}

// ── DumpPreferences ───────────────────────────────────────────

#[test]
fn dump_emits_one_line_per_key_and_skips_absent_stores() {
    let (service, mut fs, mut sink) = make_env();
    let mut stores =
        MockStores::new().with_store(LOGIN_STORE, &[("a", StoreValue::from("1"))]);
    let session = MockSession::logged_out();

    service.handle(
        DebugCommand::DumpPreferences,
        &mut stores,
        &session,
        &mut fs,
        &mut sink,
    );

    assert_eq!(sink.lines(), vec!["LoginStorage: a : 1".to_owned()]);
    assert!(stores.writes.is_empty(), "dump must not write");
    assert_eq!(fs.list_calls, 0, "dump must not touch the filesystem");
}

#[test]
fn dump_covers_all_three_stores_in_order() {
    let (service, mut fs, mut sink) = make_env();
    let mut stores = MockStores::new()
        .with_store(DEFAULT_STORE, &[("theme", StoreValue::from("dark"))])
        .with_store(LOGIN_STORE, &[("user_id", StoreValue::from("u42"))])
        .with_store(REGISTRATION_STORE, &[("push_on", StoreValue::from(true))]);
    let session = MockSession::logged_in("u42");

    service.handle(
        DebugCommand::DumpPreferences,
        &mut stores,
        &session,
        &mut fs,
        &mut sink,
    );

    let emitted: Vec<&str> = sink.records.iter().map(|r| r.store.as_str()).collect();
    assert_eq!(emitted, [DEFAULT_STORE, LOGIN_STORE, REGISTRATION_STORE]);
    assert_eq!(
        sink.lines(),
        [
            "DefaultPreferences: theme : dark",
            "LoginStorage: user_id : u42",
            "RegistrationManager: push_on : true",
        ]
    );
}

#[test]
fn dump_with_no_stores_emits_nothing() {
    let (service, mut fs, mut sink) = make_env();
    let mut stores = MockStores::new();
    let session = MockSession::logged_out();

    service.handle(
        DebugCommand::DumpPreferences,
        &mut stores,
        &session,
        &mut fs,
        &mut sink,
    );

    assert!(sink.records.is_empty());
}

#[test]
fn dump_twice_with_unchanged_stores_is_identical() {
    let (service, mut fs, _) = make_env();
    let mut stores = MockStores::new()
        .with_store(LOGIN_STORE, &[("a", StoreValue::from("1")), ("b", StoreValue::from(2_i64))]);
    let session = MockSession::logged_out();

    let mut first = RecordingSink::new();
    let mut second = RecordingSink::new();
    service.handle(
        DebugCommand::DumpPreferences,
        &mut stores,
        &session,
        &mut fs,
        &mut first,
    );
    service.handle(
        DebugCommand::DumpPreferences,
        &mut stores,
        &session,
        &mut fs,
        &mut second,
    );

    assert_eq!(first.lines(), second.lines());
    assert_eq!(first.records.len(), 2);
}

#[test]
fn dump_survives_store_read_errors() {
    let (service, mut fs, mut sink) = make_env();
    let mut stores = MockStores::new();
    stores.fail_reads = true;
    let session = MockSession::logged_out();

    // Unreadable stores degrade to an empty dump, not a panic.
    service.handle(
        DebugCommand::DumpPreferences,
        &mut stores,
        &session,
        &mut fs,
        &mut sink,
    );

    assert!(sink.records.is_empty());
}

// ── CorruptAuthToken ──────────────────────────────────────────

#[test]
fn corrupt_token_writes_sentinel_for_current_user() {
    let (service, mut fs, mut sink) = make_env();
    let token_key = format!("{SCALAR_TOKEN_KEY_PREFIX}u42");
    let mut stores = MockStores::new()
        .with_store(DEFAULT_STORE, &[(token_key.as_str(), StoreValue::from("good"))]);
    let session = MockSession::logged_in("u42");

    service.handle(
        DebugCommand::CorruptAuthToken,
        &mut stores,
        &session,
        &mut fs,
        &mut sink,
    );

    assert_eq!(stores.writes.len(), 1);
    assert_eq!(stores.writes[0].store, DEFAULT_STORE);
    assert_eq!(stores.writes[0].key, "SCALAR_TOKEN_PREFERENCE_KEYu42");
    assert_eq!(
        stores.value(DEFAULT_STORE, &token_key),
        Some(&StoreValue::from(CORRUPT_TOKEN_VALUE)),
        "prior token value must be overwritten"
    );
    assert!(sink.records.is_empty(), "corruption emits no records");
}

#[test]
fn corrupt_token_without_session_performs_zero_writes() {
    let (service, mut fs, mut sink) = make_env();
    let mut stores = MockStores::new();
    let session = MockSession::logged_out();

    service.handle(
        DebugCommand::CorruptAuthToken,
        &mut stores,
        &session,
        &mut fs,
        &mut sink,
    );

    assert!(stores.writes.is_empty());
    assert!(sink.records.is_empty());
    assert_eq!(fs.list_calls, 0);
}

#[test]
fn corrupt_token_twice_is_an_idempotent_overwrite() {
    let (service, mut fs, mut sink) = make_env();
    let mut stores = MockStores::new();
    let session = MockSession::logged_in("u42");

    for _ in 0..2 {
        service.handle(
            DebugCommand::CorruptAuthToken,
            &mut stores,
            &session,
            &mut fs,
            &mut sink,
        );
    }

    assert_eq!(stores.writes.len(), 2);
    assert_eq!(stores.writes[0], stores.writes[1]);
    assert_eq!(
        stores.value(DEFAULT_STORE, "SCALAR_TOKEN_PREFERENCE_KEYu42"),
        Some(&StoreValue::from("bad_token"))
    );
}

// ── DumpFilesystem ────────────────────────────────────────────

#[test]
fn dump_filesystem_delegates_exactly_once() {
    let (service, mut fs, mut sink) = make_env();
    let mut stores =
        MockStores::new().with_store(LOGIN_STORE, &[("a", StoreValue::from("1"))]);
    let session = MockSession::logged_in("u42");

    service.handle(
        DebugCommand::DumpFilesystem,
        &mut stores,
        &session,
        &mut fs,
        &mut sink,
    );

    assert_eq!(fs.list_calls, 1);
    assert!(stores.writes.is_empty(), "listing must not write");
    assert!(sink.records.is_empty(), "listing emits no records");
}
