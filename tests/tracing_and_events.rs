//! Integration tests for tracing and event monitoring.
//!
//! Registry operations report `SentinelEvent`s to an optional callback. Tests that
//! touch the process-wide registry's callback run under `#[serial]`.

use nada_sentinel::{define_sentinels, SentinelEvent};
use serial_test::serial;
use std::sync::{Arc, Mutex};

fn collector() -> (Arc<Mutex<Vec<String>>>, impl Fn(&SentinelEvent) + Send + Sync) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    (events, move |event: &SentinelEvent| {
        events_clone.lock().unwrap().push(format!("{}", event));
    })
}

#[test]
fn test_basic_tracing() {
    define_sentinels!(traced1);

    let (events, callback) = collector();
    traced1::set_trace_callback(callback);

    traced1::get_or_create(42i32);
    traced1::get_or_create(42i32);
    let _ = traced1::lookup(&42i32);

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert!(captured[0].contains("create"));
    assert!(captured[1].contains("hit"));
    assert!(captured[2].contains("lookup"));
}

#[test]
fn test_trace_create_event() {
    define_sentinels!(traced2);

    let (events, callback) = collector();
    traced2::set_trace_callback(callback);

    let sentinel = traced2::get_or_create(999u32);

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(
        captured[0],
        format!("create {{ type_name: u32, id: {} }}", sentinel.id())
    );
    drop(captured);

    traced2::clear_trace_callback();
}

#[test]
fn test_trace_lookup_found_and_not_found() {
    define_sentinels!(traced3);

    let (events, callback) = collector();
    traced3::set_trace_callback(callback);

    traced3::get_or_create(123i64);
    let _ = traced3::lookup(&123i64);
    let _ = traced3::lookup(&456i64);

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert!(captured[1].contains("found: true"));
    assert!(captured[2].contains("found: false"));
    drop(captured);

    traced3::clear_trace_callback();
}

#[test]
fn test_clear_trace_callback() {
    define_sentinels!(traced4);

    let (events, callback) = collector();
    traced4::set_trace_callback(callback);

    traced4::get_or_create(1u8);
    traced4::clear_trace_callback();

    traced4::get_or_create(2u8);
    let _ = traced4::contains(&2u8);

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_trace_callback_with_custom_logic() {
    define_sentinels!(traced5);

    let created = Arc::new(Mutex::new(0));
    let hits = Arc::new(Mutex::new(0));
    let created_clone = created.clone();
    let hits_clone = hits.clone();

    traced5::set_trace_callback(move |event| match event {
        SentinelEvent::Create { .. } => *created_clone.lock().unwrap() += 1,
        SentinelEvent::Hit { .. } => *hits_clone.lock().unwrap() += 1,
        SentinelEvent::Lookup { .. } => {}
    });

    traced5::get_or_create('a');
    traced5::get_or_create('b');
    traced5::get_or_create('a');
    traced5::get_or_create('a');
    let _ = traced5::contains(&'z');

    assert_eq!(*created.lock().unwrap(), 2);
    assert_eq!(*hits.lock().unwrap(), 2);

    traced5::clear_trace_callback();
}

#[test]
fn test_trace_callback_replacement() {
    define_sentinels!(traced6);

    let (events1, first) = collector();
    let (events2, second) = collector();

    traced6::set_trace_callback(first);
    traced6::get_or_create(100usize);

    traced6::set_trace_callback(second);
    traced6::get_or_create(200usize);

    assert_eq!(events1.lock().unwrap().len(), 1);
    assert_eq!(events2.lock().unwrap().len(), 1);

    traced6::clear_trace_callback();
}

#[test]
fn test_callback_can_use_different_registry() {
    define_sentinels!(main_registry);
    define_sentinels!(log_registry);

    main_registry::set_trace_callback(move |event| {
        log_registry::get_or_create(format!("{}", event));
    });

    let sentinel = main_registry::get_or_create("traced");

    let expected = format!("create {{ type_name: &str, id: {} }}", sentinel.id());
    assert!(log_registry::contains(&expected));

    main_registry::clear_trace_callback();
}

#[test]
#[serial]
fn test_global_registry_tracing() {
    let (events, callback) = collector();
    nada_sentinel::set_trace_callback(callback);

    let sentinel = nada_sentinel::get_or_create("tracing-global-flavor");
    let _ = nada_sentinel::contains(&"tracing-global-flavor");

    nada_sentinel::clear_trace_callback();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(
        captured[0],
        format!("create {{ type_name: &str, id: {} }}", sentinel.id())
    );
    assert_eq!(captured[1], "lookup { type_name: &str, found: true }");
}

#[test]
#[serial]
fn test_nada_marker_lives_in_global_registry() {
    nada_sentinel::clear_trace_callback();
    let nada = nada_sentinel::Nada::new();
    let marker = nada_sentinel::Nada::marker();
    assert!(nada_sentinel::contains(&"Nada"));
    assert_eq!(nada_sentinel::lookup(&"Nada"), Ok(marker));
    assert!(nada.is_empty());
}
