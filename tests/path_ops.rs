//! Path traversal tests
//!
//! Covers get_path/has_path/set_path composition: left-to-right walking,
//! short-circuiting, the empty-path policy, unchanged failure propagation,
//! and nested writes across Index/Service boundaries.

use keyed::{
    get, get_path, has_path, set_path, CapabilityError, Indexable, Key, MemoryIndex, Service,
    ServiceError, TableService, Value,
};
use std::sync::Arc;

// =============================================================================
// Test doubles
// =============================================================================

/// An Indexable whose every capability fails
struct BrokenIndex;

impl Indexable for BrokenIndex {
    fn exists_at(&self, _key: &Key) -> Result<bool, CapabilityError> {
        Err("exists_at exploded".into())
    }

    fn get_at(&self, _key: &Key) -> Result<Value, CapabilityError> {
        Err("get_at exploded".into())
    }

    fn set_at(&self, _key: &Key, _value: Value) -> Result<(), CapabilityError> {
        Err("set_at exploded".into())
    }

    fn delete_at(&self, _key: &Key) -> Result<(), CapabilityError> {
        Err("delete_at exploded".into())
    }
}

/// A Service that counts how many keys were resolved
struct CountingService {
    table: TableService,
    gets: std::sync::atomic::AtomicUsize,
}

impl CountingService {
    fn new(table: TableService) -> Self {
        Self {
            table,
            gets: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    fn resolved(&self) -> usize {
        self.gets.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl Service for CountingService {
    fn has(&self, key: &Key) -> Result<bool, ServiceError> {
        self.table.has(key)
    }

    fn get(&self, key: &Key) -> Result<Value, ServiceError> {
        self.gets.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.table.get(key)
    }
}

fn path(segments: &[&str]) -> Vec<Value> {
    segments.iter().map(|s| Value::from(*s)).collect()
}

fn nested_map() -> Value {
    Value::map_from([(
        "a",
        Value::map_from([("b", Value::from("x"))]),
    )])
}

// =============================================================================
// get_path
// =============================================================================

/// The empty path returns the container itself unchanged
#[test]
fn test_get_path_empty_returns_container() {
    let c = nested_map();
    assert_eq!(get_path(&c, &[]).unwrap(), c);

    let scalar_free = Value::record_from([("only", Value::Int(1))]);
    assert_eq!(get_path(&scalar_free, &[]).unwrap(), scalar_free);
}

/// Nested lookup resolves segment by segment
#[test]
fn test_get_path_nested() {
    let c = nested_map();
    assert_eq!(get_path(&c, &path(&["a", "b"])).unwrap(), Value::from("x"));
    assert!(get_path(&c, &path(&["a", "z"]))
        .unwrap_err()
        .is_not_found());
}

/// Paths traverse mixed container shapes
#[test]
fn test_get_path_across_variants() {
    let inner = Value::record_from([("leaf", Value::Int(9))]);
    let idx = MemoryIndex::from_entries([("mid", inner)]);
    let svc = TableService::from_entries([("idx", Value::index(Arc::new(idx)))]);
    let c = Value::map_from([("svc", Value::service(Arc::new(svc)))]);

    assert_eq!(
        get_path(&c, &path(&["svc", "idx", "mid", "leaf"])).unwrap(),
        Value::Int(9)
    );
}

/// Numeric segments address integer-keyed entries
#[test]
fn test_get_path_numeric_segments() {
    let mut c = Value::map();
    set_path(&mut c, &[Value::Int(19), Value::from("b")], "v").unwrap();
    assert_eq!(
        get_path(&c, &[Value::from("19"), Value::from("b")]).unwrap(),
        Value::from("v")
    );
}

/// A failure during a non-final segment propagates unchanged
#[test]
fn test_get_path_propagates_identical_failure() {
    let c = Value::map_from([("a", Value::index(Arc::new(BrokenIndex)))]);

    let direct = get(&get(&c, "a").unwrap(), "b").unwrap_err();
    let via_path = get_path(&c, &path(&["a", "b", "c"])).unwrap_err();

    assert!(via_path.is_container_failure());
    assert_eq!(via_path.kind(), direct.kind());
    assert_eq!(via_path.to_string(), direct.to_string());
    // The original capability error is still the chained cause.
    let source = std::error::Error::source(&via_path).expect("cause must survive propagation");
    assert!(source.to_string().contains("exists_at exploded"));
}

/// Walking into a scalar is an InvalidArgument from the single-key layer
#[test]
fn test_get_path_through_scalar() {
    let c = nested_map();
    let err = get_path(&c, &path(&["a", "b", "deeper"])).unwrap_err();
    assert!(err.is_invalid_argument());
}

// =============================================================================
// has_path
// =============================================================================

/// The empty path addresses the container itself, which exists
#[test]
fn test_has_path_empty_is_true() {
    assert!(has_path(&nested_map(), &[]).unwrap());
}

/// Present and absent nested keys
#[test]
fn test_has_path_nested() {
    let c = nested_map();
    assert!(has_path(&c, &path(&["a", "b"])).unwrap());
    assert!(!has_path(&c, &path(&["a", "z"])).unwrap());
    assert!(!has_path(&c, &path(&["z", "anything"])).unwrap());
}

/// A false segment short-circuits: later segments are never evaluated
#[test]
fn test_has_path_short_circuits_before_descending() {
    let svc = Arc::new(CountingService::new(TableService::from_entries([(
        "present",
        Value::map_from([("leaf", Value::Int(1))]),
    )])));
    let c = Value::service(svc.clone());

    // First segment absent: no get is ever issued.
    assert!(!has_path(&c, &path(&["missing", "leaf"])).unwrap());
    assert_eq!(svc.resolved(), 0);

    // Present non-final segment is resolved exactly once; the final segment
    // is only existence-checked.
    assert!(has_path(&c, &path(&["present", "leaf"])).unwrap());
    assert_eq!(svc.resolved(), 1);
}

/// Capability failures during the walk propagate unchanged
#[test]
fn test_has_path_propagates_capability_failure() {
    let c = Value::map_from([("a", Value::index(Arc::new(BrokenIndex)))]);
    let err = has_path(&c, &path(&["a", "k"])).unwrap_err();
    assert!(err.is_container_failure());
}

// =============================================================================
// set_path
// =============================================================================

/// The empty path assigns the new root value
#[test]
fn test_set_path_empty_assigns_root() {
    let mut c = nested_map();
    set_path(&mut c, &[], Value::from("replaced")).unwrap();
    assert_eq!(c, Value::from("replaced"));
}

/// A single segment delegates to plain set
#[test]
fn test_set_path_single_segment() {
    let mut c = Value::record();
    set_path(&mut c, &path(&["k"]), 5).unwrap();
    assert_eq!(get(&c, "k").unwrap(), Value::Int(5));
}

/// Missing intermediate Map keys are created on the way down
#[test]
fn test_set_path_creates_intermediate_maps() {
    let mut c = Value::map();
    set_path(&mut c, &path(&["a", "b", "c"]), "deep").unwrap();
    assert_eq!(
        get_path(&c, &path(&["a", "b", "c"])).unwrap(),
        Value::from("deep")
    );

    // Existing branches are reused, not replaced.
    set_path(&mut c, &path(&["a", "b", "d"]), "sibling").unwrap();
    assert_eq!(
        get_path(&c, &path(&["a", "b", "c"])).unwrap(),
        Value::from("deep")
    );
}

/// Overwriting a nested leaf leaves its siblings intact
#[test]
fn test_set_path_overwrites_leaf_only() {
    let mut c = Value::map_from([(
        "a",
        Value::map_from([("b", Value::Int(1)), ("keep", Value::Int(2))]),
    )]);
    set_path(&mut c, &path(&["a", "b"]), 10).unwrap();
    assert_eq!(get_path(&c, &path(&["a", "b"])).unwrap(), Value::Int(10));
    assert_eq!(get_path(&c, &path(&["a", "keep"])).unwrap(), Value::Int(2));
}

/// A nested write across a MemoryIndex boundary is written back and persists
#[test]
fn test_set_path_writes_back_through_index_boundary() {
    let idx = Arc::new(MemoryIndex::from_entries([(
        "cfg",
        Value::map_from([("x", Value::Int(1))]),
    )]));
    let mut c = Value::map_from([("idx", Value::index(idx.clone()))]);

    set_path(&mut c, &path(&["idx", "cfg", "x"]), 2).unwrap();

    assert_eq!(
        get_path(&c, &path(&["idx", "cfg", "x"])).unwrap(),
        Value::Int(2)
    );
    // The write reached the shared handle, not a detached copy.
    assert_eq!(
        get(&Value::index(idx), "cfg").unwrap(),
        Value::map_from([("x", Value::Int(2))])
    );
}

/// A handle child resolved through a read-only Service aliases, so nested
/// writes flow through without any write-back
#[test]
fn test_set_path_through_service_into_index_child() {
    let idx = Arc::new(MemoryIndex::new());
    let svc = TableService::from_entries([("idx", Value::index(idx.clone()))]);
    let mut c = Value::service(Arc::new(svc));

    set_path(&mut c, &path(&["idx", "k"]), 5).unwrap();
    assert_eq!(get(&Value::index(idx), "k").unwrap(), Value::Int(5));
}

/// A data child under a Service would need a write-back the Service cannot
/// perform, so the walk fails InvalidArgument
#[test]
fn test_set_path_data_child_under_service_fails() {
    let svc = TableService::from_entries([("cfg", Value::map_from([("x", Value::Int(1))]))]);
    let mut c = Value::service(Arc::new(svc));

    let err = set_path(&mut c, &path(&["cfg", "x"]), 2).unwrap_err();
    assert!(err.is_invalid_argument());
}

/// Capability failures during a nested write propagate unchanged
#[test]
fn test_set_path_propagates_capability_failure() {
    let mut c = Value::map_from([("a", Value::index(Arc::new(BrokenIndex)))]);
    let err = set_path(&mut c, &path(&["a", "b"]), 1).unwrap_err();
    assert!(err.is_container_failure());
}

/// Record intermediates must already exist; Map intermediates are created
#[test]
fn test_set_path_record_vs_map_intermediates() {
    let mut record_root = Value::record_from([("present", Value::map())]);
    set_path(&mut record_root, &path(&["present", "x"]), 1).unwrap();
    assert_eq!(
        get_path(&record_root, &path(&["present", "x"])).unwrap(),
        Value::Int(1)
    );
    assert!(set_path(&mut record_root, &path(&["absent", "x"]), 1)
        .unwrap_err()
        .is_not_found());

    let mut map_root = Value::map();
    set_path(&mut map_root, &path(&["absent", "x"]), 1).unwrap();
    assert_eq!(
        get_path(&map_root, &path(&["absent", "x"])).unwrap(),
        Value::Int(1)
    );
}
