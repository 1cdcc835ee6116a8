use super::*;

#[test]
fn memory_store_roundtrip() {
    let mut store = MemoryStore::default();
    assert_eq!(store.get("token"), None);

    store.set("token", "t-1");
    assert_eq!(store.get("token"), Some("t-1".to_owned()));

    store.set("token", "t-2");
    assert_eq!(store.get("token"), Some("t-2".to_owned()));

    store.remove("token");
    assert_eq!(store.get("token"), None);
}

#[test]
fn remove_missing_key_is_a_no_op() {
    let mut store = MemoryStore::default();
    store.remove("nope");
    assert_eq!(store.get("nope"), None);
}

#[test]
fn flag_requires_exact_true_sentinel() {
    let mut store = MemoryStore::default();
    assert!(!store.flag(keys::X_CONNECTED));

    store.set(keys::X_CONNECTED, "true");
    assert!(store.flag(keys::X_CONNECTED));

    store.set(keys::X_CONNECTED, "TRUE");
    assert!(!store.flag(keys::X_CONNECTED));

    store.set(keys::X_CONNECTED, "false");
    assert!(!store.flag(keys::X_CONNECTED));
}
