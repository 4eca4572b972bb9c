use super::*;

#[test]
fn reads_report_unavailable_off_browser() {
    assert_eq!(BrowserStore.get("token"), Err(StorageError::Unavailable));
}

#[test]
fn writes_report_unavailable_off_browser() {
    let mut store = BrowserStore;
    assert_eq!(store.set("token", "t"), Err(StorageError::Unavailable));
    assert_eq!(store.remove("token"), Err(StorageError::Unavailable));
    assert_eq!(store.clear(), Err(StorageError::Unavailable));
}
