use chrono::{TimeZone, Utc};
use material_store::store::DEFAULT_STORAGE_KEY;
use material_store::{
    MaterialCollection, MaterialId, MaterialRecord, MaterialStore, MemoryStorage, StorageBackend,
    SubjectId,
};
use serde_json::Value;

fn golden_record() -> MaterialRecord {
    MaterialRecord::new(
        MaterialId::new("1"),
        "a.pdf",
        SubjectId::new("math"),
        1024,
        "application/pdf",
        "2024-01-01T00:00:00Z",
    )
}

#[test]
fn golden_record_serialization() {
    let json = serde_json::to_string(&golden_record()).unwrap();
    assert_eq!(
        json,
        r#"{"id":"1","fileName":"a.pdf","subjectId":"math","fileSize":1024,"fileType":"application/pdf","uploadedAt":"2024-01-01T00:00:00Z"}"#
    );
}

#[test]
fn golden_collection_is_plain_array() {
    let collection: MaterialCollection = vec![golden_record()].into();
    let value: Value = serde_json::to_value(&collection).unwrap();

    let items = value.as_array().expect("collection must serialize as an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["subjectId"], "math");
    assert_eq!(items[0]["fileSize"], 1024);
}

#[test]
fn reads_blob_written_by_browser() {
    // Millisecond precision as produced by `Date.prototype.toISOString`.
    let blob = r#"[
        {"id":"3f2a","fileName":"Algebra.pdf","subjectId":"math","fileSize":52311,"fileType":"application/pdf","uploadedAt":"2024-05-02T14:03:27.512Z"},
        {"id":"9c1d","fileName":"Optics.pdf","subjectId":"physics","fileSize":0,"fileType":"application/pdf","uploadedAt":"2024-05-03T08:00:00.000Z"}
    ]"#;

    let collection: MaterialCollection = serde_json::from_str(blob).unwrap();
    assert_eq!(collection.len(), 2);

    let first = &collection.as_slice()[0];
    assert_eq!(first.file_name, "Algebra.pdf");
    assert_eq!(
        first.uploaded_at.parse(),
        Some(Utc.with_ymd_and_hms(2024, 5, 2, 14, 3, 27).unwrap() + chrono::Duration::milliseconds(512))
    );
}

#[test]
fn round_trip_preserves_order_and_content() {
    let collection: MaterialCollection = (0..5)
        .map(|i| {
            let mut r = golden_record();
            r.id = MaterialId::new(format!("id-{i}"));
            r.subject_id = SubjectId::new(if i % 2 == 0 { "math" } else { "art" });
            r
        })
        .collect();

    let json = serde_json::to_string(&collection).unwrap();
    let back: MaterialCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, collection);
}

#[test]
fn negative_size_is_rejected() {
    let blob = r#"[{"id":"1","fileName":"a.pdf","subjectId":"math","fileSize":-1,"fileType":"application/pdf","uploadedAt":"2024-01-01T00:00:00Z"}]"#;
    assert!(serde_json::from_str::<MaterialCollection>(blob).is_err());
}

#[test]
fn golden_foreign_timestamps_survive_writes() {
    let blob = r#"[{"id":"1","fileName":"a.pdf","subjectId":"math","fileSize":1,"fileType":"application/pdf","uploadedAt":"2024-01-02T00:00:00"},{"id":"2","fileName":"b.pdf","subjectId":"math","fileSize":2,"fileType":"application/pdf","uploadedAt":"2024-01-01"},{"id":"3","fileName":"c.pdf","subjectId":"art","fileSize":3,"fileType":"application/pdf","uploadedAt":"2024-05-03T08:00:00.000Z"}]"#;

    let backend = MemoryStorage::new();
    backend.set_item(DEFAULT_STORAGE_KEY, blob).unwrap();
    let store = MaterialStore::with_backend(backend);

    assert_eq!(store.list_all().len(), 3);
    assert!(!store.load().is_failed());

    // A no-op removal rewrites the blob; the text must not change.
    store.remove(&MaterialId::new("missing"));
    assert_eq!(
        store.backend().get_item(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some(blob)
    );

    store.add(MaterialRecord::new(
        MaterialId::new("4"),
        "d.pdf",
        SubjectId::new("math"),
        4,
        "application/pdf",
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ));

    let all = store.list_all();
    let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);

    let stamps: Vec<&str> = all.iter().map(|r| r.uploaded_at.as_str()).collect();
    assert_eq!(
        stamps,
        vec![
            "2024-01-02T00:00:00",
            "2024-01-01",
            "2024-05-03T08:00:00.000Z",
            "2024-06-01T12:00:00.000Z",
        ]
    );
}
