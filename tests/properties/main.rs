//! Property tests for roster invariants.

use std::collections::BTreeSet;

use proptest::prelude::*;
use roster::core::{Record, RecordPatch, RecordStore};
use roster::test_utils::fixtures::UnitTestFixture;

fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,\"]{0,12}"
}

fn record_with_id(id: String) -> impl Strategy<Value = Record> {
    (field(), field(), field())
        .prop_map(move |(name, roll_no, grade)| Record::new(id.clone(), name, roll_no, grade))
}

fn distinct_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::btree_set("[a-z0-9]{1,6}", 0..12).prop_flat_map(|ids: BTreeSet<String>| {
        ids.into_iter().map(record_with_id).collect::<Vec<_>>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_distinct_adds_are_all_searchable(records in distinct_records()) {
        let fixture = UnitTestFixture::new();
        let (mut store, _) = RecordStore::open(fixture.store_paths()).unwrap();
        for record in &records {
            store.add(record.clone()).unwrap();
        }

        prop_assert_eq!(store.len(), records.len());
        for record in &records {
            prop_assert_eq!(store.search(&record.id).unwrap(), record);
        }
    }

    #[test]
    fn test_reopen_restores_same_sequence(records in distinct_records()) {
        let fixture = UnitTestFixture::new();
        {
            let (mut store, _) = RecordStore::open(fixture.store_paths()).unwrap();
            for record in &records {
                store.add(record.clone()).unwrap();
            }
        }

        let (reopened, _) = RecordStore::open(fixture.store_paths()).unwrap();
        prop_assert_eq!(reopened.records(), records.as_slice());
    }

    #[test]
    fn test_row_file_mirrors_document(records in distinct_records()) {
        let fixture = UnitTestFixture::new();
        let (mut store, _) = RecordStore::open(fixture.store_paths()).unwrap();
        for record in &records {
            store.add(record.clone()).unwrap();
        }
        if records.is_empty() {
            return Ok(());
        }

        let rows_path = store.rows_path().to_path_buf();
        let count = store.import_rows(&rows_path).unwrap();
        prop_assert_eq!(count, records.len());
        prop_assert_eq!(store.records(), records.as_slice());
    }

    #[test]
    fn test_empty_patch_changes_nothing(records in distinct_records()) {
        prop_assume!(!records.is_empty());
        let fixture = UnitTestFixture::new();
        let (mut store, _) = RecordStore::open(fixture.store_paths()).unwrap();
        for record in &records {
            store.add(record.clone()).unwrap();
        }

        let target = &records[records.len() / 2];
        let updated = store.update(&target.id, &RecordPatch::default()).unwrap().clone();
        prop_assert_eq!(&updated, target);
        prop_assert_eq!(store.records(), records.as_slice());
    }

    #[test]
    fn test_delete_removes_exactly_one_id(records in distinct_records(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!records.is_empty());
        let fixture = UnitTestFixture::new();
        let (mut store, _) = RecordStore::open(fixture.store_paths()).unwrap();
        for record in &records {
            store.add(record.clone()).unwrap();
        }

        let victim = pick.get(&records).id.clone();
        prop_assert_eq!(store.delete(&victim).unwrap(), 1);
        prop_assert!(store.search(&victim).is_err());
        let expected: Vec<Record> = records.iter().filter(|r| r.id != victim).cloned().collect();
        prop_assert_eq!(store.records(), expected.as_slice());
    }
}
