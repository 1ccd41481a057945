//! Scoped remote access: the real lister is installed only inside the scope
//! and the stub always comes back, whatever way the scope ends.

mod common;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use common::mock::{FailingLister, RecordingLister};
use dataset_testkit::{DatasetRef, FileLister, ListingMode, TestSuite, fixture_dir};

fn suite_with(lister: Arc<dyn FileLister>) -> TestSuite {
    TestSuite::isolated(fixture_dir!(), lister)
}

fn mnist() -> DatasetRef {
    DatasetRef::new("mnist/3.0.1").unwrap()
}

#[test]
fn test_real_lister_called_with_argument_inside_scope() {
    let recorder = Arc::new(RecordingLister::new().with_file("dataset_info/mnist/3.0.1/dataset_info.json"));
    let suite = suite_with(recorder.clone());
    let case = suite.case().unwrap();

    let files = case
        .with_remote_access(|| case.list_dataset_files(&mnist()))
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name(), "dataset_info.json");
    assert_eq!(recorder.calls(), vec![mnist()]);
    assert_eq!(suite.listing().mode(), ListingMode::Stub);
}

#[test]
fn test_guard_scope_restores_stub() {
    let recorder = Arc::new(RecordingLister::new());
    let suite = suite_with(recorder.clone());
    let case = suite.case().unwrap();

    {
        let _access = case.remote_access();
        assert_eq!(case.listing().mode(), ListingMode::Real);
        case.list_dataset_files(&mnist()).unwrap();
    }

    assert!(case.listing().is_stubbed());
    case.list_dataset_files(&mnist()).unwrap();
    assert_eq!(recorder.call_count(), 1);
}

#[test]
fn test_error_inside_scope_propagates_and_restores_stub() {
    let suite = suite_with(Arc::new(FailingLister));
    let case = suite.case().unwrap();

    let err = case
        .with_remote_access(|| case.list_dataset_files(&mnist()))
        .unwrap_err();

    assert!(err.to_string().contains("remote store unreachable"));
    assert!(case.listing().is_stubbed());
}

#[test]
fn test_panic_inside_scope_restores_stub() {
    let recorder = Arc::new(RecordingLister::new());
    let suite = suite_with(recorder.clone());
    let case = suite.case().unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let _: () = case.with_remote_access(|| {
            case.list_dataset_files(&mnist()).unwrap();
            panic!("test body failed mid-download");
        });
    }));

    assert!(outcome.is_err());
    assert!(case.listing().is_stubbed());
    assert_eq!(recorder.call_count(), 1);
}

#[test]
fn test_calls_outside_scope_never_reach_real_lister() {
    let recorder = Arc::new(RecordingLister::new());
    let suite = suite_with(recorder.clone());
    let case = suite.case().unwrap();
    let cifar = DatasetRef::new("cifar10/3.0.2").unwrap();

    case.list_dataset_files(&cifar).unwrap();
    case.with_remote_access(|| case.list_dataset_files(&mnist()))
        .unwrap();
    case.list_dataset_files(&cifar).unwrap();

    assert_eq!(recorder.calls(), vec![mnist()]);
}

#[test]
fn test_isolated_suites_do_not_share_slots() {
    let first = suite_with(Arc::new(RecordingLister::new()));
    let second = suite_with(Arc::new(RecordingLister::new()));
    let case = first.case().unwrap();

    let _access = case.remote_access();
    assert_eq!(first.listing().mode(), ListingMode::Real);
    assert_eq!(second.listing().mode(), ListingMode::Stub);
}
