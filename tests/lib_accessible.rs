//! Sanity check: library and test common module are accessible.

mod common;

use dataset_testkit::domain::dataset::DatasetRef;
use dataset_testkit::app::listing::stubbable_slot;

#[test]
fn test_library_accessible() {
    let ds = DatasetRef::new("mnist").unwrap();
    assert_eq!(ds.name(), "mnist");
}

#[test]
fn test_mock_recording_lister() {
    use common::mock::RecordingLister;
    use dataset_testkit::domain::ports::FileLister;

    let lister = RecordingLister::new().with_file("dataset_info/mnist/dataset_info.json");
    let ds = DatasetRef::new("mnist").unwrap();
    let files = lister.list(&ds).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(lister.calls(), vec![ds]);
}

#[test]
fn test_mock_failing_lister() {
    use common::mock::FailingLister;
    use dataset_testkit::domain::ports::FileLister;

    let ds = DatasetRef::new("cifar10").unwrap();
    assert!(FailingLister.list(&ds).is_err());
}

#[test]
fn test_slot_over_mock() {
    use common::mock::RecordingLister;
    use std::sync::Arc;

    let recorder = Arc::new(RecordingLister::new());
    let slot = stubbable_slot(recorder.clone());
    slot.install_stub();
    slot.list(&DatasetRef::new("mnist").unwrap()).unwrap();
    assert_eq!(recorder.call_count(), 0);
}
