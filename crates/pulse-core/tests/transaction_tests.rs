//! Publish-transaction atomicity against misbehaving stores.

use pretty_assertions::assert_eq;
use pulse_config::{Page, Settings};
use pulse_core::{ConfigSource, Site};
use pulse_test_utils::{sample_config, sample_store, FailingStore, FailureMode};

#[test]
fn metadata_failure_writes_nothing_and_keeps_live_state() {
    let store = FailingStore::new(sample_store(), FailureMode::Metadata);
    let mut site = Site::load(Settings::default(), Some(&store));
    let before = site.resolver().live().clone();

    let mut draft = site.begin_draft();
    draft.set_field(Page::Home, "hero_title_en", "Edited");
    assert!(site.publish(&store, draft).is_err());

    assert_eq!(site.resolver().live(), &before);
    assert_eq!(store.inner().put_attempts(), 0);
    assert_eq!(
        store.inner().content().unwrap(),
        sample_config().to_pretty_json().unwrap()
    );
}

#[test]
fn put_failure_after_metadata_keeps_live_state() {
    let store = FailingStore::new(sample_store(), FailureMode::Put);
    let mut site = Site::load(Settings::default(), Some(&store));
    let before = site.resolver().live().clone();

    let mut draft = site.begin_draft();
    draft.set_field(Page::Home, "hero_title_en", "Edited");
    assert!(site.publish(&store, draft).is_err());

    assert_eq!(site.resolver().live(), &before);
    assert_eq!(
        store.inner().content().unwrap(),
        sample_config().to_pretty_json().unwrap()
    );
}

#[test]
fn fetch_failure_at_load_degrades_to_bundled() {
    let store = FailingStore::new(sample_store(), FailureMode::Fetch);
    let site = Site::load(Settings::default(), Some(&store));

    assert_eq!(site.source(), ConfigSource::Bundled);
    assert_eq!(
        site.resolver().live(),
        &pulse_config::defaults::bundled()
    );
}
