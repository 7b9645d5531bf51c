//! Degradation paths: malformed remote blobs, failing stores, and the
//! bundled fallback.

use pretty_assertions::assert_eq;
use serde_json::json;

use pulse_config::{Page, Resolver, Settings, SiteConfig, defaults};
use pulse_core::{ConfigSource, Site, load_config};
use pulse_store::MemoryStore;
use pulse_test_utils::{FailingStore, FailureMode, sample_store};

#[test]
fn no_store_loads_bundled_defaults_without_any_call() {
    let site = Site::load(Settings::default(), None);
    assert_eq!(site.source(), ConfigSource::Bundled);
    assert_eq!(site.resolver().live(), &defaults::bundled());
}

#[test]
fn fetch_failure_degrades_to_bundled_defaults() {
    let store = FailingStore::new(sample_store(), FailureMode::Fetch);
    let site = Site::load(Settings::default(), Some(&store));
    assert_eq!(site.source(), ConfigSource::Bundled);
    assert_eq!(site.resolver().live(), &defaults::bundled());
}

#[test]
fn syntactically_invalid_remote_blob_degrades_to_bundled() {
    let store = MemoryStore::with_content("{not json");
    let (config, source) = load_config(Some(&store));
    assert_eq!(source, ConfigSource::Bundled);
    assert_eq!(config, defaults::bundled());
}

#[test]
fn misshapen_remote_blob_degrades_field_by_field() {
    // Valid JSON, wrong shapes: a numeric field, a page that is an array,
    // and fonts as a string. Every broken piece falls back on its own.
    let blob = json!({
        "home": {
            "hero_title_en": "Survives",
            "hero_title_ar": 42,
        },
        "about": ["not", "an", "object"],
        "fonts": "Cairo",
    });
    let store = MemoryStore::with_content(blob.to_string());

    let (config, source) = load_config(Some(&store));
    assert_eq!(source, ConfigSource::Remote);

    let bundled = defaults::bundled();
    let resolver = Resolver::new(config);
    assert_eq!(resolver.resolve(Page::Home, "hero_title_en", "fb"), "Survives");

    // Broken fields resolve to the caller's compiled fallback.
    let fallback = bundled.field(Page::Home, "hero_title_ar").unwrap();
    assert_eq!(resolver.resolve(Page::Home, "hero_title_ar", fallback), fallback);
    let fallback = bundled.field(Page::About, "h1_en").unwrap();
    assert_eq!(resolver.resolve(Page::About, "h1_en", fallback), fallback);

    // Fonts degrade to the bundled families.
    assert_eq!(resolver.live().fonts, SiteConfig::default().fonts);
}

#[test]
fn metadata_failure_aborts_publish_before_any_write() {
    let store = FailingStore::new(sample_store(), FailureMode::Metadata);
    let mut site = Site::load(Settings::default(), Some(&store));
    let before = site.resolver().live().clone();

    let mut draft = site.begin_draft();
    draft.set_field(Page::Home, "hero_title_en", "Never lands");
    assert!(site.publish(&store, draft).is_err());

    assert_eq!(site.resolver().live(), &before);
    assert_eq!(store.inner().put_attempts(), 0);
}

#[test]
fn put_failure_leaves_live_state_untouched() {
    let store = FailingStore::new(sample_store(), FailureMode::Put);
    let mut site = Site::load(Settings::default(), Some(&store));
    let before = site.resolver().live().clone();

    let mut draft = site.begin_draft();
    draft.set_field(Page::Home, "hero_title_en", "Never lands");
    assert!(site.publish(&store, draft).is_err());

    assert_eq!(site.resolver().live(), &before);
    assert_eq!(
        store.inner().content().unwrap(),
        before.to_pretty_json().unwrap()
    );
}
