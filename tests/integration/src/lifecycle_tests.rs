//! Full lifecycle: load, edit a draft, publish, resolve the new state.

use pretty_assertions::assert_eq;

use pulse_config::{FontSlot, Language, Page, Settings};
use pulse_core::{ConfigSource, Site, publish_with_version};
use pulse_store::BlobStore;
use pulse_test_utils::{sample_config, sample_store};

#[test]
fn load_edit_publish_resolve() {
    let store = sample_store();
    let mut site = Site::load(Settings::default(), Some(&store));
    assert_eq!(site.source(), ConfigSource::Remote);
    assert_eq!(site.resolve(Page::Home, "hero_title_en", "fb"), "MedPulse");

    let mut draft = site.begin_draft();
    draft.set_field(Page::Home, "hero_title_en", "MedPulse 2.0");
    draft.set_field(Page::About, "h1_ar", "من نحن");
    let receipt = site.publish(&store, draft).unwrap();

    // The committed blob and the live state agree exactly.
    assert_eq!(store.content().unwrap(), site.resolver().live().to_pretty_json().unwrap());
    assert_eq!(store.metadata().unwrap().sha, receipt.sha);
    assert_eq!(site.resolve(Page::Home, "hero_title_en", "fb"), "MedPulse 2.0");
    assert_eq!(site.resolve(Page::About, "h1_ar", "fb"), "من نحن");

    // A fresh load from the same store sees the published state.
    let reloaded = Site::load(Settings::default(), Some(&store));
    assert_eq!(reloaded.resolver().live(), site.resolver().live());
}

#[test]
fn fonts_apply_on_load_and_on_publish() {
    let store = sample_store();
    let mut site = Site::load(Settings::default(), Some(&store));
    assert_eq!(site.resolver().fonts().var(Language::Ar, FontSlot::Headings), "Cairo");

    let mut draft = site.begin_draft();
    draft.set_font(Language::Ar, FontSlot::Headings, "Amiri");
    site.publish(&store, draft).unwrap();
    assert_eq!(site.resolver().fonts().var(Language::Ar, FontSlot::Headings), "Amiri");

    let reloaded = Site::load(Settings::default(), Some(&store));
    assert_eq!(reloaded.resolver().fonts().var(Language::Ar, FontSlot::Headings), "Amiri");
}

#[test]
fn concurrent_editors_second_publish_conflicts() {
    let store = sample_store();
    let mut first = Site::load(Settings::default(), Some(&store));
    let second = Site::load(Settings::default(), Some(&store));

    let mut draft_a = first.begin_draft();
    draft_a.set_field(Page::Home, "hero_title_en", "Editor A");
    let mut draft_b = second.begin_draft();
    draft_b.set_field(Page::Home, "hero_title_en", "Editor B");

    let stale = store.metadata().unwrap().sha;
    first.publish(&store, draft_a).unwrap();

    let content_b = draft_b.config().to_pretty_json().unwrap();
    let err = publish_with_version(&store, &content_b, &stale).unwrap_err();
    assert!(err.is_conflict());

    // The loser's publish left no trace; editor A's content stands.
    let winner = Site::load(Settings::default(), Some(&store));
    assert_eq!(winner.resolve(Page::Home, "hero_title_en", "fb"), "Editor A");
}

#[test]
fn abandoned_draft_never_touches_live_state() {
    let store = sample_store();
    let site = Site::load(Settings::default(), Some(&store));
    let before = site.resolver().live().clone();

    let mut draft = site.begin_draft();
    draft.set_field(Page::Contact, "phone_val", "+20 100 000 0000");
    drop(draft);

    assert_eq!(site.resolver().live(), &before);
    assert_eq!(store.content().unwrap(), sample_config().to_pretty_json().unwrap());
}
