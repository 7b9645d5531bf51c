//! Fallback-resolution behavior across the public crate surface.

use pulse_config::{defaults, Language, Page, Resolver, SiteConfig};
use rstest::rstest;
use serde_json::json;

#[test]
fn every_bundled_field_resolves_to_itself() {
    let config = defaults::bundled();
    let resolver = Resolver::new(config.clone());
    for page in Page::ALL {
        for (name, value) in config.page(page).iter() {
            assert_eq!(resolver.resolve(page, name, "unused"), value);
        }
    }
}

#[rstest]
#[case(json!(null))]
#[case(json!({"home": 5}))]
#[case(json!({"home": {"hero_title_en": 42}}))]
#[case(json!({"home": {"hero_title_en": ""}}))]
fn malformed_remote_shapes_resolve_to_fallback(#[case] remote: serde_json::Value) {
    let resolver = Resolver::new(SiteConfig::from_value(&remote));
    assert_eq!(
        resolver.resolve(Page::Home, "hero_title_en", "compiled"),
        "compiled"
    );
}

#[test]
fn languages_stay_independent_under_partial_config() {
    let remote = json!({ "home": { "hero_title_en": "X" } });
    let resolver = Resolver::new(SiteConfig::from_value(&remote));

    assert_eq!(resolver.resolve(Page::Home, "hero_title_en", "fallback"), "X");
    assert_eq!(
        resolver.resolve(Page::Home, "hero_title_ar", "الافتراضي"),
        "الافتراضي"
    );
    assert_eq!(
        resolver.resolve_localized(Page::Home, "hero_title", Language::Ar, "الافتراضي"),
        "الافتراضي"
    );
}
