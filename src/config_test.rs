use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn defaults_match_stock_page_timings() {
    let config = SiteConfig::default();
    assert_eq!(config.gallery.stagger(), Duration::from_millis(100));
    assert_eq!(config.gallery.settle(), Duration::from_millis(300));
    assert_eq!(config.gallery.haptic(), Duration::from_millis(30));
    assert_eq!(config.gallery.settle_policy, SettlePolicy::Fixed);
    assert_eq!(config.nav.haptic_ms, 50);
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.contact.latency_ms, 1500);
    assert!((config.contact.success_rate - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.contact.reset_ms, 5000);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "gallery": { "settle_policy": "after_stagger", "stagger_ms": 50 } }"#)
        .unwrap();
    assert_eq!(config.gallery.settle_policy, SettlePolicy::AfterStagger);
    assert_eq!(config.gallery.stagger_ms, 50);
    assert_eq!(config.gallery.settle_ms, 300);
    assert_eq!(config.nav, NavConfig::default());
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteConfig::from_json("{ gallery: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn success_rate_out_of_range_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "contact": { "success_rate": 1.5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::SuccessRate(rate) if (rate - 1.5).abs() < f64::EPSILON));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(ref level) if level == "loud"));
    assert!(err.to_string().contains("loud"));
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = SiteConfig::from_json(r#"{ "log_level": "DEBUG" }"#).unwrap();
    assert_eq!(config.level().unwrap(), log::Level::Debug);
}

#[test]
fn blank_placeholder_id_is_rejected() {
    for raw in [r#"{ "gallery": { "placeholder": { "id": "" } } }"#, r#"{ "gallery": { "placeholder": { "id": "  " } } }"#] {
        let err = SiteConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::PlaceholderId(_)), "{raw}: {err}");
    }
}

#[test]
fn placeholder_id_may_not_reuse_grid_id() {
    let err = SiteConfig::from_json(r#"{ "gallery": { "placeholder": { "id": "projects-grid" } } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::PlaceholderId(ref id) if id == GALLERY_GRID_ID));
}

#[test]
fn custom_placeholder_id_is_accepted() {
    let config = SiteConfig::from_json(r#"{ "gallery": { "placeholder": { "id": "empty-gallery" } } }"#).unwrap();
    assert_eq!(config.gallery.placeholder.id, "empty-gallery");
    assert_eq!(config.gallery.placeholder.title, PLACEHOLDER_TITLE);
}
