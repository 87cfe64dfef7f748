use timeline_core::{current_year, default_milestones, TimelineConfig, TimelineError, TimelineOptions};

#[test]
fn empty_options_keep_every_default() {
    let cfg = TimelineConfig::from(TimelineOptions::default());

    assert_eq!(cfg.start_year, 1900);
    assert_eq!(cfg.end_year, current_year());
    assert_eq!(cfg.indicator_interval, 25);
    assert!(cfg.show_indicators);
    assert!(cfg.show_interval_years);
    assert!(cfg.interactive);
    assert_eq!(cfg.classes.wrapper, "historica_wrapper");
    assert_eq!(cfg.classes.line, "historica_line");
    assert_eq!(cfg.classes.interval_indicator, "historica_indicator");
    assert_eq!(cfg.classes.milestone, "historica_milestone");
    assert_eq!(cfg.classes.milestone_wrapper, "historica_milestone_wrapper");
    assert_eq!(cfg.classes.milestone_box_id, "historica_content_box");
    assert_eq!(cfg.milestones, default_milestones());
}

#[test]
fn default_sample_has_ten_milestones() {
    let years: Vec<_> = default_milestones().iter().map(|m| m.year).collect();
    assert_eq!(years.len(), 10);
    assert_eq!(years.first(), Some(&Some(1900)));
    assert_eq!(years.last(), Some(&Some(2015)));
}

#[test]
fn overrides_win_key_by_key() {
    let options = TimelineOptions::from_json_str(
        r#"{
            "startYear": 1800,
            "showIndicators": false,
            "lineClass": "custom_line",
            "milestoneBoxID": "custom_box"
        }"#,
    )
    .expect("valid options");
    let cfg = options.apply(TimelineConfig::default());

    assert_eq!(cfg.start_year, 1800);
    assert_eq!(cfg.end_year, current_year());
    assert!(!cfg.show_indicators);
    assert!(cfg.show_interval_years);
    assert_eq!(cfg.classes.line, "custom_line");
    assert_eq!(cfg.classes.milestone_box_id, "custom_box");
    assert_eq!(cfg.classes.milestone, "historica_milestone");
}

#[test]
fn supplied_milestones_replace_the_sample_list() {
    let options = TimelineOptions::from_json_str(
        r#"{ "milestones": [ { "year": 1969, "title": "Moon landing" } ] }"#,
    )
    .expect("valid options");
    let cfg = TimelineConfig::from(options);

    assert_eq!(cfg.milestones.len(), 1);
    assert_eq!(cfg.milestones[0].title, "Moon landing");
}

#[test]
fn wrapper_class_uses_the_canonical_key() {
    let options =
        TimelineOptions::from_json_str(r#"{ "milestoneWrapperClass": "group", "interactive": false }"#)
            .expect("valid options");
    let cfg = TimelineConfig::from(options);

    assert_eq!(cfg.classes.milestone_wrapper, "group");
    assert!(!cfg.interactive);
}

#[test]
fn unknown_keys_are_ignored() {
    let options = TimelineOptions::from_json_str(r#"{ "theme": "dark", "endYear": 1950 }"#)
        .expect("valid options");
    assert_eq!(options.end_year, Some(1950));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = TimelineOptions::from_json_str("{ startYear: ").unwrap_err();
    assert!(matches!(err, TimelineError::Parse(_)));
}

#[test]
fn mistyped_values_are_a_parse_error() {
    let err = TimelineOptions::from_json_str(r#"{ "indicatorInterval": -5 }"#).unwrap_err();
    assert!(matches!(err, TimelineError::Parse(_)));
}

#[test]
fn effective_config_serializes_with_the_option_key_names() {
    let cfg = TimelineConfig::from(TimelineOptions {
        start_year: Some(1900),
        end_year: Some(2000),
        ..TimelineOptions::default()
    });
    let value = serde_json::to_value(&cfg).expect("serializable");

    assert_eq!(value["startYear"], 1900);
    assert_eq!(value["endYear"], 2000);
    assert_eq!(value["indicatorInterval"], 25);
    assert_eq!(value["showIntervalYears"], true);
    assert_eq!(value["classes"]["milestoneWrapper"], "historica_milestone_wrapper");
    assert_eq!(value["classes"]["milestoneBoxID"], "historica_content_box");
    assert_eq!(value["milestones"][0]["imageUrl"], "./images/something.jpg");
    assert!(value.get("start_year").is_none());
}
