use gearforge::config::{Config, ScoringParams, SearchParams, SideSelection, StrategyKind};
use gearforge::model::Side;
use gearforge::optimizer::{OptimizationOptions, TOP_N};
use gearforge::presets::PresetBook;
use gearforge::scorer::{MaximaTable, ScoringStrategy};
use gearforge::GearForgeError;
use serde_json::json;
use std::fs;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.search.passes, 1);
    assert_eq!(config.search.top_n, TOP_N);
    assert_eq!(config.scoring.strategy, StrategyKind::Additive);

    let options = OptimizationOptions::from(&config.search);
    assert_eq!(options, OptimizationOptions::default());
    assert_eq!(
        config.scoring.build_strategy().unwrap(),
        ScoringStrategy::Additive
    );
}

#[test]
fn test_no_unknown_target_flag() {
    let params = SearchParams {
        no_unknown_target: true,
        ..SearchParams::default()
    };
    assert!(!OptimizationOptions::from(&params).allow_unknown_in_target);
}

#[test]
fn test_partial_config_json_uses_defaults() {
    let config: Config = serde_json::from_value(json!({
        "search": { "passes": 3 },
        "scoring": { "strategy": "maxima-weighted", "purity": 80.0 }
    }))
    .unwrap();
    assert_eq!(config.search.passes, 3);
    assert_eq!(config.search.top_n, TOP_N);
    assert_eq!(config.scoring.strategy, StrategyKind::MaximaWeighted);
    assert!(config.scoring.maxima.is_none());
}

#[test]
fn test_weighted_strategy_needs_maxima() {
    let params = ScoringParams {
        strategy: StrategyKind::MaximaWeighted,
        ..ScoringParams::default()
    };
    assert!(matches!(
        params.build_strategy(),
        Err(GearForgeError::Config(_))
    ));
}

#[test]
fn test_weighted_strategy_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maxima.json");
    fs::write(&path, r#"{"maxima": {"wall protection": {"max": 50, "weight": 2}}}"#).unwrap();

    let params = ScoringParams {
        strategy: StrategyKind::MaximaWeighted,
        maxima: Some(path.to_string_lossy().into_owned()),
        purity: 150.0,
    };
    match params.build_strategy().unwrap() {
        ScoringStrategy::MaximaWeighted { maxima, purity } => {
            assert_eq!(purity, 100.0);
            assert_eq!(maxima.get("Wall Protection").unwrap().max, 50.0);
        }
        other => panic!("unexpected strategy {:?}", other),
    }

    let bad = ScoringParams {
        purity: f64::NAN,
        ..params
    };
    assert!(bad.build_strategy().is_err());
}

#[test]
fn test_maxima_root_must_be_object() {
    assert!(matches!(
        MaximaTable::from_json(&json!("nope")),
        Err(GearForgeError::Config(_))
    ));
}

#[test]
fn test_side_selection() {
    assert_eq!(SideSelection::Both.sides(), vec![Side::Commander, Side::Castellan]);
    assert_eq!(SideSelection::from(Side::Castellan).sides(), vec![Side::Castellan]);
}

#[test]
fn test_preset_book_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.json");
    fs::write(
        &path,
        r#"{"Commander": {"PVP": ["melee"], "Fire": ["fire", "burn"]}, "Castellan": {"NPC": ["npc"]}}"#,
    )
    .unwrap();

    let book = PresetBook::load_from_file(&path).unwrap();
    let modes: Vec<&str> = book
        .modes(Side::Commander)
        .iter()
        .map(|p| p.mode.as_str())
        .collect();
    assert_eq!(modes, vec!["Fire", "PVP"]);
    assert_eq!(book.criteria(Side::Commander, "fire").unwrap().label(), "Fire");
    assert!(matches!(
        book.criteria(Side::Castellan, "PVP"),
        Err(GearForgeError::NoKeywordsConfigured(_))
    ));
}

#[test]
fn test_bad_preset_json_is_an_error() {
    assert!(matches!(
        PresetBook::from_json(r#"{"Commander": {"PVP": "melee"}}"#),
        Err(GearForgeError::Json(_))
    ));
    assert!(PresetBook::from_json(r#"{"Admiral": {}}"#).is_err());
}
