use gearforge::export::{self, EXPORT_NOTE};
use gearforge::matching::MatchCriteria;
use gearforge::model::{Effect, Item, Side, SlotCategory};
use gearforge::optimizer::{OptimizationOptions, OptimizationResult, Optimizer};
use gearforge::scorer::ScoringStrategy;
use regex::Regex;
use serde_json::Value;
use std::fs;

fn weapon_result() -> OptimizationResult {
    let items = vec![
        Item::new(
            SlotCategory::Weapon,
            Side::Commander,
            vec![Effect::new("melee unit strength when attacking", 10.0, 108)],
        ),
        Item::new(
            SlotCategory::Weapon,
            Side::Commander,
            vec![Effect::new("range unit strength when attacking", 20.0, 109)],
        ),
    ];
    Optimizer::new(
        MatchCriteria::keywords("PVP", vec!["melee".into(), "range".into()]),
        ScoringStrategy::Additive,
        OptimizationOptions::default(),
    )
    .unwrap()
    .run(&items, Side::Commander)
}

fn collect_keys(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                out.push(k.clone());
                collect_keys(v, out);
            }
        }
        Value::Array(arr) => arr.iter().for_each(|v| collect_keys(v, out)),
        _ => {}
    }
}

#[test]
fn test_export_has_no_item_identifiers() {
    let json = export::to_json_string(&weapon_result()).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();

    let mut keys = Vec::new();
    collect_keys(&doc, &mut keys);
    let id_like = Regex::new(r"(?i)^(id|.*_id|.*Id|uid|uuid|itemid)$").unwrap();
    for key in &keys {
        assert!(!id_like.is_match(key), "identifier-like key '{}'", key);
    }
    assert_eq!(doc["note"], EXPORT_NOTE);
}

#[test]
fn test_weapon_contribution_is_exact() {
    let json = export::to_json_string(&weapon_result()).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();

    let weapon = doc["slots"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["slot"] == "Weapon")
        .unwrap();
    assert_eq!(weapon["missing"], false);
    assert_eq!(
        weapon["contributions"],
        serde_json::json!([{
            "effectName": "range unit strength when attacking",
            "value": 20.0,
            "matchedBy": "range"
        }])
    );
    assert_eq!(doc["total"], 20.0);
    assert_eq!(doc["side"], "Commander");
    assert_eq!(doc["criteria"]["mode"], "keywords");
}

#[test]
fn test_missing_slots_serialize_without_pick() {
    let json = export::to_json_string(&weapon_result()).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();
    let hero = &doc["slots"][5];
    assert_eq!(hero["slot"], "Hero");
    assert_eq!(hero["missing"], true);
    assert!(hero.get("score").is_none());
    assert!(hero.get("contributions").is_none());
}

#[test]
fn test_generated_at_is_rfc3339() {
    let json = export::to_json_string(&weapon_result()).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();
    let stamp = doc["generatedAt"].as_str().unwrap();
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").unwrap();
    assert!(re.is_match(stamp), "bad timestamp {}", stamp);
}

#[test]
fn test_file_stem_is_sanitized() {
    let mut result = weapon_result();
    assert_eq!(export::file_stem(&result), "gge_set_commander_pvp");

    result.criteria = MatchCriteria::free_text("Wall / Gate protection!");
    assert_eq!(
        export::file_stem(&result),
        "gge_set_commander_wall_gate_protection"
    );
}

#[test]
fn test_csv_rows() {
    let mut buf = Vec::new();
    export::write_csv(&weapon_result(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "side,slot,missing,slot_score,effect,value,code,matched_by"
    );
    // Header plus five missing slots plus one effect row.
    assert_eq!(lines.len(), 7);
    assert!(lines.contains(
        &"Commander,Weapon,false,20.0,range unit strength when attacking,20.0,109,range"
    ));
    assert!(lines.contains(&"Commander,Hero,true,0.0,,,,"));
}

#[test]
fn test_export_to_dir_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let result = weapon_result();
    let paths = export::export_to_dir(&result, dir.path(), true).unwrap();

    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("gge_set_commander_pvp.json"));
    assert!(paths[1].ends_with("gge_set_commander_pvp.csv"));

    let content = fs::read_to_string(&paths[0]).unwrap();
    let back: OptimizationResult = serde_json::from_str(&content).unwrap();
    assert_eq!(back, result);
}
