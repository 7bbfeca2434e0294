use regex::Regex;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    inventory_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let inventory_path = dir.path().join("inventory.json");

        // Commander: two weapons, one helmet. Castellan: one armor.
        let mut f = File::create(&inventory_path).unwrap();
        writeln!(
            f,
            r#"{{"I": [
                [11, 2, 2, 0, -1, [[108, 0, [10]]], -1],
                [12, 2, 2, 0, -1, [[109, 0, [20]]], -1],
                [13, 3, 2, 0, -1, [[112, 0, [5]], [99999, 0, [70]]], -1],
                [14, 1, 1, 0, -1, [[110, 0, [40]]], -1]
            ]}}"#
        )
        .unwrap();

        Self {
            dir,
            inventory_path,
        }
    }

    fn inventory(&self) -> &str {
        self.inventory_path.to_str().unwrap()
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gearforge"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute gearforge")
}

fn stdout_of(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(
        output.status.success(),
        "gearforge failed:\n{}\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    stdout
}

#[test]
fn test_optimize_both_sides() {
    let ctx = TestContext::new();
    let out = run(&["optimize", "-i", ctx.inventory(), "--side", "both"]);
    let stdout = stdout_of(&out);

    let commander = Regex::new(r"Commander • PVP • keywords • additive").unwrap();
    let castellan = Regex::new(r"Castellan • PVP • keywords • additive").unwrap();
    let c_pos = commander.find(&stdout).expect("no Commander report").start();
    let k_pos = castellan.find(&stdout).expect("no Castellan report").start();
    assert!(c_pos < k_pos, "Commander must be reported first");

    assert!(stdout.contains("range unit strength when attacking (match: range) 20"));
    assert!(stdout.contains("Missing slot: Hero"));
}

#[test]
fn test_free_text_target_and_export() {
    let ctx = TestContext::new();
    let export_dir = ctx.dir.path().join("out");
    let out = run(&[
        "optimize",
        "-i",
        ctx.inventory(),
        "--target",
        "moat",
        "--export",
        export_dir.to_str().unwrap(),
        "--csv",
    ]);
    let stdout = stdout_of(&out);
    assert!(stdout.contains("target \"moat\""));

    let json_path = export_dir.join("gge_set_commander_moat.json");
    let csv_path = export_dir.join("gge_set_commander_moat.csv");
    assert!(json_path.exists());
    assert!(csv_path.exists());

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(doc["total"], 5.0);
    assert_eq!(doc["criteria"]["targetLabel"], "moat");
    assert!(doc.get("generatedAt").is_some());
}

#[test]
fn test_list_filters_items() {
    let ctx = TestContext::new();
    let out = run(&[
        "list",
        "-i",
        ctx.inventory(),
        "--slot",
        "weapon",
        "--search",
        "unit strength",
    ]);
    let stdout = stdout_of(&out);
    let re = Regex::new(r"Showing 2 of 2 filtered items \(page 1/1\)").unwrap();
    assert!(re.is_match(&stdout), "unexpected output:\n{}", stdout);
    assert!(stdout.contains("range unit strength when attacking: 20"));
}

#[test]
fn test_list_side_and_slot_ignore_case() {
    let ctx = TestContext::new();
    let out = run(&["list", "-i", ctx.inventory(), "--side", "CASTELLAN", "--slot", "Armor"]);
    let stdout = stdout_of(&out);
    assert!(stdout.contains("Showing 1 of 1 filtered items (page 1/1)"));
    assert!(stdout.contains("wall protection: 40"));
}

#[test]
fn test_presets_listed() {
    let out = run(&["presets"]);
    let stdout = stdout_of(&out);
    for mode in ["PVP", "Nomad", "Beri", "Samurai", "NPC"] {
        assert!(stdout.contains(mode), "missing preset {}", mode);
    }
}

#[test]
fn test_unknown_mode_fails() {
    let ctx = TestContext::new();
    let out = run(&["optimize", "-i", ctx.inventory(), "--mode", "Nomad", "--side", "castellan"]);
    assert!(!out.status.success());
}

#[test]
fn test_weighted_without_maxima_fails() {
    let ctx = TestContext::new();
    let out = run(&[
        "optimize",
        "-i",
        ctx.inventory(),
        "--strategy",
        "maxima-weighted",
    ]);
    assert!(!out.status.success());
}

#[test]
fn test_missing_inventory_fails() {
    let out = run(&["optimize", "-i", "/nonexistent/inventory.json"]);
    assert!(!out.status.success());
}

#[test]
fn test_maxima_summary() {
    let ctx = TestContext::new();
    let path = ctx.dir.path().join("maxima.json");
    fs::write(&path, r#"{"wall protection": 100, "max": {"gate protection": 50}}"#).unwrap();
    let out = run(&["maxima", "--maxima", path.to_str().unwrap()]);
    let stdout = stdout_of(&out);
    assert!(stdout.contains("type: object"));
    assert!(stdout.contains("max.gate protection"));
}
