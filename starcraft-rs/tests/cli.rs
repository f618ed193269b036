//! CLI integration tests for starcraft-rs
//!
//! These tests run the real binary against in-memory inputs.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn starcraft() -> Command {
    Command::cargo_bin("starcraft-rs").expect("starcraft-rs binary should build")
}

#[test]
fn test_depot_url() {
    starcraft()
        .args(["depot", "url", "73326d61 75730000 deadbeef"])
        .assert()
        .success()
        .stdout("http://us.depot.battle.net:1119/deadbeef.s2ma\n");
}

#[test]
fn test_depot_info_json() {
    starcraft()
        .args(["depot", "info", "--json", "73326d6165750000cafebabe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"server\": \"eu\""))
        .stdout(predicate::str::contains("\"hash\": \"cafebabe\""));
}

#[test]
fn test_depot_too_short() {
    starcraft()
        .args(["depot", "url", "73326d61"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode depot descriptor"));
}

#[test]
fn test_attribute_decode() {
    starcraft()
        .args(["attribute", "decode", "0x0BB9", "torP", "--player", "1"])
        .assert()
        .success()
        .stdout("[1] Race: Protoss\n");
}

#[test]
fn test_attribute_decode_hex_value() {
    starcraft()
        .args(["attribute", "decode", "3000", "--hex", "72736146"])
        .assert()
        .success()
        .stdout("[all] Game Speed: Faster\n");
}

#[test]
fn test_attribute_unknown_id() {
    starcraft()
        .args(["attribute", "decode", "0x1234", "torP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown attribute id"));
}

#[test]
fn test_attribute_custom_registry() {
    let temp_dir = TempDir::new().unwrap();
    let registry = temp_dir.path().join("registry.yaml");
    fs::write(
        &registry,
        "- id: 7\n  name: Mode\n  values:\n    ABC: Alpha\n",
    )
    .unwrap();

    starcraft()
        .args(["attribute", "decode", "7", "CBA", "--registry"])
        .arg(&registry)
        .assert()
        .success()
        .stdout("[all] Mode: Alpha\n");
}

#[test]
fn test_attribute_dump_and_list() {
    let temp_dir = TempDir::new().unwrap();
    let dump = temp_dir.path().join("builtin.yaml");

    starcraft()
        .args(["attribute", "dump", "--output"])
        .arg(&dump)
        .assert()
        .success();

    let yaml = fs::read_to_string(&dump).unwrap();
    assert!(yaml.contains("name: Race"));

    starcraft()
        .args(["attribute", "list", "--registry"])
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("Game Speed"))
        .stdout(predicate::str::contains("13 attribute ids"));
}

#[test]
fn test_attribute_list_values() {
    starcraft()
        .args(["attribute", "list", "--values"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Prot\""))
        .stdout(predicate::str::contains("Protoss"));
}

#[test]
fn test_team_hash_is_order_independent() {
    let bob = "http://us.battle.net/sc2/en/profile/100/1/Bob/";
    let alice = "http://us.battle.net/sc2/en/profile/100/1/Alice/";

    let first = starcraft()
        .args(["team", "hash", bob, alice])
        .output()
        .unwrap();
    let second = starcraft()
        .args(["team", "hash", alice, bob])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8(first.stdout).unwrap().trim().len(), 64);
}

#[test]
fn test_team_url() {
    starcraft()
        .args(["team", "url", "Bob", "--uid", "100", "--gateway", "eu"])
        .assert()
        .success()
        .stdout("http://eu.battle.net/sc2/en/profile/100/1/Bob/\n");
}
