//! Integration tests for the `tj` CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tj() -> Command {
    let mut cmd = Command::cargo_bin("tj").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn store_arg(dir: &TempDir) -> String {
    dir.path().join("profiles").to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// bazi
// ---------------------------------------------------------------------------

#[test]
fn bazi_prints_pillars() {
    tj().args(["bazi", "--date", "1984-06-15"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("甲子")
                .and(predicate::str::contains("海中金"))
                .and(predicate::str::contains("丙辰"))
                .and(predicate::str::contains("日主 丙火"))
                .and(predicate::str::contains("五行 木1 火3 土2 金0 水2")),
        );
}

#[test]
fn bazi_with_hour() {
    tj().args(["bazi", "--date", "1984-06-15", "--hour", "午"])
        .assert()
        .success()
        .stdout(predicate::str::contains("甲午"));
}

#[test]
fn bazi_json() {
    tj().args(["bazi", "--date", "1984-06-15", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"birth_date\": \"1984-06-15\"")
                .and(predicate::str::contains("\"missing\""))
                .and(predicate::str::contains("\"Metal\"")),
        );
}

#[test]
fn bazi_rejects_bad_date() {
    tj().args(["bazi", "--date", "15.06.1984"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date '15.06.1984'"));
}

#[test]
fn bazi_out_of_range() {
    tj().args(["bazi", "--date", "1850-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the supported range"));
}

// ---------------------------------------------------------------------------
// fortune
// ---------------------------------------------------------------------------

#[test]
fn fortune_for_fixed_day() {
    tj().args(["fortune", "--date", "1984-06-15", "--today", "1984-06-15"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("关键词：秩序重建")
                .and(predicate::str::contains("能量指数 75"))
                .and(predicate::str::contains("机械表")),
        );
}

#[test]
fn fortune_json() {
    tj().args([
        "fortune",
        "--date",
        "1984-06-15",
        "--today",
        "1984-06-15",
        "--json",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("\"energy\": 75")
            .and(predicate::str::contains("\"keyword\": \"秩序重建\"")),
    );
}

// ---------------------------------------------------------------------------
// oracle
// ---------------------------------------------------------------------------

#[test]
fn seeded_cast_is_reproducible() {
    let first = tj().args(["cast", "--seed", "7"]).output().unwrap();
    let second = tj().args(["cast", "--seed", "7"]).output().unwrap();
    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cast_json_has_number() {
    tj().args(["cast", "--seed", "1", "--question", "前程", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"number\"")
                .and(predicate::str::contains("\"question\": \"前程\"")),
        );
}

#[test]
fn plum_from_date() {
    tj().args(["plum", "--date", "1990-05-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("雷泽 → 归妹 (line 1)"));
}

#[test]
fn stick_by_seed() {
    tj().args(["stick", "--seed", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("上上签").and(predicate::str::contains("吉人自有天相")));
}

#[test]
fn stick_json() {
    tj().args(["stick", "--seed", "9", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"number\": 2"));
}

// ---------------------------------------------------------------------------
// tarot
// ---------------------------------------------------------------------------

#[test]
fn tarot_daily_card() {
    tj().args(["tarot", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("今日卡").and(predicate::str::contains("今日能量指引")));
}

#[test]
fn tarot_three_card_spread() {
    tj().args(["tarot", "--spread", "three", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("过去")
                .and(predicate::str::contains("现在"))
                .and(predicate::str::contains("未来的可能性与建议")),
        );
}

#[test]
fn tarot_seeded_json_is_reproducible() {
    let run = || {
        tj().args(["tarot", "--spread", "three", "--seed", "42", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert_eq!(first, run());
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("\"spread\": \"ThreeCard\""));
    assert!(text.contains("\"reversed\""));
}

#[test]
fn tarot_exclude_leaves_too_few() {
    let exclude: Vec<String> = (0..77).map(|i| i.to_string()).collect();
    tj().args(["tarot", "--spread", "three", "--exclude", &exclude.join(",")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spread needs 3 cards, only 1 left"));
}

#[test]
fn tarot_exclude_all_but_one() {
    let exclude: Vec<String> = (1..78).map(|i| i.to_string()).collect();
    tj().args(["tarot", "--exclude", &exclude.join(","), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chinese\": \"愚人\""));
}

#[test]
fn tarot_rejects_unknown_spread() {
    tj().args(["tarot", "--spread", "celtic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown spread 'celtic'"));
}

// ---------------------------------------------------------------------------
// astrology, numerology, prompt
// ---------------------------------------------------------------------------

#[test]
fn astro_without_time() {
    tj().args(["astro", "--date", "1984-06-15"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("双子座").and(predicate::str::contains("需要准确的出生时间")),
        );
}

#[test]
fn astro_with_time() {
    tj().args(["astro", "--date", "1984-06-15", "--time", "08:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("需要准确的出生时间").not());
}

#[test]
fn astro_rejects_bad_time() {
    tj().args(["astro", "--date", "1984-06-15", "--time", "8h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time"));
}

#[test]
fn numerology_life_path() {
    tj().args(["numerology", "--date", "1984-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("生命灵数 7"));
}

#[test]
fn prompt_lists_pillars() {
    tj().args(["prompt", "--date", "1984-06-15", "--gender", "female"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("八字：年柱甲子 月柱丙午 日柱丙辰 时柱戊子")
                .and(predicate::str::contains("性别：女")),
        );
}

#[test]
fn prompt_respects_limit() {
    let out = tj()
        .args(["prompt", "--date", "1984-06-15", "--limit", "10"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert_eq!(text.trim_end().chars().count(), 10);
}

// ---------------------------------------------------------------------------
// profiles
// ---------------------------------------------------------------------------

#[test]
fn profile_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    tj().args(["profile", "--store", store.as_str(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles found"));

    tj().args([
        "profile", "save", "ming", "--date", "1984-06-15", "--name", "小明", "--hour", "辰",
        "--store", store.as_str(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Saved profile 'ming'"));

    assert!(dir.path().join("profiles/ming.json").exists());

    tj().args(["profile", "--store", store.as_str(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ming").and(predicate::str::contains("1 profiles")));

    tj().args(["profile", "--store", store.as_str(), "show", "ming"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("小明")
                .and(predicate::str::contains("hour:       辰"))
                .and(predicate::str::contains("day master: 丙火")),
        );

    tj().args(["profile", "--store", store.as_str(), "delete", "ming"])
        .assert()
        .success();

    tj().args(["profile", "--store", store.as_str(), "show", "ming"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile not found: ming"));
}

#[test]
fn profile_rejects_bad_id() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    tj().args([
        "profile", "--store", store.as_str(), "save", "bad.id", "--date", "1984-06-15",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid profile id"));
}

#[test]
fn profile_store_ignores_other_files() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    fs::create_dir_all(dir.path().join("profiles")).unwrap();
    fs::write(dir.path().join("profiles/README.txt"), "not a profile").unwrap();
    tj().args(["profile", "--store", store.as_str(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles found"));
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_runs_commands_from_stdin() {
    let dir = TempDir::new().unwrap();
    tj().args(["session", "--seed", "3", "--store", store_arg(&dir).as_str()])
        .write_stdin("bazi 1984-06-15\nstick\njournal\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("日主 丙火")
                .and(predicate::str::contains("2 entries"))
                .and(predicate::str::contains("再会。")),
        );
}

#[test]
fn session_with_profile() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    tj().args(["profile", "save", "me", "--date", "1984-06-15", "--store", store.as_str()])
        .assert()
        .success();

    tj().args([
        "session",
        "--profile",
        "me",
        "--today",
        "1984-06-15",
        "--store",
        store.as_str(),
    ])
    .write_stdin("today\nbogus\nq\n")
    .assert()
    .success()
    .stdout(
        predicate::str::contains("秩序重建")
            .and(predicate::str::contains("unknown command: bogus")),
    );
}

#[test]
fn session_missing_profile_fails() {
    let dir = TempDir::new().unwrap();
    tj().args(["session", "--profile", "ghost", "--store", store_arg(&dir).as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile not found: ghost"));
}
