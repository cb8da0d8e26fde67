use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("msgsplice").expect("binary built")
}

fn root_arg(root: &Path) -> String {
    root.to_str().unwrap().to_string()
}

#[test]
fn split_writes_frontend_and_blocks_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("appengine/src/msg")).unwrap();

    let source = root.join("merged_es.properties");
    fs::write(
        &source,
        "# Greeting shown on startup\nappengine.greetingLabel = Hello\n\nappengine.switchToSpanish = Spanish\n\nblockseditor.HELLO = Hola\n",
    )
    .unwrap();

    bin()
        .args([
            "--root",
            &root_arg(root),
            "split",
            "--lang",
            "es",
            "--lang_name",
            "Spanish",
            source.to_str().unwrap(),
        ])
        .assert()
        .success();

    let frontend =
        fs::read_to_string(root.join("appengine/src/msg/Messages_es.properties")).unwrap();
    assert!(frontend.contains("# Greeting shown on startup"));
    assert!(frontend.contains("greetingLabel = Hello"));
    assert!(!frontend.contains("switchTo"));

    let blocks = fs::read_to_string(root.join("blockseditor/src/msg/es/_messages.js")).unwrap();
    assert!(blocks.contains("goog.provide('AI.Blockly.Msg.es');"));
    assert!(blocks.contains("Blockly.Msg.es.switch_language_to_Spanish = {"));
    assert!(blocks.contains("    Blockly.Msg.es.HELLO = 'Hola';"));
}

#[test]
fn split_requires_language_flags() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("merged.properties");
    fs::write(&source, "appengine.key = value\n").unwrap();

    bin()
        .args(["split", source.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--lang"));
}

#[test]
fn split_fails_on_missing_source() {
    let temp = TempDir::new().unwrap();

    bin()
        .args([
            "--root",
            &root_arg(temp.path()),
            "split",
            "--lang",
            "es",
            "--lang_name",
            "Spanish",
            temp.path().join("absent.properties").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn combine_writes_labeled_template() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("appengine/build/msg")).unwrap();
    fs::create_dir_all(root.join("blockseditor/src/msg/en")).unwrap();
    fs::create_dir_all(root.join("i18n")).unwrap();

    fs::write(
        root.join("appengine/build/msg/Messages_default.properties"),
        "# generated\ngreetingLabel = Hello\n",
    )
    .unwrap();
    fs::write(
        root.join("blockseditor/src/msg/en/_messages.js"),
        "// A greeting.\nBlockly.Msg.HELLO = 'Hello';\n",
    )
    .unwrap();

    bin()
        .args(["--root", &root_arg(root), "combine"])
        .assert()
        .success();

    let template = fs::read_to_string(root.join("i18n/translation_template.properties")).unwrap();
    assert!(template.starts_with("# Frontend definitions\n"));
    assert!(template.contains("# generated\n"));
    assert!(template.contains("appengine.greetingLabel = Hello\n"));
    assert!(template.contains("# Blocks editor definitions\n"));
    assert!(template.contains("blockseditor.HELLO = Hello\n# Description: A greeting.\n"));
}

#[test]
fn combine_fails_without_inputs() {
    let temp = TempDir::new().unwrap();

    bin()
        .args(["--root", &root_arg(temp.path()), "combine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn tmx_merge_unions_units_by_tuid() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.tmx");
    let second = temp.path().join("b.tmx");
    let dest = temp.path().join("merged.tmx");

    fs::write(
        &first,
        r#"<tmx version="1.4"><body><tu tuid="42"><tuv xml:lang="en"><seg>Hello</seg></tuv></tu></body></tmx>"#,
    )
    .unwrap();
    fs::write(
        &second,
        r#"<tmx version="1.4"><body><tu tuid="42"><tuv xml:lang="es"><seg>Hola</seg></tuv></tu><tu tuid="99"><tuv xml:lang="es"><seg>Perdido</seg></tuv></tu></body></tmx>"#,
    )
    .unwrap();

    bin()
        .args([
            "tmx_merge",
            "--dest",
            dest.to_str().unwrap(),
            first.to_str().unwrap(),
            second.to_str().unwrap(),
        ])
        .assert()
        .success();

    let merged = fs::read_to_string(&dest).unwrap();
    assert!(merged.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(merged.contains("<seg>Hello</seg>"));
    assert!(merged.contains("<seg>Hola</seg>"));
    assert!(!merged.contains("tuid=\"99\""));
}

#[test]
fn tmx_merge_without_sources_reports_no_output() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("merged.tmx");

    bin()
        .args(["tmx_merge", "--dest", dest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No output"));

    assert!(!dest.exists());
}

#[test]
fn tmx_merge_requires_dest_flag() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("a.tmx");
    fs::write(&source, "<tmx><body/></tmx>").unwrap();

    bin()
        .args(["tmx_merge", source.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dest"));
}
