use std::{fs, path::PathBuf};

use gloc::{
    Settings,
    bootstrap::{generate, write_manifest},
};
use gloc_domain::{BuildLayout, GlocConfig};
use gloc_ports::progress::SilentProgress;
use gloc_usecase::RunOutcome;

use crate::common::{TempWorkspace, temp::FIVE_LINES};

fn settings(ws: &TempWorkspace, dirs: &[&str]) -> Settings {
    Settings {
        config: GlocConfig::new(dirs.iter().map(|d| ws.join(d))),
        layout: BuildLayout::new(ws.join("build")),
    }
}

fn report(ws: &TempWorkspace) -> String {
    ws.read("build/gloc/gloc.txt")
}

#[test]
fn single_file_counts_unterminated_last_line() {
    let ws = TempWorkspace::new("gloc_single");
    ws.create_file("source/test.xml", FIVE_LINES);

    let outcome = generate(&settings(&ws, &["source"]), &SilentProgress).expect("run succeeds");

    assert_eq!(report(&ws), "Directory 'source':\n'xml' has '5' LOC in sum\n");
    let path = outcome.output_path().expect("written");
    assert!(path.is_absolute());
    assert!(path.ends_with("build/gloc/gloc.txt"));
}

#[test]
fn nested_files_share_an_extension_total() {
    let ws = TempWorkspace::new("gloc_nested");
    ws.create_file("source/test.xml", FIVE_LINES);
    ws.create_file("source/another/test.xml", FIVE_LINES);

    generate(&settings(&ws, &["source"]), &SilentProgress).expect("run succeeds");

    assert_eq!(report(&ws), "Directory 'source':\n'xml' has '10' LOC in sum\n");
}

#[test]
fn each_root_gets_its_own_section() {
    let ws = TempWorkspace::new("gloc_roots");
    ws.create_file("source/test.xml", FIVE_LINES);
    ws.create_file("notSource/test.xml", FIVE_LINES);

    generate(&settings(&ws, &["source", "notSource"]), &SilentProgress).expect("run succeeds");

    assert_eq!(
        report(&ws),
        "Directory 'source':\n'xml' has '5' LOC in sum\nDirectory 'notSource':\n'xml' has '5' LOC in sum\n"
    );
}

#[test]
fn mixed_extensions_are_listed_separately() {
    let ws = TempWorkspace::new("gloc_mixed");
    ws.create_file("source/test.xml", FIVE_LINES);
    ws.create_file("source/another/test.html", FIVE_LINES);

    generate(&settings(&ws, &["source"]), &SilentProgress).expect("run succeeds");

    let text = report(&ws);
    assert!(text.contains("'xml' has '5' LOC in sum"));
    assert!(text.contains("'html' has '5' LOC in sum"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn reruns_are_byte_identical() {
    let ws = TempWorkspace::new("gloc_rerun");
    ws.create_file("source/test.xml", FIVE_LINES);
    ws.create_file("source/b.rs", "fn a() {}\r\nfn b() {}\r\n");
    ws.create_file("source/.env", "A=1\nB=2\n");
    let settings = settings(&ws, &["source"]);

    generate(&settings, &SilentProgress).expect("first run");
    let first = fs::read(ws.join("build/gloc/gloc.txt")).expect("read");
    generate(&settings, &SilentProgress).expect("second run");
    let second = fs::read(ws.join("build/gloc/gloc.txt")).expect("read");

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).expect("utf8"),
        "Directory 'source':\n'' has '2' LOC in sum\n'rs' has '2' LOC in sum\n'xml' has '5' LOC in sum\n"
    );
}

#[test]
fn disabled_run_ignores_missing_dirs() {
    let ws = TempWorkspace::new("gloc_disabled");
    let mut settings = settings(&ws, &["does-not-exist"]);
    settings.config.enabled = false;

    let outcome = generate(&settings, &SilentProgress).expect("disabled never fails");

    assert!(matches!(outcome, RunOutcome::Skipped));
    assert!(!ws.join("build").exists());
}

#[test]
fn invalid_second_root_leaves_previous_report() {
    let ws = TempWorkspace::new("gloc_invalid");
    ws.create_file("source/test.xml", FIVE_LINES);
    ws.create_file("build/gloc/gloc.txt", "previous\n");
    ws.create_file("notes.txt", "x\n");

    let err = generate(&settings(&ws, &["source", "notes.txt"]), &SilentProgress).unwrap_err();

    assert!(format!("{err:#}").contains("input should be directory"));
    assert_eq!(report(&ws), "previous\n");
}

#[test]
fn empty_root_renders_header_only() {
    let ws = TempWorkspace::new("gloc_empty_root");
    ws.create_dir("empty");

    generate(&settings(&ws, &["empty"]), &SilentProgress).expect("run succeeds");

    assert_eq!(report(&ws), "Directory 'empty':\n");
}

#[test]
fn manifest_lists_configured_dirs() {
    let ws = TempWorkspace::new("gloc_manifest");
    let settings = Settings {
        config: GlocConfig { enabled: false, dirs: vec![PathBuf::from("source"), PathBuf::from("notSource")] },
        layout: BuildLayout::new(ws.join("build")),
    };

    write_manifest(&settings).expect("manifest written");
    write_manifest(&settings).expect("manifest rewritten");

    assert_eq!(ws.read("build/gloc/inputdirs.txt"), "source\nnotSource\n");
}
