mod common;

use common::{gunzip, sample_asset, stdout, webstage};
use std::fs;
use webstage_compress::{compress_dir, AssetReport};
use webstage_core::AssetFilter;

#[test]
fn test_compressed_output_roundtrips() {
    let temp = tempfile::TempDir::new().unwrap();
    let web = temp.path();
    fs::write(web.join("app.js"), sample_asset(40_000)).unwrap();
    fs::write(web.join("style.css"), sample_asset(7_000)).unwrap();
    fs::write(web.join("index.html"), sample_asset(900)).unwrap();

    let reports = compress_dir(web, &AssetFilter::default(), 9).unwrap();

    assert_eq!(reports.len(), 3);
    for report in &reports {
        let source = web.join(&report.name);
        let original = fs::read(&source).unwrap();
        assert_eq!(gunzip(&web.join(format!("{}.gz", report.name))), original);
        assert_eq!(report.original_bytes, original.len() as u64);
    }
}

#[test]
fn test_sources_left_untouched() {
    let temp = tempfile::TempDir::new().unwrap();
    let source = temp.path().join("app.js");
    let content = sample_asset(10_000);
    fs::write(&source, &content).unwrap();
    let before = fs::metadata(&source).unwrap().modified().unwrap();

    compress_dir(temp.path(), &AssetFilter::default(), 9).unwrap();

    assert_eq!(fs::read(&source).unwrap(), content);
    assert_eq!(fs::metadata(&source).unwrap().modified().unwrap(), before);
}

#[test]
fn test_existing_gz_overwritten_and_other_files_ignored() {
    let temp = tempfile::TempDir::new().unwrap();
    let web = temp.path();
    fs::write(web.join("a.js"), sample_asset(2048)).unwrap();
    fs::write(web.join("a.js.gz"), vec![7u8; 500]).unwrap();
    fs::write(web.join("b.txt"), "plain notes").unwrap();

    let reports = compress_dir(web, &AssetFilter::default(), 9).unwrap();

    assert_eq!(reports.len(), 1);
    let new_size = fs::metadata(web.join("a.js.gz")).unwrap().len();
    assert_ne!(fs::read(web.join("a.js.gz")).unwrap(), vec![7u8; 500]);
    assert_eq!(gunzip(&web.join("a.js.gz")), sample_asset(2048));
    assert_eq!(fs::read_to_string(web.join("b.txt")).unwrap(), "plain notes");
    assert!(!web.join("b.txt.gz").exists());

    let expected_ratio: f64 = format!("{:.1}", new_size as f64 / 2048.0 * 100.0)
        .parse()
        .unwrap();
    assert_eq!(
        reports[0],
        AssetReport {
            name: "a.js".to_string(),
            original_bytes: 2048,
            compressed_bytes: new_size,
        }
    );
    assert_eq!(reports[0].ratio(), Some(expected_ratio));
}

#[test]
fn test_does_not_recurse() {
    let temp = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("vendor")).unwrap();
    fs::write(temp.path().join("vendor/lib.js"), sample_asset(3000)).unwrap();

    let reports = compress_dir(temp.path(), &AssetFilter::default(), 9).unwrap();

    assert!(reports.is_empty());
    assert!(!temp.path().join("vendor/lib.js.gz").exists());
}

#[test]
fn test_cli_prints_one_line_per_asset() {
    let temp = tempfile::TempDir::new().unwrap();
    let web = temp.path().join("data/web");
    fs::create_dir_all(&web).unwrap();
    fs::write(web.join("b.css"), sample_asset(4096)).unwrap();
    fs::write(web.join("a.js"), sample_asset(2048)).unwrap();
    fs::write(web.join("readme.md"), "docs").unwrap();

    let output = webstage(temp.path(), &["compress"], &[]);
    assert!(output.status.success());

    let line = |name: &str, original: u64| {
        let compressed = fs::metadata(web.join(format!("{}.gz", name))).unwrap().len();
        format!(
            "{}: {}KB -> {}KB ({:.1}%)",
            name,
            original / 1024,
            compressed / 1024,
            compressed as f64 / original as f64 * 100.0
        )
    };
    let expected = format!("{}\n{}\n", line("a.js", 2048), line("b.css", 4096));
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_failure_mid_run_aborts() {
    let temp = tempfile::TempDir::new().unwrap();
    let web = temp.path();
    fs::write(web.join("a.js"), sample_asset(2048)).unwrap();
    fs::write(web.join("b.js"), sample_asset(2048)).unwrap();
    fs::write(web.join("c.js"), sample_asset(2048)).unwrap();
    // b.js.gz cannot be created over a directory
    fs::create_dir(web.join("b.js.gz")).unwrap();

    let result = compress_dir(web, &AssetFilter::default(), 9);

    assert!(result.is_err());
    assert!(web.join("a.js.gz").is_file());
    assert!(!web.join("c.js.gz").exists());
}

#[test]
fn test_cli_stops_after_first_failure() {
    let temp = tempfile::TempDir::new().unwrap();
    let web = temp.path().join("data/web");
    fs::create_dir_all(web.join("b.js.gz")).unwrap();
    fs::write(web.join("a.js"), sample_asset(2048)).unwrap();
    fs::write(web.join("b.js"), sample_asset(2048)).unwrap();
    fs::write(web.join("c.css"), sample_asset(2048)).unwrap();

    let output = webstage(temp.path(), &["compress"], &[]);

    assert!(!output.status.success());
    let printed = stdout(&output);
    assert_eq!(printed.lines().count(), 1);
    assert!(printed.starts_with("a.js: 2KB -> "));
    assert!(!web.join("c.css.gz").exists());
}

#[test]
fn test_cli_fails_on_missing_directory() {
    let temp = tempfile::TempDir::new().unwrap();

    let output = webstage(temp.path(), &["compress"], &[]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}
