#![allow(dead_code)]

use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// JavaScript-ish filler of exactly `len` bytes
pub fn sample_asset(len: usize) -> Vec<u8> {
    let line = b"export function render(node) { node.textContent = state.label; }\n";
    line.iter().copied().cycle().take(len).collect()
}

pub fn gunzip(path: &Path) -> Vec<u8> {
    let mut decoder = GzDecoder::new(fs::File::open(path).unwrap());
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).unwrap();
    out
}

/// Project with `data/web` assets (compressed siblings included) and a non-web file
pub fn seed_project(root: &Path) {
    let web = root.join("data/web");
    fs::create_dir_all(web.join("css")).unwrap();
    fs::write(web.join("index.html"), sample_asset(3000)).unwrap();
    fs::write(web.join("index.html.gz"), b"gz").unwrap();
    fs::write(web.join("app.js"), sample_asset(5000)).unwrap();
    fs::write(web.join("app.js.gz"), b"gz").unwrap();
    fs::write(web.join("css/site.css"), sample_asset(1200)).unwrap();
    fs::write(web.join("favicon.ico"), [0u8, 1, 2, 3]).unwrap();
    fs::create_dir_all(root.join("data/config")).unwrap();
    fs::write(root.join("data/config/wifi.json"), r#"{"ssid": "lab"}"#).unwrap();
}

/// Relative paths of every file under `dir`, sorted
pub fn file_names(dir: &Path) -> Vec<PathBuf> {
    let mut names = Vec::new();
    collect(dir, dir, &mut names);
    names.sort();
    names
}

fn collect(base: &Path, dir: &Path, names: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(base, &path, names);
        } else {
            names.push(path.strip_prefix(base).unwrap().to_path_buf());
        }
    }
}

/// Run the webstage binary with a clean build-tool environment
pub fn webstage(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_webstage"));
    cmd.current_dir(cwd)
        .args(args)
        .env_remove("PROJECT_DIR")
        .env_remove("WEBSTAGE_TARGETS")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
