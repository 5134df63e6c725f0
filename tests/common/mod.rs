#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::predicate;
use std::path::{Path, PathBuf};

/// Run `grit init` in the given directory and assert it succeeded.
pub fn init_repo(dir: &Path) {
    let mut cmd = Command::cargo_bin("grit").unwrap();
    cmd.current_dir(dir).arg("init");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty grit repository"));
}

/// Fanout path of a stored object within a repository.
pub fn object_path(repo_root: &Path, oid: &str) -> PathBuf {
    repo_root
        .join(".git")
        .join("objects")
        .join(&oid[..2])
        .join(&oid[2..])
}

/// Run the binary and return its trimmed stdout (typically a 40-hex OID).
pub fn capture_stdout(dir: &Path, args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("grit").unwrap();
    let output = cmd.current_dir(dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

/// Plant a raw (pre-assembled) envelope at the fanout path of `oid`,
/// compressed the way the database stores it.
pub fn plant_envelope(repo_root: &Path, oid: &str, envelope: &[u8]) {
    use flate2::Compression;
    use flate2::write::ZlibEncoder;
    use std::io::Write;

    let path = object_path(repo_root, oid);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(envelope).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();
}
