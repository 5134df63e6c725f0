use assert_cmd::Command;
use assert_fs::fixture::{FileWriteStr, PathChild, PathCreateDir};
use predicates::prelude::predicate;

mod common;

const BLOB_HI_OID: &str = "32f95c0d1244a78b2be1bab8de17906fabb2c4a8";
const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
const SINGLE_FILE_TREE_OID: &str = "959186c87f11cedbc03fb0aa728575ce3dbf3335";
const NESTED_ROOT_TREE_OID: &str = "21ba8de9f48c3a6d9126bcbbcd2f561cb40e3ca2";
const NESTED_SUB_TREE_OID: &str = "c7c039b8c15bd5129af9cd583e3e1dae905c85fe";
const BLOB_BYE_OID: &str = "0abaeaa9932cc3322604c196b22c4db5c33aa548";
const BLOB_SEA_OID: &str = "97295c452312b51c9ce6f6e5483ffab5b8a71691";

#[test]
fn write_tree_for_single_file_matches_reference_vector()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    dir.child("a.txt").write_str("hi")?;

    let tree_oid = common::capture_stdout(dir.path(), &["write-tree"]);
    assert_eq!(tree_oid, SINGLE_FILE_TREE_OID);

    // children are persisted along with the parent
    assert!(common::object_path(dir.path(), BLOB_HI_OID).is_file());
    assert!(common::object_path(dir.path(), &tree_oid).is_file());

    Ok(())
}

#[test]
fn write_tree_persists_nested_directories_bottom_up() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    dir.child("b.txt").write_str("bye")?;
    dir.child("sub").create_dir_all()?;
    dir.child("sub").child("c.txt").write_str("sea")?;

    let tree_oid = common::capture_stdout(dir.path(), &["write-tree"]);
    assert_eq!(tree_oid, NESTED_ROOT_TREE_OID);

    for oid in [
        BLOB_BYE_OID,
        BLOB_SEA_OID,
        NESTED_SUB_TREE_OID,
        NESTED_ROOT_TREE_OID,
    ] {
        assert!(
            common::object_path(dir.path(), oid).is_file(),
            "missing object {oid}"
        );
    }

    Ok(())
}

#[test]
fn write_tree_on_empty_directory_yields_empty_tree() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    let tree_oid = common::capture_stdout(dir.path(), &["write-tree"]);
    assert_eq!(tree_oid, EMPTY_TREE_OID);

    Ok(())
}

#[test]
fn identical_content_yields_identical_identity_regardless_of_creation_order()
-> Result<(), Box<dyn std::error::Error>> {
    let first = assert_fs::TempDir::new()?;
    common::init_repo(first.path());
    first.child("a.txt").write_str("hi")?;
    first.child("sub").create_dir_all()?;
    first.child("sub").child("c.txt").write_str("sea")?;
    first.child("z.txt").write_str("bye")?;

    // same recursive content, physically created in the opposite order
    let second = assert_fs::TempDir::new()?;
    common::init_repo(second.path());
    second.child("z.txt").write_str("bye")?;
    second.child("sub").create_dir_all()?;
    second.child("sub").child("c.txt").write_str("sea")?;
    second.child("a.txt").write_str("hi")?;

    let first_oid = common::capture_stdout(first.path(), &["write-tree"]);
    let second_oid = common::capture_stdout(second.path(), &["write-tree"]);

    assert_eq!(first_oid, second_oid);

    Ok(())
}

#[cfg(unix)]
#[test]
fn write_tree_rejects_symbolic_links() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    dir.child("a.txt").write_str("hi")?;
    std::os::unix::fs::symlink(dir.path().join("a.txt"), dir.path().join("link.txt"))?;

    let mut sut = Command::cargo_bin("grit")?;
    sut.current_dir(dir.path()).arg("write-tree");

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported entry"));

    Ok(())
}

#[test]
fn ls_tree_name_only_lists_names_in_bytewise_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    // ASCII ordering: uppercase sorts before lowercase
    dir.child("b.txt").write_str("two")?;
    dir.child("B.txt").write_str("one")?;
    dir.child("a-dir").create_dir_all()?;
    dir.child("a-dir").child("inner.txt").write_str("three")?;

    let tree_oid = common::capture_stdout(dir.path(), &["write-tree"]);

    let mut sut = Command::cargo_bin("grit")?;
    sut.current_dir(dir.path())
        .arg("ls-tree")
        .arg("--name-only")
        .arg(&tree_oid);

    sut.assert()
        .success()
        .stdout(predicate::eq("B.txt\na-dir\nb.txt\n"));

    Ok(())
}

#[test]
fn ls_tree_full_listing_shows_mode_type_and_oid() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    dir.child("b.txt").write_str("bye")?;
    dir.child("sub").create_dir_all()?;
    dir.child("sub").child("c.txt").write_str("sea")?;

    let tree_oid = common::capture_stdout(dir.path(), &["write-tree"]);

    let mut sut = Command::cargo_bin("grit")?;
    sut.current_dir(dir.path()).arg("ls-tree").arg(&tree_oid);

    sut.assert().success().stdout(predicate::eq(format!(
        "100644 blob {BLOB_BYE_OID}\tb.txt\n40000 tree {NESTED_SUB_TREE_OID}\tsub\n"
    )));

    Ok(())
}

#[test]
fn ls_tree_on_blob_fails_with_wrong_kind() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    dir.child("a.txt").write_str("hi")?;
    let blob_oid = common::capture_stdout(dir.path(), &["hash-object", "-w", "a.txt"]);

    let mut sut = Command::cargo_bin("grit")?;
    sut.current_dir(dir.path())
        .arg("ls-tree")
        .arg("--name-only")
        .arg(&blob_oid);

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("expected a tree"));

    Ok(())
}

#[test]
fn ls_tree_rejects_record_missing_its_child_identity() -> Result<(), Box<dyn std::error::Error>>
{
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    // a record whose trailing 20-byte identity is cut short; the declared
    // envelope length matches, so only entry decoding can catch this
    let mut envelope = b"tree 23\0100644 a.txt\0".to_vec();
    envelope.extend_from_slice(&[0xab; 10]);

    let forged_oid = "ab".repeat(20);
    common::plant_envelope(dir.path(), &forged_oid, &envelope);

    let mut sut = Command::cargo_bin("grit")?;
    sut.current_dir(dir.path())
        .arg("ls-tree")
        .arg("--name-only")
        .arg(&forged_oid);

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("corrupt object"));

    Ok(())
}

#[test]
fn cat_file_pretty_prints_tree_entries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    dir.child("a.txt").write_str("hi")?;
    let tree_oid = common::capture_stdout(dir.path(), &["write-tree"]);

    let mut sut = Command::cargo_bin("grit")?;
    sut.current_dir(dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg(&tree_oid);

    sut.assert()
        .success()
        .stdout(predicate::eq(format!("100644 blob {BLOB_HI_OID}\ta.txt\n")));

    Ok(())
}

#[test]
fn write_tree_is_stable_across_repeated_runs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());

    dir.child("b.txt").write_str("bye")?;
    dir.child("sub").create_dir_all()?;
    dir.child("sub").child("c.txt").write_str("sea")?;

    let first = common::capture_stdout(dir.path(), &["write-tree"]);
    let second = common::capture_stdout(dir.path(), &["write-tree"]);

    assert_eq!(first, second);

    Ok(())
}
