#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::error::GenError;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};

const SIZED_HEADER: &str = "HEADER-10\n";
const SIZED_CONTENT: &str = "{{ name }}:abcdefghijklmnopqrstuvwxyz\n";

fn sized_strategy(max_file_size: usize) -> TemplateStrategy {
    TemplateStrategy {
        header_template: SIZED_HEADER.to_string(),
        content_template: SIZED_CONTENT.to_string(),
        max_file_size,
        ..TemplateStrategy::default()
    }
}

/// Go source declaring `count` models `M1..Mcount`, marker methods in order
fn numbered_models(count: usize) -> String {
    let mut src = String::from("package models\n\n");
    for i in 1..=count {
        src.push_str(&format!("type M{i} struct {{ ID int64 }}\n"));
    }
    for i in 1..=count {
        src.push_str(&format!("func (M{i}) TableName() string {{ return \"m{i}\" }}\n"));
    }
    src
}

fn options(dir: &Path) -> GeneratorOptions {
    GeneratorOptions {
        dir: dir.to_path_buf(),
        ..GeneratorOptions::default()
    }
}

fn file_names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn test_files_are_bounded_by_size() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(5)).unwrap();

    let report = generate(&options(dir.path()), &sized_strategy(50)).unwrap();

    assert_eq!(report.models, vec!["M1", "M2", "M3", "M4", "M5"]);
    assert_eq!(
        file_names(&report.files),
        vec!["auto_generate_0.go", "auto_generate_1.go", "auto_generate_2.go"]
    );
    let row = |n: u8| format!("M{n}:abcdefghijklmnopqrstuvwxyz\n");
    assert_eq!(
        read(dir.path(), "auto_generate_0.go"),
        format!("{SIZED_HEADER}{}{}", row(1), row(2))
    );
    assert_eq!(
        read(dir.path(), "auto_generate_1.go"),
        format!("{SIZED_HEADER}{}{}", row(3), row(4))
    );
    assert_eq!(
        read(dir.path(), "auto_generate_2.go"),
        format!("{SIZED_HEADER}{}", row(5))
    );
    for file in &report.files[..2] {
        assert_eq!(fs::metadata(file).unwrap().len(), 70);
    }
}

#[test]
fn test_exact_threshold_flushes() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(2)).unwrap();

    // header + one model is exactly 40 bytes
    let report = generate(&options(dir.path()), &sized_strategy(40)).unwrap();
    assert_eq!(report.files.len(), 2);
    assert_eq!(fs::metadata(&report.files[0]).unwrap().len(), 40);
    assert_eq!(fs::metadata(&report.files[1]).unwrap().len(), 40);
}

#[test]
fn test_zero_bound_writes_one_file_per_model() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(3)).unwrap();

    let report = generate(&options(dir.path()), &sized_strategy(0)).unwrap();
    assert_eq!(report.files.len(), 3);
    for file in &report.files {
        assert!(fs::read_to_string(file).unwrap().starts_with(SIZED_HEADER));
    }
}

#[test]
fn test_large_bound_writes_single_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(5)).unwrap();

    let report = generate(&options(dir.path()), &sized_strategy(10_000)).unwrap();
    assert_eq!(file_names(&report.files), vec!["auto_generate_0.go"]);
    assert_eq!(fs::metadata(&report.files[0]).unwrap().len(), 10 + 5 * 30);
}

#[test]
fn test_no_models_no_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("plain.go"),
        "package models\n\ntype Plain struct{ ID int }\n",
    )
    .unwrap();
    fs::write(dir.path().join("auto_generate_0.go"), "stale").unwrap();

    let report = generate(&options(dir.path()), &DefaultStrategy).unwrap();
    assert!(report.models.is_empty());
    assert!(report.files.is_empty());
    assert_eq!(report.units, 1);
    assert_eq!(file_names(&report.removed), vec!["auto_generate_0.go"]);
    assert!(!dir.path().join("auto_generate_0.go").exists());
}

#[test]
fn test_custom_prefix() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(1)).unwrap();
    fs::write(dir.path().join("gen_9.go"), "stale").unwrap();

    let opts = GeneratorOptions {
        dir: dir.path().to_path_buf(),
        file_prefix: "gen_".to_string(),
    };
    let report = generate(&opts, &sized_strategy(50)).unwrap();
    assert_eq!(file_names(&report.files), vec!["gen_0.go"]);
    assert_eq!(file_names(&report.removed), vec!["gen_9.go"]);
}

#[test]
fn test_stale_files_are_not_parsed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(1)).unwrap();
    // a stale file that would otherwise qualify as a model
    fs::write(
        dir.path().join("auto_generate_7.go"),
        "package models\n\ntype Ghost struct{ ID int }\n\nfunc (Ghost) TableName() string { return \"g\" }\n",
    )
    .unwrap();
    fs::write(dir.path().join("auto_generate_notes.txt"), "keep").unwrap();

    let report = generate(&options(dir.path()), &sized_strategy(50)).unwrap();
    assert_eq!(report.models, vec!["M1"]);
    assert!(!dir.path().join("auto_generate_7.go").exists());
    assert!(dir.path().join("auto_generate_notes.txt").exists());
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(5)).unwrap();

    let first = generate(&options(dir.path()), &sized_strategy(50)).unwrap();
    let contents: Vec<String> = first
        .files
        .iter()
        .map(|f| fs::read_to_string(f).unwrap())
        .collect();

    let second = generate(&options(dir.path()), &sized_strategy(50)).unwrap();
    assert_eq!(second.files, first.files);
    assert_eq!(second.removed, first.files);
    assert_eq!(second.units, 1);
    for (file, expected) in second.files.iter().zip(&contents) {
        assert_eq!(&fs::read_to_string(file).unwrap(), expected);
    }
}

#[test]
fn test_template_error_leaves_directory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(1)).unwrap();
    fs::write(dir.path().join("auto_generate_0.go"), "stale").unwrap();

    let strategy = TemplateStrategy {
        content_template: "{% for %}".to_string(),
        ..TemplateStrategy::default()
    };
    let err = generate(&options(dir.path()), &strategy).unwrap_err();
    assert!(matches!(err, GenError::TemplateCompile { template: "content", .. }));
    assert_eq!(read(dir.path(), "auto_generate_0.go"), "stale");
}

#[test]
fn test_render_error_keeps_flushed_files_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("models.go"), numbered_models(4)).unwrap();

    let strategy = TemplateStrategy {
        header_template: SIZED_HEADER.to_string(),
        content_template: "{{ name }}{% if name == \"M3\" %}{{ missing.column }}{% endif %}\n"
            .to_string(),
        max_file_size: 0,
        ..TemplateStrategy::default()
    };
    let err = generate(&options(dir.path()), &strategy).unwrap_err();
    match err {
        GenError::Render { template, target, .. } => {
            assert_eq!(template, "content");
            assert_eq!(target, "M3");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(read(dir.path(), "auto_generate_0.go"), "HEADER-10\nM1\n");
    assert_eq!(read(dir.path(), "auto_generate_1.go"), "HEADER-10\nM2\n");
    assert!(!dir.path().join("auto_generate_2.go").exists());
}

#[test]
fn test_missing_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(&options(&dir.path().join("nope")), &DefaultStrategy).unwrap_err();
    assert!(matches!(err, GenError::Discovery { .. }));
}

#[test]
fn test_header_uses_first_package() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.go"), "package first\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("b.go"), numbered_models(1).replace("models", "second"))
        .unwrap();

    let strategy = TemplateStrategy {
        package_key: "pkg".to_string(),
        header_template: "package {{ pkg }}\n".to_string(),
        content_template: "// {{ name }}\n".to_string(),
        ..TemplateStrategy::default()
    };
    let report = generate(&options(dir.path()), &strategy).unwrap();
    assert_eq!(report.units, 2);
    assert_eq!(read(dir.path(), "auto_generate_0.go"), "package first\n// M1\n");
}

#[test]
fn test_default_strategy_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("user.go"),
        r#"package models

// User is an account.
type User struct {
	ID   int64 `gorm:"primaryKey"`
	Name string // display
}

func (*User) TableName() string { return "users" }
"#,
    )
    .unwrap();

    let report = generate(&options(dir.path()), &DefaultStrategy).unwrap();
    assert_eq!(report.models, vec!["User"]);
    let expected = r#"// Code generated by modelgen. DO NOT EDIT.

package models

// User is an account.
// UserColumns lists the storage columns of User in declaration order.
var UserColumns = []string{
	"id",
	"name", // display
}

// Columns returns the storage columns of User.
func (*User) Columns() []string {
	return UserColumns
}

// PrimaryKey returns the primary key column of User, or "" when it has none.
func (*User) PrimaryKey() string {
	return "id"
}
"#;
    assert_eq!(read(dir.path(), "auto_generate_0.go"), expected);
}

#[test]
fn test_output_layout_naming() {
    let layout = OutputLayout::new("/tmp/out", "auto_generate_");
    assert_eq!(layout.file_path(0), PathBuf::from("/tmp/out/auto_generate_0.go"));
    assert_eq!(layout.file_path(12), PathBuf::from("/tmp/out/auto_generate_12.go"));
}
