#![allow(clippy::unwrap_used, clippy::expect_used)]

use modelgen::generator::{generate, load_strategy, GeneratorOptions, TemplateStrategy};
use modelgen::{DefaultStrategy, GenError};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const COLUMNS_ONLY: &str =
    "{{ name }}:{% for f in fields %} {{ f.column }}{% if f.primary_key %}*{% endif %}{% endfor %}\n";

fn columns_strategy() -> TemplateStrategy {
    TemplateStrategy {
        header_template: "package {{ package }}\n".to_string(),
        content_template: COLUMNS_ONLY.to_string(),
        ..TemplateStrategy::default()
    }
}

fn run(dir: &Path) -> String {
    let options = GeneratorOptions {
        dir: dir.to_path_buf(),
        ..GeneratorOptions::default()
    };
    let report = generate(&options, &columns_strategy()).unwrap();
    report
        .files
        .iter()
        .map(|f| fs::read_to_string(f).unwrap())
        .collect()
}

#[test]
fn test_explicit_key_beats_inferred_id() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("account.go"),
        r#"package store

type Account struct {
	UID int64 `gorm:"column:uid;primaryKey"`
	ID  int64
}

func (a *Account) TableName() string {
	return "accounts"
}
"#,
    )
    .unwrap();

    assert_eq!(run(dir.path()), "package store\nAccount: uid* id\n");
}

#[test]
fn test_column_resolution_precedence() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("order.go"),
        r#"package store

import "time"

type Base struct{ ID uint }

type Order struct {
	Base
	Ref        string    `gorm:"column:a;column:ref_code" json:"reference"`
	Total      int64     `json:"grand_total"`
	Note       string    `gorm:"size:255" json:"note_text"`
	UserID     int64
	CreatedAt  time.Time `json:"created_at,omitempty"`
	Tags, Refs []string
}

func (Order) TableName() string { return "orders" }
"#,
    )
    .unwrap();

    assert_eq!(
        run(dir.path()),
        "package store\nOrder: base ref_code grand_total note userid created_at,omitempty tags refs\n"
    );
}

#[test]
fn test_models_across_files_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("b.go"),
        "package store\n\ntype B struct{ ID int }\n\nfunc (B) TableName() string { return \"b\" }\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("a.go"),
        "package store\n\ntype A struct{ Key int `gorm:\"primary_key\"` }\n\nfunc (A) TableName() string { return \"a\" }\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("c.go"),
        "package store\n\ntype NotAModel struct{ ID int }\n",
    )
    .unwrap();

    assert_eq!(run(dir.path()), "package store\nA: key*\nB: id*\n");
}

#[test]
fn test_broken_file_still_contributes_intact_models() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("models.go"),
        r#"package store

type User struct{ ID int }

func (User) TableName() string { return "users" }

func broken( {
"#,
    )
    .unwrap();

    assert_eq!(run(dir.path()), "package store\nUser: id*\n");
}

#[test]
fn test_directory_config_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("models.go"),
        "package store\n\ntype T struct{ ID int }\n\nfunc (T) TableName() string { return \"t\" }\n",
    )
    .unwrap();
    fs::write(dir.path().join("content.j2"), "// {{ primary_key.column }}\n").unwrap();
    fs::write(
        dir.path().join("modelgen.toml"),
        "package_key = \"pkg\"\nheader_template = \"package {{ pkg }}\\n\"\ncontent_template_file = \"content.j2\"\n",
    )
    .unwrap();

    let options = GeneratorOptions {
        dir: dir.path().to_path_buf(),
        ..GeneratorOptions::default()
    };
    let strategy = load_strategy(dir.path()).unwrap();
    let report = generate(&options, &strategy).unwrap();
    assert_eq!(
        fs::read_to_string(&report.files[0]).unwrap(),
        "package store\n// id\n"
    );
}

#[test]
fn test_default_strategy_compiles_against_unseeded_run() {
    let dir = tempfile::tempdir().unwrap();
    let options = GeneratorOptions {
        dir: dir.path().to_path_buf(),
        ..GeneratorOptions::default()
    };
    let report = generate(&options, &DefaultStrategy).unwrap();
    assert_eq!(report.units, 0);
    assert!(report.files.is_empty());
}

#[test]
fn test_missing_directory() {
    let options = GeneratorOptions {
        dir: Path::new("/definitely/not/here").to_path_buf(),
        ..GeneratorOptions::default()
    };
    let err = generate(&options, &DefaultStrategy).unwrap_err();
    assert!(matches!(err, GenError::Discovery { .. }));
    assert!(err.to_string().contains("/definitely/not/here"));
}
