//! Integration tests for the summary report
//!
//! These tests verify:
//! - The exact lines written for present and missing files
//! - Defensive plugin counting for partial JetBrains files
//! - Failures for unusable files
//! - Identical output across repeated runs

use camino::Utf8PathBuf;
use gitpod_extensions::services::{self, STARTUP_NOTICE};
use gitpod_extensions::{ConfigLoader, Summary};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn create_test_workspace() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    fs::create_dir_all(root.join(".gitpod/extensions")).unwrap();
    (temp_dir, root)
}

fn run_report(root: &Utf8PathBuf) -> (Summary, String) {
    let loader = ConfigLoader::with_root(root);
    let mut out = Vec::new();
    let summary = services::run(&loader, &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn test_report_with_both_files() {
    let (_temp_dir, root) = create_test_workspace();
    fs::write(
        root.join(".gitpod/extensions/vscode.yml"),
        "extensions:\n  - rust-lang.rust-analyzer\n  - vadimcn.vscode-lldb\n",
    )
    .unwrap();
    fs::write(
        root.join(".gitpod/extensions/jetbrains.yml"),
        "jetbrains:\n  intellij:\n    plugins:\n      - org.rust.lang\n",
    )
    .unwrap();

    let (summary, output) = run_report(&root);

    assert_eq!(
        summary,
        Summary {
            extension_count: 2,
            plugin_count: 1
        }
    );
    assert_eq!(
        output,
        "Loading extension configurations...\n\
         Loaded 2 VS Code extensions\n\
         Loaded JetBrains configuration with 1 plugins\n"
    );
}

#[test]
fn test_report_with_missing_files() {
    let (_temp_dir, root) = create_test_workspace();

    let (summary, output) = run_report(&root);

    assert_eq!(summary, Summary::default());
    assert_eq!(
        output,
        "Loading extension configurations...\n\
         Warning: VS Code extensions file not found\n\
         Warning: JetBrains configuration file not found\n\
         Loaded 0 VS Code extensions\n\
         Loaded JetBrains configuration with 0 plugins\n"
    );
}

#[test]
fn test_report_with_partial_jetbrains_file() {
    let (_temp_dir, root) = create_test_workspace();
    fs::write(
        root.join(".gitpod/extensions/jetbrains.yml"),
        "jetbrains:\n  intellij:\n    vmoptions: \"-Xmx2g\"\n",
    )
    .unwrap();

    let (summary, output) = run_report(&root);

    assert_eq!(summary.plugin_count, 0);
    assert!(output.starts_with(STARTUP_NOTICE));
    assert!(output.contains("Warning: VS Code extensions file not found\n"));
    assert!(!output.contains("JetBrains configuration file not found"));
    assert!(output.ends_with("Loaded JetBrains configuration with 0 plugins\n"));
}

#[test]
fn test_report_fails_on_malformed_file() {
    let (_temp_dir, root) = create_test_workspace();
    fs::write(root.join(".gitpod/extensions/vscode.yml"), "extensions: [a, b\n").unwrap();

    let loader = ConfigLoader::with_root(&root);
    let mut out = Vec::new();
    let err = services::run(&loader, &mut out).unwrap_err();

    assert!(err.to_string().contains("VS Code extensions"));
    // Nothing past the startup notice is written
    assert_eq!(String::from_utf8(out).unwrap(), format!("{STARTUP_NOTICE}\n"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let (_temp_dir, root) = create_test_workspace();
    fs::write(
        root.join(".gitpod/extensions/vscode.yml"),
        "extensions: [ms-python.python]\n",
    )
    .unwrap();

    let (_, first) = run_report(&root);
    let (_, second) = run_report(&root);

    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_extension_count_matches_file(ids in prop::collection::vec("[a-z]{1,8}\\.[a-z]{1,8}", 0..20)) {
        let (_temp_dir, root) = create_test_workspace();
        let yaml = serde_yaml_ng::to_string(&serde_yaml_ng::Mapping::from_iter([(
            serde_yaml_ng::Value::from("extensions"),
            serde_yaml_ng::Value::from(ids.clone()),
        )]))
        .unwrap();
        fs::write(root.join(".gitpod/extensions/vscode.yml"), yaml).unwrap();

        let (summary, output) = run_report(&root);

        prop_assert_eq!(summary.extension_count, ids.len());
        let expected = format!("Loaded {} VS Code extensions\n", ids.len());
        prop_assert!(output.contains(&expected));
    }
}
