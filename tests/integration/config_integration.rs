//! Integration tests for layered configuration loading

use nodepack::config::{global_config_path, ConfigLoader};
use nodepack::error::NodeError;
use std::fs;
use tempfile::TempDir;

use crate::integration::with_config_env;

fn write_workspace_config(workspace: &std::path::Path, name: &str, content: &str) {
    let dir = workspace.join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_defaults_without_any_sources() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    let config = with_config_env(&temp_dir, &[], || ConfigLoader::load(&workspace).unwrap());
    assert_eq!(config.text_concatenator.delimiter, ", ");
    assert_eq!(config.text_concatenator.index, 0);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    write_workspace_config(&workspace, "config.toml", "[text_concatenator]\ndelimiter = \"; \"\n");

    let config = with_config_env(&temp_dir, &[], || {
        let global = global_config_path().unwrap();
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(&global, "[text_concatenator]\ndelimiter = \"|\"\nindex = 3\n").unwrap();
        ConfigLoader::load(&workspace).unwrap()
    });

    assert_eq!(config.text_concatenator.delimiter, "; ");
    assert_eq!(config.text_concatenator.index, 3);
}

#[test]
fn test_environment_specific_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    write_workspace_config(&workspace, "config.toml", "[text_concatenator]\nindex = 1\n");
    write_workspace_config(&workspace, "production.toml", "[text_concatenator]\nindex = 4\n");

    let config = with_config_env(&temp_dir, &[("NODEPACK_ENV", "production")], || {
        ConfigLoader::load(&workspace).unwrap()
    });
    assert_eq!(config.text_concatenator.index, 4);
}

#[test]
fn test_environment_variables_override_files() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    write_workspace_config(&workspace, "config.toml", "[text_concatenator]\nindex = 1\n");

    let config = with_config_env(
        &temp_dir,
        &[("NODEPACK__TEXT_CONCATENATOR__INDEX", "7")],
        || ConfigLoader::load(&workspace).unwrap(),
    );
    assert_eq!(config.text_concatenator.index, 7);
}

#[test]
fn test_invalid_workspace_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    write_workspace_config(&workspace, "config.toml", "[logging]\noutput = \"printer\"\n");

    let result = with_config_env(&temp_dir, &[], || ConfigLoader::load(&workspace));
    match result {
        Err(NodeError::ConfigError(msg)) => assert!(msg.contains("printer")),
        other => panic!("expected ConfigError, got {:?}", other),
    }
}
