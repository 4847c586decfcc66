use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

async fn write_config(path: &Path, content: &str) {
    tokio::fs::create_dir_all(path.join(".bsl-common"))
        .await
        .unwrap();
    tokio::fs::write(path.join(".bsl-common/config.json"), content)
        .await
        .unwrap();
}

async fn run_in(path: &Path, args: &[&str]) -> anyhow::Result<()> {
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(path).unwrap();

    let result = bsl_common_cli::main(&to_args(args)).await;

    std::env::set_current_dir(&original_dir).unwrap();
    result
}

#[tokio::test]
#[serial]
async fn test_cli_type() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(temp_dir.path(), &["bsl-common", "type", "СправочникСсылка.Товары"]).await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_type_json() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(
        temp_dir.path(),
        &["bsl-common", "type", "Number", "--format", "json"],
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_ref() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(
        temp_dir.path(),
        &["bsl-common", "ref", "Document.Invoice.TabularSection.Goods"],
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_ref_invalid() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(temp_dir.path(), &["bsl-common", "ref", "Catalog"]).await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("Failed to parse reference 'Catalog'"));
}

#[tokio::test]
#[serial]
async fn test_cli_modules() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(temp_dir.path(), &["bsl-common", "modules", "Справочники"]).await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_modules_unknown_kind() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(temp_dir.path(), &["bsl-common", "modules", "Spaceship"]).await;

    assert!(result.is_err());
}

#[tokio::test]
#[serial]
async fn test_cli_compat() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(
        temp_dir.path(),
        &["bsl-common", "compat", "Version_8_3_10", "DontUse"],
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_support() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(temp_dir.path(), &["bsl-common", "support", "2", "1", "99"]).await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_config_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_in(temp_dir.path(), &["bsl-common", "config"]).await;

    assert!(result.is_ok());
    assert!(!temp_dir.path().join(".bsl-common/config.json").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        r#"{"scriptVariant": "en", "format": "json"}"#,
    )
    .await;

    let result = run_in(temp_dir.path(), &["bsl-common", "ref", "Справочник.Товары"]).await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "not json").await;

    let result = run_in(temp_dir.path(), &["bsl-common", "config"]).await;

    assert!(result.is_err());
}
