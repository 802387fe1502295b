/*!
 * End-to-end lint runs over the fixture templates and catalogs
 */

use anyhow::Result;
use l10n_lint::app_config::Config;
use l10n_lint::{Controller, ValidationError};
use crate::common;

fn config_for(translated: &str) -> Config {
    Config {
        untranslated: vec![common::test_resource_path("templates").to_string_lossy().to_string()],
        translated: vec![common::test_resource_path(translated).to_string_lossy().to_string()],
        ..Config::default()
    }
}

/// Test that a clean catalog passes
#[test]
fn test_run_withGoodCatalog_shouldPass() -> Result<()> {
    common::init_logging();
    let controller = Controller::with_config(config_for("translated/good"))?;

    let report = controller.run()?;

    assert!(report.passed());
    assert_eq!(report.file_count(), 1);
    assert_eq!(report.checked_count(), 8);
    assert_eq!(report.summary(), "Checked 1 file for invalid translations");

    Ok(())
}

/// Test that every broken translation in a catalog is reported once
#[test]
fn test_run_withBadCatalog_shouldReportEachFailure() -> Result<()> {
    common::init_logging();
    let controller = Controller::with_config(config_for("translated/bad/client.po"))?;

    let report = controller.run()?;

    assert!(!report.passed());
    assert_eq!(report.error_count(), 5);
    assert_eq!(report.summary(), "Found 5 errors in 1 file");

    let errors: Vec<&ValidationError> = report.files[0].failures.iter().map(|f| &f.error).collect();
    assert_eq!(
        errors[0],
        &ValidationError::UnexpectedAttributeValue {
            tag_name: "a".to_string(),
            attribute_name: "href".to_string(),
            attribute_value: "signin".to_string(),
        }
    );
    assert_eq!(
        errors[1],
        &ValidationError::UnexpectedAttribute {
            tag_name: "a".to_string(),
            attribute_name: "target".to_string(),
        }
    );
    assert_eq!(
        errors[2],
        &ValidationError::UnexpectedTag {
            tag_name: "img".to_string(),
        }
    );
    assert!(matches!(errors[3], ValidationError::MalformedHtml { .. }));
    assert!(matches!(errors[4], ValidationError::MalformedHtml { .. }));

    Ok(())
}

/// Test that every catalog under a directory is checked and counted separately
#[test]
fn test_run_withDirectoryOfCatalogs_shouldCountPerFile() -> Result<()> {
    let controller = Controller::with_config(config_for("translated"))?;

    let report = controller.run()?;

    assert_eq!(report.file_count(), 2);
    assert_eq!(report.summary(), "Found 5 errors in 2 files");
    let failing: Vec<bool> = report.files.iter().map(|f| f.passed()).collect();
    // Sorted paths: bad/ before good/
    assert_eq!(failing, vec![false, true]);

    Ok(())
}

/// Test the log lines produced for a failing catalog
#[test]
fn test_describeFailures_withBadCatalog_shouldNameFileAndTranslation() -> Result<()> {
    let controller = Controller::with_config(config_for("translated/bad/client.po"))?;
    let allow_list = controller.build_allow_list()?;

    let path = common::test_resource_path("translated/bad/client.po");
    let report = controller.check_file(&path, &allow_list)?;
    let lines = report.describe_failures();

    let src = path.display().to_string();
    assert_eq!(
        lines[0],
        format!(
            "UNEXPECTED ATTRIBUTE VALUE ({}): href=signin [<a href=\"signin\">Connectez-vous</a> pour continuer]",
            src
        )
    );
    assert_eq!(
        lines[3],
        format!("MALFORMED HTML ({}): <span tabindex=\"1\">Aller au contenu</a>", src)
    );

    Ok(())
}

/// Test that a run without any template is refused
#[test]
fn test_run_withNoTemplates_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config {
        untranslated: vec![temp_dir.path().to_string_lossy().to_string()],
        translated: vec![common::test_resource_path("translated").to_string_lossy().to_string()],
        ..Config::default()
    };

    let controller = Controller::with_config(config)?;
    assert!(controller.run().is_err());

    Ok(())
}
