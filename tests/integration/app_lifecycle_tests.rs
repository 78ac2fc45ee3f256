/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use feedlog::app_config::Config;
use feedlog::app_controller::{Controller, InputSource};
use feedlog::errors::ChangelogError;
use crate::common::{self, MINIMAL_CHANGELOG};

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert_eq!(controller.config(), &Config::default());
    Ok(())
}

/// Test that an invalid configuration is rejected up front
#[test]
fn test_controller_withBlankProductName_shouldFail() {
    let mut config = Config::default();
    config.product_name = String::new();

    assert!(Controller::with_config(config).is_err());
}

/// Test that the configured product name reaches the output
#[test]
fn test_generate_withCustomProductName_shouldRenderIt() -> Result<()> {
    let mut config = Config::default();
    config.product_name = "MyApp".to_string();
    let controller = Controller::with_config(config)?;

    let xml = controller.generate(MINIMAL_CHANGELOG)?;
    assert!(xml.contains("<h4>MyApp Changes: </h4>"));

    Ok(())
}

/// Test that a malformed input surfaces the parser error
#[test]
fn test_generate_withMalformedInput_shouldExposeChangelogError() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let error = controller.generate("no delimiter here").unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ChangelogError>(),
        Some(ChangelogError::MalformedInput(_))
    ));

    Ok(())
}

/// Test running with the built-in release notes
#[test]
fn test_run_withBuiltinSource_shouldReturnDescription() -> Result<()> {
    common::init_test_logging();
    let controller = Controller::new_for_test()?;
    let xml = controller.run(InputSource::Builtin, None, false)?;

    assert!(xml.contains("<description>"));
    assert_eq!(xml.matches("<li>").count(), 12);

    Ok(())
}

/// Test running from a file and writing to an output file
#[test]
fn test_run_withFileSourceAndOutput_shouldWriteDescription() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_changelog(temp_dir.path(), "notes.txt")?;
    let output = temp_dir.path().join("out").join("description.xml");

    let xml = controller.run(InputSource::File(input), Some(output.clone()), false)?;

    assert_eq!(std::fs::read_to_string(&output)?, xml);
    assert!(xml.contains("<li>2. Improved installation speed</li>"));
    assert!(xml.contains("<h4>PS: 本版本需要 macOS 13 及以上</h4>"));

    Ok(())
}

/// Test that an existing output file is kept without force overwrite
#[test]
fn test_run_withExistingOutput_shouldRespectForceFlag() -> Result<()> {
    common::init_test_logging();
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "notes.txt", MINIMAL_CHANGELOG)?;
    let output = common::create_test_file(temp_dir.path(), "description.xml", "old")?;

    controller.run(InputSource::File(input.clone()), Some(output.clone()), false)?;
    assert_eq!(std::fs::read_to_string(&output)?, "old");

    let xml = controller.run(InputSource::File(input), Some(output.clone()), true)?;
    assert_eq!(std::fs::read_to_string(&output)?, xml);

    Ok(())
}

/// Test that a missing input file is an error
#[test]
fn test_run_withMissingInputFile_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;

    let result = controller.run(InputSource::File(temp_dir.path().join("missing.txt")), None, false);
    assert!(result.is_err());

    Ok(())
}
