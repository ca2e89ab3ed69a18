use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use zoo_visit::core::pipeline::VisitPipeline;
use zoo_visit::{plan_visit, LocalStorage, TomlConfig, VisitEngine, ZooError};
use zoo_visit::core::VisitRequest;

const ZOO_DATA: &str = "\
Name / Hibernation / Enclosure / Active Hours
Lion / none / A1 / 10-16
Brown Bear / winter / B2 / 8-18
Hedgehog / winter / C3 / 18-22
Fennec Fox / summer / D4 / 6-10
Broken Line / none
Tortoise / autumn / E5 / 11-abc
Owl / none / F6 / 20-24
";

fn setup(data: &str) -> Result<(TempDir, LocalStorage)> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("data.txt"), data)?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    Ok((temp_dir, storage))
}

fn run_session(storage: LocalStorage, config: TomlConfig, input: &str) -> Result<String> {
    let mut out = Vec::new();
    plan_visit(VisitPipeline::new(storage, config), input, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_end_to_end_summer_visit() -> Result<()> {
    let (_temp_dir, storage) = setup(ZOO_DATA)?;

    let output = run_session(storage, TomlConfig::default(), "15 June 9-17")?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "You're visiting in summer (season 2)",
            "Animals available during your visit on 15 june between 9-17:",
            "Lion: 10-16",
            "Brown Bear: 8-18",
            "Warning: Could not process animal data: Broken Line/none. Error: expected 4 fields, found 2",
            "Warning: Could not process animal data: Tortoise/autumn/E5/11-abc. Error: invalid active hours '11-abc'",
        ]
    );
    Ok(())
}

#[test]
fn test_winter_evening_visit_finds_only_owl() -> Result<()> {
    let (_temp_dir, storage) = setup(ZOO_DATA)?;

    let engine = VisitEngine::new(VisitPipeline::new(storage, TomlConfig::default()));
    let report = engine.run(&VisitRequest::parse("24 december 19-23")?)?;

    let names: Vec<&str> = report.available().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Owl"]);
    Ok(())
}

#[test]
fn test_no_overlap_prints_none_found() -> Result<()> {
    let (_temp_dir, storage) = setup(ZOO_DATA)?;

    let output = run_session(storage, TomlConfig::default(), "1 march 0-5")?;

    assert!(output.ends_with("No animals available during your specified time.\n"));
    Ok(())
}

#[test]
fn test_missing_data_file_prints_error_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let output = run_session(storage, TomlConfig::default(), "15 june 9-17")?;

    assert!(output.contains("Error: File 'data.txt' not found."));
    assert!(!output.contains("Animals available"));
    assert!(!output.contains("No animals available"));
    Ok(())
}

#[test]
fn test_missing_data_file_is_file_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let engine = VisitEngine::new(VisitPipeline::new(storage, TomlConfig::default()));
    let result = engine.run(&VisitRequest::parse("15 june 9-17")?);

    assert!(matches!(result, Err(ZooError::FileNotFound { .. })));
    Ok(())
}

#[test]
fn test_invalid_visitor_input_aborts_request() -> Result<()> {
    let cases = [
        ("15 june", "Error: Invalid input format. Please use format 'day month time-range'"),
        ("15 june 17-9", "Error: Start time must be before end time"),
        ("15 june 9-25", "Error: Time must be between 0 and 24"),
        ("15 june nine", "Error: Invalid time format. Please use format 'start-end' (e.g., '9-17')"),
        ("15 junly 9-17", "Error: Invalid month 'junly'. Please enter a valid month name."),
    ];

    for (input, expected) in cases {
        let (_temp_dir, storage) = setup(ZOO_DATA)?;
        let output = run_session(storage, TomlConfig::default(), input)?;
        assert_eq!(output, format!("{}\n", expected), "input {:?}", input);
    }
    Ok(())
}

#[test]
fn test_toml_config_drives_data_file_and_delimiter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("zoo.csv"),
        "Lion;none;A1;10-16\nOwl;none;F6;20-24\n",
    )?;
    let config_path = temp_dir.path().join("zoo.toml");
    fs::write(
        &config_path,
        "[data]\npath = \"zoo.csv\"\ndelimiter = \";\"\nhas_header = false\n",
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let output = run_session(storage, config, "2 may 9-12")?;

    assert!(output.contains("You're visiting in spring (season 1)"));
    assert!(output.contains("Lion: 10-16"));
    assert!(!output.contains("Owl"));
    Ok(())
}
