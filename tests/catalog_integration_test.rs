use pattern_catalog::app::{self, CATALOG};
use pattern_catalog::core::ConfigProvider;
use pattern_catalog::{build_runner, CatalogConfig, ExampleReport};
use std::io::Write;
use tempfile::NamedTempFile;

fn run_with(config: &impl ConfigProvider) -> (String, Vec<ExampleReport>) {
    let runner = build_runner(config).unwrap();
    let mut out = Vec::new();
    let reports = runner.run_all(&mut out).unwrap();
    (String::from_utf8(out).unwrap(), reports)
}

fn config(toml_content: &str) -> CatalogConfig {
    CatalogConfig::from_toml_str(toml_content).unwrap()
}

fn report<'a>(reports: &'a [ExampleReport], name: &str) -> &'a ExampleReport {
    reports.iter().find(|r| r.name == name).unwrap()
}

#[test]
fn test_full_catalog_runs_in_order() {
    let config = config("[catalog]\nname = \"all\"\n\n[random]\nseed = 11\n");
    let (output, reports) = run_with(&config);

    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, CATALOG.to_vec());

    assert!(output.starts_with("--- Example of: Iterator pattern ---\n1\n1\n2\n"));
    assert!(output.contains("--- Example of: Simple Factory ---\n"));
}

#[test]
fn test_example_outputs() {
    let config = config("[catalog]\nname = \"all\"\n\n[random]\nseed = 11\n");
    let (_, reports) = run_with(&config);

    assert_eq!(
        report(&reports, app::OBSERVER).lines(),
        vec![
            "ANNOUNCEMENT: We are publishing 123...",
            "Wow! 123 got published! So excited!",
            "Amazing, I always knew 123 will get published at some point!",
            "ANNOUNCEMENT: We are publishing 456...",
            "Wow! 456 got published! So excited!",
            "Amazing, I always knew 456 will get published at some point!",
        ]
    );
    assert_eq!(
        report(&reports, app::PLAYWRIGHT).lines(),
        vec![
            "Our hero, Phil wields a flaming sword",
            "And sings,\" Oooh la la, snow in a sunny day! \"",
        ]
    );
    assert_eq!(
        report(&reports, app::FACTORY_METHOD).lines(),
        vec!["Classy Quinn is running!", "Flamedrone is tagging along!"]
    );
    assert_eq!(
        report(&reports, app::SIMPLE_FACTORY).lines(),
        vec![
            "Sales",
            "Information Group",
            "Marketing",
            "[Todd]",
            "[John, Mary]",
            "[John, Mary]",
        ]
    );
    assert_eq!(
        report(&reports, app::ABSTRACT_FACTORY).lines(),
        vec!["DesktopComputer HardDisk", "MobilePhone NandFlashMemory"]
    );
    assert_eq!(report(&reports, app::PROTOTYPE).lines(), vec!["John"]);
    assert_eq!(report(&reports, app::BRIDGE).lines(), vec!["Bonjour!"]);
    assert_eq!(report(&reports, app::NESTED_LETTERS).lines(), vec!["T", "OT", "Done"]);
}

#[test]
fn test_random_example_is_reproducible_with_seed() {
    let config = config(
        "[catalog]\nname = \"random\"\n\n[runner]\nexamples = [\"Using a custom collection\"]\n\n[random]\nseed = 2024\n",
    );

    let (first, reports) = run_with(&config);
    let (second, _) = run_with(&config);
    assert_eq!(first, second);

    let lines = reports[0].lines();
    assert_eq!(lines.len(), 9);
    for line in lines {
        let value: u32 = line.strip_prefix("Random: ").unwrap().parse().unwrap();
        assert!(value < 200);
    }
}

#[test]
fn test_selection_without_headers() {
    let config = config(
        "[catalog]\nname = \"pick\"\n\n[runner]\nexamples = [\"Bridge\", \"Prototype\"]\nshow_headers = false\n",
    );

    let (output, reports) = run_with(&config);
    assert_eq!(reports.len(), 2);
    assert_eq!(output, "John\nBonjour!\n");
}

#[test]
fn test_summary_counts_lines() {
    let config = config(
        "[catalog]\nname = \"summary\"\n\n[runner]\nexamples = [\"Iterator pattern\", \"Bridge\"]\n",
    );
    let runner = build_runner(&config).unwrap();
    let mut out = Vec::new();
    let reports = runner.run_all(&mut out).unwrap();

    let summary = runner.execution_summary(&reports);
    assert_eq!(summary["total_examples"], 2);
    assert_eq!(summary["total_output_lines"], 11);
    assert_eq!(
        summary["executed_examples"],
        serde_json::json!(["Iterator pattern", "Bridge"])
    );
}

#[test]
fn test_config_file_drives_the_runner() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[catalog]\nname = \"file\"\n\n[runner]\nskip = [\"Using a custom collection\"]\n")
        .unwrap();

    let config = CatalogConfig::from_file(temp_file.path()).unwrap();
    let runner = build_runner(&config).unwrap();

    assert_eq!(runner.len(), CATALOG.len() - 1);
    assert!(!runner.names().contains(&app::CUSTOM_COLLECTION));
}
