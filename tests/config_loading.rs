use cadence_lib::model::config::{AppConfig, CatalogPreset, RegenPolicy, TpPolicy};
use cadence_lib::App;
use std::fs;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_config_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cadence.toml");
    fs::write(
        &path,
        r#"
        [sim]
        max_stance_level = 1
        regen_policy = "Legacy"
        tp_policy = "Unchecked"
        failure_penalty = 0.75

        [evolution]
        generations = 5
        stagnation_limit = 2
        "#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.sim.max_stance_level, 1);
    assert_eq!(config.sim.regen_policy, RegenPolicy::Legacy);
    assert_eq!(config.sim.tp_policy, TpPolicy::Unchecked);
    assert_eq!(config.sim.failure_penalty, 0.75);
    assert_eq!(config.sim.catalog, CatalogPreset::Standard);
    assert_eq!(config.evolution.stagnation_limit, Some(2));
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cadence.toml");
    fs::write(&path, "[evolution]\ncrossover_probability = 2.0\n").unwrap();
    assert!(AppConfig::load(&path).is_err());
    assert!(App::from_paths(&path, None).is_err());
}

#[test]
fn test_custom_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("cadence.toml");
    let catalog_path = dir.path().join("actions.toml");
    fs::write(&config_path, "[sim]\nrotation_length = 8\n").unwrap();
    fs::write(
        &catalog_path,
        r#"
        [[actions]]
        name = "Jab"
        base_mana = 0
        category = "Weaponskill"
        cooldown = 0.0
        cast_time = 10.0
        base_potency = 50.0
        "#,
    )
    .unwrap();

    let app = App::from_paths(&config_path, Some(catalog_path.as_path())).unwrap();
    assert_eq!(app.catalog().len(), 1);
    let report = app.evaluate_names(&["Jab"]).unwrap();
    assert_eq!(report.rotation.len(), 8);
    assert_eq!(report.score, 400.0 / 80.0);
}
