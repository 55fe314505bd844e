use miniplay_economy::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
available_balance = 40000

[schedule]
first = 3000
second = 2000
third = 1000
top100 = 50
basic = 10

[[custom_tiers]]
id = "lucky"
kind = "specific"
specific_ranks = [777, 1234]
reward = 500

[[achievements]]
id = "speed"
name = "Speedrunner"
description = "Finish in under a minute"
condition = "time < 60s"
reward = 50

[logging]
level = "debug"
"#
    )
    .unwrap();

    let config = DashboardConfig::load_from_path(file.path()).unwrap();
    assert_eq!(config.logging.level, "debug");

    let session = DashboardSession::from_config("dev", &config);
    // 6000 + 4850 + 4000 fixed, 1000 lucky ranks
    assert_eq!(session.weekly_total(), 15_850);
    let budget = session.budget();
    assert_eq!(budget.total_liability, rust_decimal::Decimal::from(15_850 + 5_500));
    assert!(!budget.is_over_budget);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = DashboardConfig::load_from_path(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(EconomyError::Io(_))));
}

#[test]
fn test_default_config_round_trips_through_file() {
    let mut file = NamedTempFile::new().unwrap();
    let config = DashboardConfig::default();
    file.write_all(config.to_toml_string().unwrap().as_bytes())
        .unwrap();

    assert_eq!(DashboardConfig::load_from_path(file.path()).unwrap(), config);
}
