use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_sift_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("SIFT_RELEVANCE_THRESHOLD");
        env::remove_var("SIFT_DEDUP_SIMILARITY");
        env::remove_var("SIFT_N_RESULTS");
        env::remove_var("SIFT_EMBEDDING_DIM");
        env::remove_var("SIFT_SEED_DATA_PATH");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.relevance_threshold, 0.5);
    assert_eq!(config.dedup_similarity, 0.95);
    assert_eq!(config.n_results, 10);
    assert_eq!(config.embedding_dim, 384);
    assert!(config.seed_data_path.is_none());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_sift_env();
    let config = Config::from_env().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_sift_env();
    let config = with_env_vars(
        &[
            ("SIFT_RELEVANCE_THRESHOLD", "0.25"),
            ("SIFT_N_RESULTS", "3"),
        ],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(config.relevance_threshold, 0.25);
    assert_eq!(config.n_results, 3);
    assert_eq!(config.dedup_similarity, 0.95);
}

#[test]
#[serial]
fn test_from_env_rejects_unparsable_threshold() {
    clear_sift_env();
    let result = with_env_vars(
        &[("SIFT_RELEVANCE_THRESHOLD", "not-a-number")],
        Config::from_env,
    );
    assert!(matches!(result, Err(ConfigError::FloatParseError { .. })));
}

#[test]
#[serial]
fn test_from_env_rejects_out_of_range_threshold() {
    clear_sift_env();
    let result = with_env_vars(&[("SIFT_RELEVANCE_THRESHOLD", "1.5")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::OutOfRange { .. })));
}

#[test]
fn test_validate_rejects_zero_n_results() {
    let config = Config {
        n_results: 0,
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange { .. })
    ));
}

#[test]
fn test_validate_rejects_missing_seed_path() {
    let config = Config {
        seed_data_path: Some(PathBuf::from("/nonexistent/seed.jsonl")),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}
