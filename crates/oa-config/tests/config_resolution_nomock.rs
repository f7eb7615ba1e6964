//! End-to-end resolution tests against real dotenv files on disk.
//!
//! No mocks: overlays are built from explicit maps plus tempfile-backed
//! env files, exercising the same path the binary uses.

use std::io::Write;

use oa_config::{validate, ConfigSnapshot, EnvOverlay, Environment};

fn write_env_file(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn env_file_fills_gaps_but_never_overrides_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env_file(
        &dir,
        ".env.test",
        "PORT=9999\nTHEME=light\nSOLANA_NETWORK=testnet\n",
    );

    let overlay = EnvOverlay::from_map([("NODE_ENV", "test"), ("PORT", "8080")])
        .with_env_file(&path)
        .unwrap();
    let snapshot = ConfigSnapshot::load(&overlay).unwrap();

    assert_eq!(snapshot.environment, Environment::Test);
    // Process wins over the file.
    assert_eq!(snapshot.app.port, 8080);
    // File wins over the default.
    assert_eq!(snapshot.frontend.theme, "light");
    assert_eq!(snapshot.solana.network, "testnet");
    // Default fills the rest.
    assert_eq!(snapshot.api.retries, 3);
}

#[test]
fn malformed_env_file_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env_file(
        &dir,
        ".env.development",
        "THEME=light\nthis is not a variable\nPORT=4100\n",
    );

    let overlay = EnvOverlay::default().with_env_file(&path).unwrap();
    let snapshot = ConfigSnapshot::load(&overlay).unwrap();

    assert_eq!(snapshot.frontend.theme, "light");
    assert_eq!(snapshot.app.port, 4100);
}

#[test]
fn repeated_loads_from_unchanged_environment_are_equal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env_file(&dir, ".env.staging", "JWT_SECRET=staging-secret\n");

    let build = || {
        ConfigSnapshot::load(
            &EnvOverlay::from_map([("NODE_ENV", "staging")])
                .with_env_file(&path)
                .unwrap(),
        )
        .unwrap()
    };

    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn full_pipeline_validates_production_env_file() {
    let dir = tempfile::tempdir().unwrap();

    // Default secret in the file: production startup must refuse it.
    let path = write_env_file(&dir, ".env.production", "LOG_LEVEL=warn\n");
    let overlay = EnvOverlay::from_map([("NODE_ENV", "production")])
        .with_env_file(&path)
        .unwrap();
    let snapshot = ConfigSnapshot::load(&overlay).unwrap();
    assert!(validate(&snapshot).is_err());

    // A rotated secret in the file passes.
    let path = write_env_file(
        &dir,
        ".env.production2",
        "LOG_LEVEL=warn\nJWT_SECRET=rotated-for-prod\n",
    );
    let overlay = EnvOverlay::from_map([("NODE_ENV", "production")])
        .with_env_file(&path)
        .unwrap();
    let snapshot = ConfigSnapshot::load(&overlay).unwrap();
    assert!(validate(&snapshot).is_ok());
    assert_eq!(snapshot.logging.level, "warn");
}
