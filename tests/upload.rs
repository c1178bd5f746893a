mod common;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use catalog_ingest::wire;
use common::{TestWorkspace, fixture_path};
use predicates::prelude::*;

const CREDENTIAL_VARS: [&str; 4] = [
    "CATALOG_TENANT_ID",
    "CATALOG_CLIENT_ID",
    "CATALOG_CLIENT_SECRET",
    "CATALOG_ACCOUNT_NAME",
];

#[test]
fn dry_run_needs_no_credentials() {
    let mut cmd = cargo_bin_cmd!("catalog-ingest");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.args([
        "upload",
        "-i",
        fixture_path("vendor1.format1").to_str().unwrap(),
        "--dry-run",
    ])
    .env("RUST_LOG", "catalog_ingest=info")
    .assert()
    .success()
    .stderr(predicate::str::contains("Dry run"))
    .stderr(predicate::str::contains("rbc://vendor1_set"));
}

#[test]
fn upload_without_credentials_names_the_missing_variables() {
    let mut cmd = cargo_bin_cmd!("catalog-ingest");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.args([
        "upload",
        "-i",
        fixture_path("vendor1.format1").to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("CATALOG_CLIENT_SECRET"));
}

#[test]
fn upload_spools_the_batch_using_config_credentials() {
    let workspace = TestWorkspace::new();
    let spool = workspace.path().join("batch.json");
    let config = workspace.write(
        "run.yml",
        &format!(
            "tenant_id: t1\nclient_id: c1\nclient_secret: s1\naccount_name: acct\nspool: {}\n",
            spool.display()
        ),
    );

    let mut cmd = cargo_bin_cmd!("catalog-ingest");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.args([
        "upload",
        "-i",
        fixture_path("vendor1.format1").to_str().unwrap(),
        "--schema",
        "weirdschema1",
        "-c",
        config.to_str().unwrap(),
    ])
    .env("RUST_LOG", "catalog_ingest=info")
    .assert()
    .success()
    .stderr(predicate::str::contains("Catalog assigned"))
    .stderr(predicate::str::contains("synthetic guid -1"));

    let batch = wire::load_batch(&spool).expect("load spooled batch");
    assert_eq!(batch.len(), 6);
    assert_eq!(batch[0].qualified_name, "rbc://weirdschema1");
}

#[test]
fn spool_flag_overrides_the_config_destination() {
    let workspace = TestWorkspace::new();
    let config_spool = workspace.path().join("from-config.json");
    let flag_spool = workspace.path().join("from-flag.json");
    let config = workspace.write(
        "run.yml",
        &format!(
            "tenant_id: t1\nclient_id: c1\nclient_secret: s1\naccount_name: acct\nspool: {}\n",
            config_spool.display()
        ),
    );

    cargo_bin_cmd!("catalog-ingest")
        .args([
            "upload",
            "-i",
            fixture_path("vendor1.format1").to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
            "--spool",
            flag_spool.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(flag_spool.exists());
    assert!(!config_spool.exists());

    let contents = fs::read_to_string(&flag_spool).expect("read spool");
    assert!(contents.contains("\"qualifiedName\": \"rbc://vendor1\""));
}
