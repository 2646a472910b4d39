//! Integration tests for buildx-setup

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Binary with a private temp dir and no ambient registry host
    fn setup(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("buildx-setup");
        cmd.env_remove("LOCAL_REGISTRY_HOST")
            .env_remove("BUILDX_SETUP_INPUTS")
            .arg("--tmp-dir")
            .arg(temp.path());
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("multi-node buildx builders"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("buildx-setup"));
    }

    #[test]
    fn create_prints_json_args() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args([
                "--buildx-version",
                "0.12.0",
                "create",
                "--name",
                "builder-x",
                "--platforms",
                "linux/amd64,linux/arm64",
            ])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                r#"["create","--name","builder-x","--driver","docker-container","--buildkitd-flags","--allow-insecure-entitlement security.insecure --allow-insecure-entitlement network.host","--platform","linux/amd64,linux/arm64","--use","--config","#,
            ));
    }

    #[test]
    fn create_on_old_buildx_skips_gated_flags() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args([
                "--buildx-version",
                "0.2.0",
                "create",
                "--name",
                "b",
                "--driver-opt",
                "network=host",
                "--buildkitd-flags=--debug",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("--driver-opt").not())
            .stdout(predicate::str::contains("--buildkitd-flags").not());
    }

    #[test]
    fn create_endpoint_is_last() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args([
                "--buildx-version",
                "0.12.0",
                "--format",
                "lines",
                "create",
                "--name",
                "b",
                "--driver",
                "remote",
                "--endpoint",
                "tcp://buildkitd:1234",
            ])
            .assert()
            .success()
            .stdout(predicate::str::ends_with("\ntcp://buildkitd:1234\n"));
    }

    #[test]
    fn create_with_config_file_writes_merged_sibling() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("buildkitd.toml");
        std::fs::write(&config, "debug = true\n").unwrap();

        setup(&temp)
            .env("LOCAL_REGISTRY_HOST", "kind-registry:5000")
            .args(["--buildx-version", "0.12.0", "create", "--name", "b"])
            .arg("--buildkitd-config")
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"--config\""));

        let merged = std::fs::read_to_string(temp.path().join("buildkitd.merged.toml")).unwrap();
        assert!(merged.contains("debug = true"));
        assert!(merged.contains("[registry.\"kind-registry:5000\"]"));
        assert_eq!(std::fs::read_to_string(&config).unwrap(), "debug = true\n");
    }

    #[test]
    fn create_missing_config_file_fails() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["--buildx-version", "0.12.0", "create", "--name", "b"])
            .arg("--buildkitd-config")
            .arg(temp.path().join("missing.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn inspect_lines_format() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["--buildx-version", "0.4.0", "--format", "lines", "inspect", "--name", "b"])
            .assert()
            .success()
            .stdout("inspect\n--bootstrap\n--builder\nb\n");
    }

    #[test]
    fn inspect_unknown_version() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["--buildx-version", "dev", "inspect", "--name", "b"])
            .assert()
            .success()
            .stdout("[\"inspect\",\"--bootstrap\"]\n");
    }

    #[test]
    fn append_nodes_from_inputs_file() {
        let temp = TempDir::new().unwrap();
        let inputs = temp.path().join("inputs.toml");
        std::fs::write(
            &inputs,
            r#"
[inputs]
name = "k8s"
driver = "kubernetes"

[[nodes]]
name = "arm"
platforms = "linux/arm64"

[[nodes]]
driver-opts = ["namespace=ci"]
"#,
        )
        .unwrap();

        setup(&temp)
            .args(["--buildx-version", "0.12.0", "append"])
            .arg("--inputs")
            .arg(&inputs)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"["create","--name","k8s","--append","--node","arm","--platform","linux/arm64"]"#,
            ))
            .stdout(predicate::str::contains(
                r#"["create","--name","k8s","--append","--driver-opt","namespace=ci","--buildkitd-flags","#,
            ));
    }

    #[test]
    fn append_generates_kubernetes_node_name_on_old_buildx() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args([
                "--buildx-version",
                "0.10.0",
                "append",
                "--name",
                "k8s",
                "--driver",
                "kubernetes",
                "--node-platforms",
                "linux/arm64",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""--node","node-"#));
    }

    #[test]
    fn append_without_nodes_fails() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["--buildx-version", "0.12.0", "append", "--name", "b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No nodes to append"));
    }

    #[test]
    fn version_for_cloud_driver() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["version", "--driver", "cloud", "--release", "v1.2.3"])
            .assert()
            .success()
            .stdout("cloud:v1.2.3\n");
    }

    #[test]
    fn version_passes_through_for_other_drivers() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["version", "--release", "v0.12.0"])
            .assert()
            .success()
            .stdout("v0.12.0\n");
    }

    #[test]
    fn name_generated_when_missing() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["name", "--driver", "remote"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("builder-"));
    }

    #[test]
    fn config_trusts_registry_host() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .env("LOCAL_REGISTRY_HOST", "kind-registry:5000")
            .args(["config", "--buildkitd-config-inline", "debug = true"])
            .assert()
            .success()
            .stdout(predicate::str::contains("debug = true"))
            .stdout(predicate::str::contains("[registry.\"kind-registry:5000\"]"))
            .stdout(predicate::str::contains("insecure = true"));
    }

    #[test]
    fn config_rejects_malformed_toml() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["config", "--buildkitd-config-inline", "[registry"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid buildkitd config"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn missing_inputs_file_fails() {
        let temp = TempDir::new().unwrap();
        setup(&temp)
            .args(["create", "--inputs"])
            .arg(temp.path().join("nope.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }
}
