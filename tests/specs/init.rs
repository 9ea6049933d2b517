//! Behavioral specs for `lighthouserc init`.

use crate::prelude::*;

#[test]
fn init_writes_starter_json() {
    let project = Project::empty();
    project
        .run(&["init"])
        .success()
        .stdout(predicates::str::contains("Created .lighthouserc.json"));

    let json: serde_json::Value =
        serde_json::from_str(&project.read(".lighthouserc.json")).unwrap();
    assert_eq!(json["ci"]["collect"]["numberOfRuns"], 5);
    assert_eq!(
        json["ci"]["assert"]["assertions"]["categories:performance"],
        serde_json::json!(["warn", {"minScore": 1.0}])
    );
}

#[test]
fn init_yaml() {
    let project = Project::empty();
    project
        .run(&["init", "--format", "yaml"])
        .success()
        .stdout(predicates::str::contains("Created .lighthouserc.yml"));
    assert!(project.read(".lighthouserc.yml").contains("numberOfRuns: 5"));
}

#[test]
fn init_refuses_to_overwrite() {
    let project = Project::with_config(r#"{"ci": {}}"#);
    project
        .run(&["init"])
        .code(2)
        .stderr(predicates::str::contains(
            ".lighthouserc.json already exists (use --force to overwrite)",
        ));
    assert_eq!(project.read(".lighthouserc.json"), r#"{"ci": {}}"#);
}

#[test]
fn init_refuses_when_other_format_exists() {
    let project = Project::empty();
    project.file("lighthouserc.toml", "");
    project
        .run(&["init"])
        .code(2)
        .stderr(predicates::str::contains("lighthouserc.toml already exists"));
}

#[test]
fn init_force_overwrites() {
    let project = Project::with_config(r#"{"ci": {}}"#);
    project.run(&["init", "--force"]).success();
    assert!(project.read(".lighthouserc.json").contains("categories:accessibility"));
}

#[test]
fn initialized_config_validates() {
    let project = Project::empty();
    project.run(&["init", "--format", "toml"]).success();
    project
        .run(&["validate"])
        .success()
        .stdout(predicates::str::contains(".lighthouserc.toml: PASS"));
}

#[test]
fn init_writes_to_config_path() {
    let project = Project::empty();
    project
        .run(&["init", "-C", "ci/lhci.yaml"])
        .success()
        .stdout(predicates::str::contains("Created ci/lhci.yaml"));
    assert!(project.read("ci/lhci.yaml").contains("numberOfRuns: 5"));

    project
        .run(&["validate", "-C", "ci/lhci.yaml"])
        .success()
        .stdout(predicates::str::contains("ci/lhci.yaml: PASS"));
}

#[test]
fn init_config_path_refuses_to_overwrite() {
    let project = Project::empty();
    project.file("lhci.json", "{}");
    project
        .run(&["init", "--config", "lhci.json"])
        .code(2)
        .stderr(predicates::str::contains("lhci.json already exists"));
    assert_eq!(project.read("lhci.json"), "{}");
}

#[test]
fn init_format_must_match_config_extension() {
    let project = Project::empty();
    project
        .run(&["init", "-C", "lhci.toml", "--format", "yaml"])
        .code(2)
        .stderr(predicates::str::contains("--format yaml does not match"));
}
