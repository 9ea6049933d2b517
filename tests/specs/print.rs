//! Behavioral specs for `lighthouserc print`.

use crate::prelude::*;

#[test]
fn print_fills_defaults() {
    let project = Project::with_config(r#"{"ci": {}}"#);
    let output = project.run(&["print"]).success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["ci"]["collect"]["numberOfRuns"], 3);
    assert_eq!(json["ci"]["upload"]["target"], "temporary-public-storage");
}

#[test]
fn print_keeps_assertion_tuples() {
    let project = Project::with_config(STARTER_CONFIG);
    let output = project.run(&["print"]).success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        json["ci"]["assert"]["assertions"]["categories:accessibility"],
        serde_json::json!(["error", {"minScore": 1.0}])
    );
}

#[test]
fn print_converts_to_yaml() {
    let project = Project::with_config(STARTER_CONFIG);
    project
        .run(&["print", "--format", "yaml"])
        .success()
        .stdout(
            predicates::str::contains("ci:")
                .and(predicates::str::contains("numberOfRuns: 5")),
        );
}

#[test]
fn print_converts_to_toml() {
    let project = Project::with_config(STARTER_CONFIG);
    project
        .run(&["print", "-f", "toml"])
        .success()
        .stdout(
            predicates::str::contains("[ci.collect]")
                .and(predicates::str::contains("numberOfRuns = 5")),
        );
}

#[test]
fn printed_toml_validates() {
    let project = Project::with_config(STARTER_CONFIG);
    let output = project
        .run(&["print", "-f", "toml"])
        .success()
        .get_output()
        .stdout
        .clone();
    project.file("converted.toml", &String::from_utf8(output).unwrap());

    project
        .run(&["validate", "-C", "converted.toml"])
        .success()
        .stdout(predicates::str::contains("converted.toml: PASS"));
}

#[test]
fn print_does_not_validate() {
    let project = Project::with_config(r#"{"ci": {"collect": {"numberOfRuns": 0}}}"#);
    project
        .run(&["print"])
        .success()
        .stdout(predicates::str::contains("\"numberOfRuns\": 0"));
}

#[test]
fn print_reports_parse_errors() {
    let project = Project::with_config("{ not json");
    project
        .run(&["print"])
        .code(2)
        .stderr(predicates::str::contains("failed to parse"));
}

#[test]
fn print_json_refuses_non_finite_threshold() {
    let project = Project::empty();
    project.file(
        "lighthouserc.yml",
        "ci:\n  assert:\n    assertions:\n      \"categories:seo\": [warn, {minScore: .nan}]\n",
    );
    project
        .run(&["print", "-f", "json"])
        .code(2)
        .stderr(predicates::str::contains("categories:seo.minScore"));
    project
        .run(&["validate"])
        .code(1)
        .stdout(predicates::str::contains("range-violation"));
}
