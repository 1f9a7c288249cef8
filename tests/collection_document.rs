use anyhow::Result;
use serde_json::Value;
use tempfile::tempdir;

use dayflow_postman::{build_collection, validate, writer, write_collection, Settings};

fn written_document() -> Result<(String, Value)> {
    let dir = tempdir()?;
    let out = dir.path().join("Dayflow-HRMS-API.postman_collection.json");
    let settings = Settings::new("http://localhost:5000/api", &out)?;

    let path = write_collection(&settings.output, &build_collection(&settings))?;
    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    Ok((text, value))
}

#[test]
fn document_has_one_auth_variables_and_six_folders() -> Result<()> {
    let (_, doc) = written_document()?;
    let root = doc.as_object().expect("root must be an object");

    let keys: Vec<&str> = root.keys().map(String::as_str).collect();
    assert_eq!(keys, ["info", "variable", "auth", "item"]);

    assert_eq!(doc["auth"]["type"], "bearer");
    assert_eq!(doc["auth"]["bearer"][0]["value"], "{{token}}");

    let variables = doc["variable"].as_array().expect("variable list");
    let keys: Vec<&str> = variables.iter().filter_map(|v| v["key"].as_str()).collect();
    assert_eq!(keys, ["baseUrl", "token"]);

    let folders = doc["item"].as_array().expect("item list");
    assert_eq!(folders.len(), 6);
    for folder in folders {
        let name = folder["name"].as_str().unwrap_or_default();
        assert_eq!(folder["description"], format!("Endpoints for {name}"));
    }

    Ok(())
}

#[test]
fn every_entry_has_name_method_and_base_url() -> Result<()> {
    let collection = build_collection(&Settings::default());

    for (folder, item) in collection.endpoints() {
        assert!(!item.name.is_empty(), "unnamed entry in {}", folder.name);
        assert!(
            ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"].contains(&item.request.method.as_str()),
            "{}",
            item.name
        );
        assert!(item.request.url.raw.starts_with("{{baseUrl}}/"), "{}", item.request.url.raw);
        assert_eq!(item.request.url.host, vec!["{{baseUrl}}"]);
        assert!(item.response.is_empty());
    }

    Ok(())
}

#[test]
fn serialized_bodies_parse_back_to_the_example() -> Result<()> {
    let (_, doc) = written_document()?;
    let apply = doc["item"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|folder| folder["item"].as_array().into_iter().flatten())
        .find(|item| item["name"] == "Apply Leave")
        .expect("Apply Leave entry");

    let raw = apply["request"]["body"]["raw"].as_str().expect("raw body text");
    let parsed: Value = serde_json::from_str(raw)?;
    assert_eq!(
        parsed,
        serde_json::json!({
            "type": "Sick Leave",
            "startDate": "2024-01-10",
            "endDate": "2024-01-11",
            "reason": "Fever"
        })
    );
    assert_eq!(apply["request"]["body"]["options"]["raw"]["language"], "json");

    Ok(())
}

#[test]
fn only_sign_in_carries_a_test_script() -> Result<()> {
    let (_, doc) = written_document()?;
    let scripted: Vec<&Value> = doc["item"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|folder| folder["item"].as_array().into_iter().flatten())
        .filter(|item| item.get("event").is_some())
        .collect();

    assert_eq!(scripted.len(), 1);
    let sign_in = scripted[0];
    assert_eq!(sign_in["name"], "Sign In");
    assert_eq!(sign_in["event"][0]["listen"], "test");
    let exec = sign_in["event"][0]["script"]["exec"].as_array().expect("exec lines");
    assert!(!exec.is_empty());

    Ok(())
}

#[test]
fn reformatting_output_is_byte_identical() -> Result<()> {
    let (text, _) = written_document()?;
    assert_eq!(writer::reformat(&text)?, text);
    Ok(())
}

#[test]
fn written_file_loads_and_validates() -> Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("collection.json");
    let original = build_collection(&Settings::default());
    write_collection(&out, &original)?;

    let loaded = validate::load(&out)?;
    assert_eq!(loaded, original);

    let summary = validate::validate(&loaded)?;
    assert_eq!(summary.folders, 6);
    assert_eq!(summary.endpoints, 40);
    Ok(())
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("no-such-dir").join("collection.json");
    let err = write_collection(&out, &build_collection(&Settings::default())).unwrap_err();
    assert_eq!(err.kind(), "io");
}

#[test]
fn each_run_gets_a_fresh_postman_id() -> Result<()> {
    let (_, first) = written_document()?;
    let (_, second) = written_document()?;
    assert_ne!(first["info"]["_postman_id"], second["info"]["_postman_id"]);
    Ok(())
}
