//! Structural checks over a built or loaded collection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{GeneratorError, GeneratorResult};
use crate::models::collection::{BASE_URL_VAR, TOKEN_VAR};
use crate::models::item::BASE_URL_PLACEHOLDER;
use crate::models::Collection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub folders: usize,
    pub endpoints: usize,
    pub with_body: usize,
}

/// Reads a collection file. Errors carry the JSON path of the offending field.
pub fn load(path: impl AsRef<Path>) -> GeneratorResult<Collection> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| GeneratorError::io(path, err))?;
    parse(&text)
}

pub fn parse(text: &str) -> GeneratorResult<Collection> {
    let mut de = serde_json::Deserializer::from_str(text);
    let collection = serde_path_to_error::deserialize(&mut de)?;
    de.end()?;
    Ok(collection)
}

pub fn validate(collection: &Collection) -> GeneratorResult<Summary> {
    if collection.variable(BASE_URL_VAR).is_none() {
        return Err(GeneratorError::invalid(format!("missing `{BASE_URL_VAR}` variable")));
    }
    match collection.auth.referenced_variable() {
        Some(name) if collection.variable(name).is_some() => {}
        Some(name) => {
            return Err(GeneratorError::invalid(format!(
                "bearer auth references unknown variable `{name}`"
            )))
        }
        None => return Err(GeneratorError::invalid("bearer auth does not reference a variable")),
    }
    if collection.variable(TOKEN_VAR).is_none() {
        return Err(GeneratorError::invalid(format!("missing `{TOKEN_VAR}` variable")));
    }

    let mut seen = HashSet::new();
    for folder in &collection.item {
        if !seen.insert(folder.name.as_str()) {
            return Err(GeneratorError::invalid(format!("duplicate folder `{}`", folder.name)));
        }
    }

    let mut summary = Summary {
        folders: collection.item.len(),
        endpoints: 0,
        with_body: 0,
    };
    let mut scripted = 0;

    for (folder, item) in collection.endpoints() {
        let at = format!("{} / {}", folder.name, item.name);

        if item.name.trim().is_empty() {
            return Err(GeneratorError::invalid(format!("unnamed endpoint in `{}`", folder.name)));
        }
        if !item.request.url.raw.starts_with(BASE_URL_PLACEHOLDER) {
            return Err(GeneratorError::invalid(format!(
                "{at}: url `{}` does not start with {BASE_URL_PLACEHOLDER}",
                item.request.url.raw
            )));
        }
        if !item.response.is_empty() {
            return Err(GeneratorError::invalid(format!("{at}: response examples must be empty")));
        }
        if let Some(body) = &item.request.body {
            body.example()
                .map_err(|err| GeneratorError::invalid(format!("{at}: body is not valid json: {err}")))?;
            summary.with_body += 1;
        }

        let scripts: Vec<_> = item.test_scripts().collect();
        if !scripts.is_empty() {
            if scripts.iter().all(|script| script.exec.iter().all(|line| line.trim().is_empty())) {
                return Err(GeneratorError::invalid(format!("{at}: test script is empty")));
            }
            scripted += 1;
        }

        summary.endpoints += 1;
    }

    if scripted != 1 {
        return Err(GeneratorError::invalid(format!(
            "expected exactly one endpoint with a test script, found {scripted}"
        )));
    }

    tracing::debug!(?summary, "collection validated");
    Ok(summary)
}
