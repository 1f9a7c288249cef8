use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Settings;
use crate::models::item::Item;

pub const COLLECTION_NAME: &str = "Dayflow HRMS API";
pub const COLLECTION_DESCRIPTION: &str = "Complete API collection for Dayflow HRMS";
pub const SCHEMA_V2_1: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

pub const BASE_URL_VAR: &str = "baseUrl";
pub const TOKEN_VAR: &str = "token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Fresh on every run; not stable across runs.
    #[serde(rename = "_postman_id")]
    pub postman_id: Uuid,
    pub name: String,
    pub description: String,
    pub schema: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Variable {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: "string".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auth {
    #[serde(rename = "type")]
    pub kind: String,
    pub bearer: Vec<Variable>,
}

impl Auth {
    /// Bearer auth whose token is read from the named collection variable.
    pub fn bearer_from(variable: &str) -> Self {
        Self {
            kind: "bearer".to_string(),
            bearer: vec![Variable::string("token", format!("{{{{{variable}}}}}"))],
        }
    }

    /// Name of the collection variable the bearer token points at, if any.
    pub fn referenced_variable(&self) -> Option<&str> {
        self.bearer
            .iter()
            .find(|entry| entry.key == "token")
            .and_then(|entry| entry.value.strip_prefix("{{"))
            .and_then(|value| value.strip_suffix("}}"))
    }
}

/// A named group of endpoints for one functional area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub item: Vec<Item>,
    pub description: String,
}

impl Folder {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        let name = name.into();
        let description = format!("Endpoints for {name}");

        Self {
            name,
            item: items,
            description,
        }
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.item.iter().find(|item| item.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub info: Info,
    pub variable: Vec<Variable>,
    pub auth: Auth,
    pub item: Vec<Folder>,
}

impl Collection {
    /// Header, shared variables and auth; no folders yet.
    pub fn new(settings: &Settings) -> Self {
        Self {
            info: Info {
                postman_id: Uuid::new_v4(),
                name: COLLECTION_NAME.to_string(),
                description: COLLECTION_DESCRIPTION.to_string(),
                schema: SCHEMA_V2_1.to_string(),
            },
            variable: vec![
                Variable::string(BASE_URL_VAR, settings.base_url.as_str()),
                Variable::string(TOKEN_VAR, ""),
            ],
            auth: Auth::bearer_from(TOKEN_VAR),
            item: Vec::new(),
        }
    }

    pub fn push_folder(&mut self, folder: Folder) {
        tracing::debug!(folder = %folder.name, endpoints = folder.item.len(), "adding folder");
        self.item.push(folder);
    }

    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.item.iter().find(|folder| folder.name == name)
    }

    pub fn variable(&self, key: &str) -> Option<&Variable> {
        self.variable.iter().find(|variable| variable.key == key)
    }

    /// Every endpoint entry, in folder order.
    pub fn endpoints(&self) -> impl Iterator<Item = (&Folder, &Item)> {
        self.item
            .iter()
            .flat_map(|folder| folder.item.iter().map(move |item| (folder, item)))
    }
}
