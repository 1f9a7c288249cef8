//! The Dayflow HRMS endpoint catalogue, one module per functional area.

use crate::config::Settings;
use crate::models::{Collection, Folder};

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod leaves;
pub mod payroll;

/// Folder builders in the order they appear in the collection.
const FOLDERS: [fn() -> Folder; 6] = [
    auth::folder,
    employees::folder,
    attendance::folder,
    leaves::folder,
    payroll::folder,
    dashboard::folder,
];

pub fn build_collection(settings: &Settings) -> Collection {
    let mut collection = Collection::new(settings);

    for build in FOLDERS {
        collection.push_folder(build());
    }

    tracing::info!(
        folders = collection.item.len(),
        endpoints = collection.endpoints().count(),
        "collection assembled"
    );

    collection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folders_follow_functional_areas() {
        let collection = build_collection(&Settings::default());
        let names: Vec<&str> = collection.item.iter().map(|folder| folder.name.as_str()).collect();
        assert_eq!(
            names,
            ["Auth", "Employees", "Attendance", "Leaves", "Payroll", "Dashboard"]
        );
    }

    #[test]
    fn endpoint_counts_per_folder() {
        let collection = build_collection(&Settings::default());
        let counts: Vec<usize> = collection.item.iter().map(|folder| folder.item.len()).collect();
        assert_eq!(counts, [6, 9, 7, 8, 7, 3]);
    }

    #[test]
    fn base_url_setting_lands_in_variable() {
        let settings = Settings::new("https://hr.example.com/api", "out.json").unwrap();
        let collection = build_collection(&settings);
        assert_eq!(
            collection.variable(crate::models::collection::BASE_URL_VAR).unwrap().value,
            "https://hr.example.com/api"
        );
    }
}
