use serde_json::json;

use crate::models::{Folder, HttpMethod, Item};

pub fn folder() -> Folder {
    Folder::new(
        "Employees",
        vec![
            Item::endpoint("My Profile", HttpMethod::Get, "/employees/profile", None),
            Item::endpoint(
                "Update My Profile",
                HttpMethod::Put,
                "/employees/profile",
                Some(json!({
                    "phoneNumber": "1234567890",
                    "address": "123 Main St"
                })),
            ),
            // Multipart uploads; the file part is picked in the client.
            Item::endpoint("Upload Profile Picture", HttpMethod::Post, "/employees/upload-picture", None),
            Item::endpoint("Upload Document", HttpMethod::Post, "/employees/upload-document", None),
            Item::endpoint("Get All Employees (Admin/HR)", HttpMethod::Get, "/employees", None),
            Item::endpoint("Get Departments", HttpMethod::Get, "/employees/departments", None),
            Item::endpoint("Get Employee By ID (Admin/HR)", HttpMethod::Get, "/employees/:id", None),
            Item::endpoint(
                "Update Employee (Admin/HR)",
                HttpMethod::Put,
                "/employees/:id",
                Some(json!({
                    "role": "manager",
                    "department": "IT"
                })),
            ),
            Item::endpoint("Delete Employee (Admin/HR)", HttpMethod::Delete, "/employees/:id", None),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_is_the_only_destructive_call() {
        let folder = folder();
        let deletes: Vec<&str> = folder
            .item
            .iter()
            .filter(|item| item.request.method == HttpMethod::Delete)
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(deletes, ["Delete Employee (Admin/HR)"]);
    }

    #[test]
    fn collection_root_has_single_segment() {
        let folder = folder();
        let all = folder.find("Get All Employees (Admin/HR)").unwrap();
        assert_eq!(all.request.url.path, vec!["employees"]);
    }
}
