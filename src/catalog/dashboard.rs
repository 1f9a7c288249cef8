use crate::models::{Folder, HttpMethod, Item};

pub fn folder() -> Folder {
    Folder::new(
        "Dashboard",
        vec![
            Item::endpoint("Employee Dashboard", HttpMethod::Get, "/dashboard/employee", None),
            Item::endpoint("Admin Dashboard", HttpMethod::Get, "/dashboard/admin", None),
            Item::endpoint("Recent Activity", HttpMethod::Get, "/dashboard/activity", None),
        ],
    )
}
