use serde_json::json;

use crate::models::{Folder, HttpMethod, Item};

pub fn folder() -> Folder {
    Folder::new(
        "Attendance",
        vec![
            Item::endpoint(
                "Check In",
                HttpMethod::Post,
                "/attendance/check-in",
                Some(json!({
                    "location": "Office",
                    "coordinates": { "lat": 0, "lng": 0 }
                })),
            ),
            Item::endpoint("Check Out", HttpMethod::Post, "/attendance/check-out", None),
            Item::endpoint("My Attendance", HttpMethod::Get, "/attendance/my-attendance", None),
            Item::endpoint("All Attendance (Admin/HR)", HttpMethod::Get, "/attendance/all", None),
            Item::endpoint("Attendance Stats (Admin/HR)", HttpMethod::Get, "/attendance/stats", None),
            Item::endpoint(
                "Mark Attendance (Admin/HR)",
                HttpMethod::Post,
                "/attendance/mark",
                Some(json!({
                    "employeeId": "emp_id_here",
                    "date": "2024-01-01",
                    "status": "present"
                })),
            ),
            Item::endpoint(
                "Update Attendance (Admin/HR)",
                HttpMethod::Put,
                "/attendance/:id",
                Some(json!({ "status": "absent" })),
            ),
        ],
    )
}
