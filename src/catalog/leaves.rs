use serde_json::json;

use crate::models::{Folder, HttpMethod, Item};

pub fn folder() -> Folder {
    Folder::new(
        "Leaves",
        vec![
            Item::endpoint(
                "Apply Leave",
                HttpMethod::Post,
                "/leaves/apply",
                Some(json!({
                    "type": "Sick Leave",
                    "startDate": "2024-01-10",
                    "endDate": "2024-01-11",
                    "reason": "Fever"
                })),
            ),
            Item::endpoint("My Leaves", HttpMethod::Get, "/leaves/my-leaves", None),
            Item::endpoint("Leave Balance", HttpMethod::Get, "/leaves/balance", None),
            Item::endpoint("Cancel Leave", HttpMethod::Put, "/leaves/:id/cancel", None),
            Item::endpoint("All Leaves (Admin/HR)", HttpMethod::Get, "/leaves/all", None),
            Item::endpoint("Leave Stats (Admin/HR)", HttpMethod::Get, "/leaves/stats", None),
            Item::endpoint("Approve Leave (Admin/HR)", HttpMethod::Put, "/leaves/:id/approve", None),
            Item::endpoint(
                "Reject Leave (Admin/HR)",
                HttpMethod::Put,
                "/leaves/:id/reject",
                Some(json!({ "reason": "Not enough balance" })),
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_actions_take_leave_id() {
        let folder = folder();
        for name in ["Cancel Leave", "Approve Leave (Admin/HR)", "Reject Leave (Admin/HR)"] {
            let item = folder.find(name).unwrap();
            assert_eq!(item.request.url.placeholders().collect::<Vec<_>>(), ["id"], "{name}");
        }
    }
}
