use serde_json::json;

use crate::models::{Folder, HttpMethod, Item};

pub fn folder() -> Folder {
    Folder::new(
        "Payroll",
        vec![
            Item::endpoint("My Payroll", HttpMethod::Get, "/payroll/my-payroll", None),
            Item::endpoint("All Payrolls (Admin/HR)", HttpMethod::Get, "/payroll/all", None),
            Item::endpoint("Payroll Stats (Admin/HR)", HttpMethod::Get, "/payroll/stats", None),
            Item::endpoint("Get Payroll By ID (Admin/HR)", HttpMethod::Get, "/payroll/:id", None),
            Item::endpoint(
                "Create/Update Payroll (Admin/HR)",
                HttpMethod::Post,
                "/payroll",
                Some(json!({
                    "employeeId": "emp_id_here",
                    "month": 1,
                    "year": 2024,
                    "basicSalary": 5000
                })),
            ),
            Item::endpoint(
                "Generate Monthly Payroll (Admin)",
                HttpMethod::Post,
                "/payroll/generate",
                Some(json!({
                    "month": 1,
                    "year": 2024
                })),
            ),
            Item::endpoint(
                "Update Payment Status (Admin/HR)",
                HttpMethod::Put,
                "/payroll/:id/payment-status",
                Some(json!({ "status": "Paid" })),
            ),
        ],
    )
}
