use serde_json::json;

use crate::models::{Folder, HttpMethod, Item};

/// Post-response script that stores the issued token in the `token` collection variable.
pub const CAPTURE_TOKEN_SCRIPT: [&str; 5] = [
    "var jsonData = pm.response.json();",
    "if (jsonData.token) {",
    "    pm.collectionVariables.set(\"token\", jsonData.token);",
    "    console.log(\"Token updated successfully\");",
    "}",
];

pub fn folder() -> Folder {
    let sign_in = Item::endpoint(
        "Sign In",
        HttpMethod::Post,
        "/auth/signin",
        Some(json!({
            "email": "admin@dayflow.com",
            "password": "password123"
        })),
    )
    .with_test_script(CAPTURE_TOKEN_SCRIPT);

    Folder::new(
        "Auth",
        vec![
            sign_in,
            Item::endpoint(
                "Sign Up",
                HttpMethod::Post,
                "/auth/signup",
                Some(json!({
                    "name": "John Doe",
                    "email": "john@example.com",
                    "password": "password123",
                    "role": "employee"
                })),
            ),
            Item::endpoint("Get Me", HttpMethod::Get, "/auth/me", None),
            Item::endpoint(
                "Forgot Password",
                HttpMethod::Post,
                "/auth/forgot-password",
                Some(json!({ "email": "john@example.com" })),
            ),
            Item::endpoint("Verify Email", HttpMethod::Get, "/auth/verify-email/:token", None),
            Item::endpoint(
                "Reset Password",
                HttpMethod::Post,
                "/auth/reset-password/:token",
                Some(json!({ "password": "newpassword123" })),
            ),
        ],
    )
}
