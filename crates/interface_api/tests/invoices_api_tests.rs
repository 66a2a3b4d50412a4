//! Invoice endpoint tests

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{json, Value};

use common::{assert_error, empty_app, seeded_app};

fn today() -> String {
    Utc::now().date_naive().to_string()
}

#[tokio::test]
async fn test_list_invoices() {
    let app = seeded_app().await;

    let response = app.server.get("/invoices").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "invoices": [
                {"id": 1, "comp_code": "apple"},
                {"id": 2, "comp_code": "apple"},
                {"id": 3, "comp_code": "apple"},
                {"id": 4, "comp_code": "ibm"}
            ]
        })
    );
}

#[tokio::test]
async fn test_get_invoice_embeds_company() {
    let app = seeded_app().await;

    let response = app.server.get("/invoices/4").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let invoice = &body["invoice"];
    assert_eq!(invoice["id"], 4);
    assert_eq!(invoice["amt"].as_f64(), Some(400.0));
    assert_eq!(invoice["paid"], false);
    assert_eq!(invoice["add_date"], "2024-01-15");
    assert!(invoice["paid_date"].is_null());
    assert_eq!(
        invoice["company"],
        json!({"code": "ibm", "name": "IBM", "description": "Big blue."})
    );
    assert!(invoice.get("comp_code").is_none());
}

#[tokio::test]
async fn test_get_missing_invoice() {
    let app = seeded_app().await;

    for path in ["/invoices/999", "/invoices/abc"] {
        let response = app.server.get(path).await;
        response.assert_status_not_found();
        assert_error(&response.json(), "Page Not Found", 404);
    }
}

#[tokio::test]
async fn test_create_invoice() {
    let app = seeded_app().await;

    let response = app
        .server
        .post("/invoices")
        .json(&json!({"comp_code": "ibm", "amt": 250.5}))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let invoice = &body["invoice"];
    assert_eq!(invoice["id"], 5);
    assert_eq!(invoice["comp_code"], "ibm");
    assert_eq!(invoice["amt"].as_f64(), Some(250.5));
    assert_eq!(invoice["paid"], false);
    assert_eq!(invoice["add_date"], today());
    assert!(invoice["paid_date"].is_null());

    let company: Value = app.server.get("/companies/ibm").await.json();
    assert_eq!(company["company"]["invoices"], json!([4, 5]));
}

#[tokio::test]
async fn test_create_invoice_missing_field() {
    let app = seeded_app().await;

    for payload in [json!({"comp_code": "ibm"}), json!({"amt": 10}), json!({})] {
        let response = app.server.post("/invoices").json(&payload).await;
        response.assert_status_bad_request();
        assert_error(&response.json(), "Missing Data", 400);
    }

    assert_eq!(app.store.invoice_count(), 4);
}

#[tokio::test]
async fn test_create_invoice_for_unknown_company() {
    let app = empty_app();

    let response = app
        .server
        .post("/invoices")
        .json(&json!({"comp_code": "ghost", "amt": 10}))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["status"], 500);
}

#[tokio::test]
async fn test_create_invoice_rejects_non_positive_amount() {
    let app = seeded_app().await;

    let response = app
        .server
        .post("/invoices")
        .json(&json!({"comp_code": "ibm", "amt": 0}))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.store.invoice_count(), 4);
}

#[tokio::test]
async fn test_partial_payment() {
    let app = seeded_app().await;

    let response = app
        .server
        .put("/invoices/1")
        .json(&json!({"amt": 2000, "paid": 500}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let invoice = &body["invoice"];
    assert_eq!(invoice["id"], 1);
    assert_eq!(invoice["comp_code"], "apple");
    assert_eq!(invoice["amt"].as_f64(), Some(1500.0));
    assert_eq!(invoice["paid"], false);
    assert_eq!(invoice["paid_date"], today());
}

#[tokio::test]
async fn test_full_payment_marks_paid() {
    let app = seeded_app().await;

    let response = app
        .server
        .put("/invoices/2")
        .json(&json!({"amt": 200, "paid": 200}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["invoice"]["amt"].as_f64(), Some(0.01));
    assert_eq!(body["invoice"]["paid"], true);
    assert_eq!(body["invoice"]["paid_date"], today());
}

#[tokio::test]
async fn test_reversal_clears_paid_date() {
    let app = seeded_app().await;

    app.server
        .put("/invoices/3")
        .json(&json!({"amt": 300, "paid": 100}))
        .await
        .assert_status_ok();

    let body: Value = app
        .server
        .put("/invoices/3")
        .json(&json!({"amt": 200, "paid": -50}))
        .await
        .json();
    assert_eq!(body["invoice"]["amt"].as_f64(), Some(250.0));
    assert!(body["invoice"]["paid_date"].is_null());
}

#[tokio::test]
async fn test_zero_payment_keeps_paid_date() {
    let app = seeded_app().await;

    app.server
        .put("/invoices/3")
        .json(&json!({"amt": 300, "paid": 100}))
        .await
        .assert_status_ok();

    let body: Value = app
        .server
        .put("/invoices/3")
        .json(&json!({"amt": 200, "paid": 0}))
        .await
        .json();
    assert_eq!(body["invoice"]["amt"].as_f64(), Some(200.0));
    assert_eq!(body["invoice"]["paid_date"], today());
}

#[tokio::test]
async fn test_update_invoice_missing_field() {
    let app = seeded_app().await;

    let response = app
        .server
        .put("/invoices/1")
        .json(&json!({"amt": 100}))
        .await;
    response.assert_status_bad_request();
    assert_error(&response.json(), "Missing Data", 400);

    let body: Value = app.server.get("/invoices/1").await.json();
    assert_eq!(body["invoice"]["amt"].as_f64(), Some(100.0));
}

#[tokio::test]
async fn test_update_with_unrepresentable_balance() {
    let app = seeded_app().await;

    let response = app
        .server
        .put("/invoices/1")
        .json(&json!({"amt": 7.9e28, "paid": -7.9e28}))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["status"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .is_some_and(|message| message.starts_with("Amount out of range")));

    let body: Value = app.server.get("/invoices/1").await.json();
    assert_eq!(body["invoice"]["amt"].as_f64(), Some(100.0));
    assert_eq!(body["invoice"]["paid"], false);
}

#[tokio::test]
async fn test_sub_cent_balance_settles() {
    let app = seeded_app().await;

    let response = app
        .server
        .put("/invoices/2")
        .json(&json!({"amt": 200.004, "paid": 200}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["invoice"]["amt"].as_f64(), Some(0.01));
    assert_eq!(body["invoice"]["paid"], true);
}

#[tokio::test]
async fn test_update_missing_invoice() {
    let app = seeded_app().await;

    let response = app
        .server
        .put("/invoices/999")
        .json(&json!({"amt": 100, "paid": 10}))
        .await;
    response.assert_status_not_found();
    assert_error(&response.json(), "Page Not Found", 404);
}

#[tokio::test]
async fn test_delete_invoice() {
    let app = seeded_app().await;

    let response = app.server.delete("/invoices/2").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"status": "Deleted"}));

    app.server.get("/invoices/2").await.assert_status_not_found();
    assert_eq!(app.store.invoice_count(), 3);

    let response = app.server.delete("/invoices/2").await;
    response.assert_status_not_found();
    assert_error(&response.json(), "Page Not Found", 404);
}
