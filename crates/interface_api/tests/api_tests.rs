//! End-to-end tests of the HTTP API

use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_ledger::Distribution;
use interface_api::{config::ApiConfig, create_router};
use test_utils::{assert_decimal_approx_eq, RosterFixtures, ScenarioFixtures, TestLedgerBuilder};

fn server_with(config: ApiConfig) -> TestServer {
    TestServer::new(create_router(config)).unwrap()
}

fn server() -> TestServer {
    server_with(ApiConfig::default())
}

fn dec_of(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().unwrap(),
        Value::Number(n) => n.to_string().parse().unwrap(),
        other => panic!("not a decimal: {}", other),
    }
}

async fn open_session(server: &TestServer, body: Value) -> String {
    let response = server.post("/api/v1/sessions").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_str().unwrap().to_string()
}

/// Replays a builder's roster and expenses over HTTP
async fn replay(server: &TestServer, id: &str, builder: &TestLedgerBuilder) {
    for name in builder.participants() {
        server
            .post(&format!("/api/v1/sessions/{}/participants", id))
            .json(&json!({ "name": name }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    for expense in builder.expenses() {
        let body = match &expense.distribution {
            Distribution::Equal => json!({
                "reason": expense.reason,
                "payer": expense.payer,
                "amount": expense.amount.to_string(),
                "distribution": "equal",
            }),
            Distribution::Unequal(shares) => json!({
                "reason": expense.reason,
                "payer": expense.payer,
                "amount": expense.amount.to_string(),
                "distribution": "unequal",
                "shares": shares.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(","),
            }),
        };
        server
            .post(&format!("/api/v1/sessions/{}/expenses", id))
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_health() {
    let response = server().get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_counts_sessions() {
    let server = server();
    open_session(&server, json!({})).await;

    let body = server.get("/health/ready").await.json::<Value>();
    assert_eq!(body["open_sessions"], 1);
}

mod sessions {
    use super::*;

    #[tokio::test]
    async fn test_create_uses_configured_defaults() {
        let server = server();
        let response = server.post("/api/v1/sessions").await;
        response.assert_status(StatusCode::CREATED);

        let body = response.json::<Value>();
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["rounding_policy"], "per_share");
        assert_eq!(body["participants"], json!([]));
    }

    #[tokio::test]
    async fn test_create_with_overrides() {
        let server = server();
        let id = open_session(&server, json!({ "currency": "EUR", "rounding_policy": "absorb_remainder" })).await;

        let body = server.get(&format!("/api/v1/sessions/{}", id)).await.json::<Value>();
        assert_eq!(body["currency"], "EUR");
        assert_eq!(body["rounding_policy"], "absorb_remainder");
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let response = server()
            .get(&format!("/api/v1/sessions/{}", uuid::Uuid::new_v4()))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], "not_found");
    }

    #[tokio::test]
    async fn test_reset_clears_ledger() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::dinner()).await;

        let body = server
            .post(&format!("/api/v1/sessions/{}/reset", id))
            .await
            .json::<Value>();
        assert_eq!(body["participants"], json!([]));
        assert_eq!(body["expense_count"], 0);
    }

    #[tokio::test]
    async fn test_delete_ends_session() {
        let server = server();
        let id = open_session(&server, json!({})).await;

        server
            .delete(&format!("/api/v1/sessions/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/api/v1/sessions/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_session_limit() {
        let server = server_with(ApiConfig {
            max_sessions: 1,
            ..ApiConfig::default()
        });
        open_session(&server, json!({})).await;

        let response = server.post("/api/v1/sessions").json(&json!({})).await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let server = server();
        let first = open_session(&server, json!({})).await;
        let second = open_session(&server, json!({})).await;
        replay(&server, &first, &ScenarioFixtures::taxi()).await;

        let body = server
            .get(&format!("/api/v1/sessions/{}/participants", second))
            .await
            .json::<Value>();
        assert_eq!(body["participants"], json!([]));
    }
}

mod ledger {
    use super::*;

    #[tokio::test]
    async fn test_participants_keep_roster_order() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        let builder = TestLedgerBuilder::new().with_participants(RosterFixtures::random_names(5));
        replay(&server, &id, &builder).await;

        let body = server
            .get(&format!("/api/v1/sessions/{}/participants", id))
            .await
            .json::<Value>();
        assert_eq!(body["participants"], json!(builder.participants()));
    }

    #[tokio::test]
    async fn test_duplicate_participant_conflicts() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        let url = format!("/api/v1/sessions/{}/participants", id);

        server.post(&url).json(&json!({ "name": "Alice" })).await.assert_status(StatusCode::CREATED);
        let response = server.post(&url).json(&json!({ "name": "Alice" })).await;
        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["error"], "conflict");
    }

    #[tokio::test]
    async fn test_blank_participant_rejected() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        let url = format!("/api/v1/sessions/{}/participants", id);

        server.post(&url).json(&json!({ "name": "" })).await.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        server.post(&url).json(&json!({ "name": "   " })).await.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_expense_before_any_participant() {
        let server = server();
        let id = open_session(&server, json!({})).await;

        let response = server
            .post(&format!("/api/v1/sessions/{}/expenses", id))
            .json(&json!({ "reason": "Lunch", "payer": "Alice", "amount": 5, "distribution": "equal" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_expense_errors() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &TestLedgerBuilder::new().with_participants(RosterFixtures::pair())).await;
        let url = format!("/api/v1/sessions/{}/expenses", id);

        let unknown_payer = server
            .post(&url)
            .json(&json!({ "reason": "Lunch", "payer": "Mallory", "amount": 5, "distribution": "equal" }))
            .await;
        unknown_payer.assert_status(StatusCode::NOT_FOUND);

        let bad_amount = server
            .post(&url)
            .json(&json!({ "reason": "Lunch", "payer": "Alice", "amount": "abc", "distribution": "equal" }))
            .await;
        bad_amount.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let negative = server
            .post(&url)
            .json(&json!({ "reason": "Lunch", "payer": "Alice", "amount": -5, "distribution": "equal" }))
            .await;
        negative.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let mismatch = server
            .post(&url)
            .json(&json!({
                "reason": "Taxi", "payer": "Bob", "amount": 10,
                "distribution": "unequal", "shares": [10]
            }))
            .await;
        mismatch.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(mismatch.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .contains("expected 2"));

        let expenses = server.get(&url).await.json::<Value>();
        assert_eq!(expenses["expenses"], json!([]));
    }

    #[tokio::test]
    async fn test_unequal_expense_shares() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::taxi()).await;

        let body = server
            .get(&format!("/api/v1/sessions/{}/expenses", id))
            .await
            .json::<Value>();
        let expense = &body["expenses"][0];
        assert_eq!(expense["distribution"], "unequal");
        assert_eq!(expense["shares"][0]["participant"], "Alice");
        assert_eq!(dec_of(&expense["shares"][0]["amount"]), dec!(3));
        assert_eq!(dec_of(&expense["shares"][1]["amount"]), dec!(7));
    }

    #[tokio::test]
    async fn test_text_amount_rounded_once_to_cents() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &TestLedgerBuilder::new().with_participants(RosterFixtures::pair())).await;

        let response = server
            .post(&format!("/api/v1/sessions/{}/expenses", id))
            .json(&json!({
                "reason": "Stamp",
                "payer": "Alice",
                "amount": "1.00505",
                "distribution": "equal",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(dec_of(&response.json::<Value>()["amount"]), dec!(1.01));
    }
}

mod balances {
    use super::*;

    #[tokio::test]
    async fn test_calculate_matches_ledger() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        let scenario = ScenarioFixtures::trip();
        replay(&server, &id, &scenario).await;

        let expected = scenario.build().compute_balances().unwrap();
        let body = server
            .post(&format!("/api/v1/sessions/{}/calculate", id))
            .await
            .json::<Value>();

        let rows = body["balances"].as_array().unwrap();
        assert_eq!(rows.len(), expected.len());
        for row in rows {
            let name = row["participant"].as_str().unwrap();
            assert_eq!(dec_of(&row["balance"]), expected.get(name).unwrap().amount());
        }
        assert_eq!(
            body["summary"],
            json!(["Alice should receive 20.00", "Bob owes 4.00", "Carol owes 16.00"])
        );
        assert_eq!(dec_of(&body["total_drift"]), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_per_share_drift_is_reported() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::drifting()).await;

        let body = server
            .post(&format!("/api/v1/sessions/{}/calculate", id))
            .await
            .json::<Value>();
        assert_decimal_approx_eq(dec_of(&body["total_drift"]), Decimal::ZERO, dec!(0.01));
    }

    #[tokio::test]
    async fn test_absorb_remainder_closes_drift() {
        let server = server();
        let id = open_session(&server, json!({ "rounding_policy": "absorb_remainder" })).await;
        replay(&server, &id, &ScenarioFixtures::drifting()).await;

        let body = server
            .post(&format!("/api/v1/sessions/{}/calculate", id))
            .await
            .json::<Value>();
        assert_eq!(dec_of(&body["total_drift"]), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_settled_up_status() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &TestLedgerBuilder::new().with_participants(RosterFixtures::pair())).await;

        let body = server
            .post(&format!("/api/v1/sessions/{}/calculate", id))
            .await
            .json::<Value>();
        assert_eq!(body["balances"][0]["status"], "settled_up");
        assert_eq!(body["summary"][0], "Alice is settled up.");
    }
}

mod bills {
    use super::*;

    #[tokio::test]
    async fn test_bill_reflects_latest_expense() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::dinner()).await;
        server
            .post(&format!("/api/v1/sessions/{}/calculate", id))
            .await
            .assert_status_ok();

        // Recorded after the last calculate
        server
            .post(&format!("/api/v1/sessions/{}/expenses", id))
            .json(&json!({
                "reason": "Taxi", "payer": "Bob", "amount": "12",
                "distribution": "unequal", "shares": "0, 6, 6"
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let bill = server
            .get(&format!("/api/v1/sessions/{}/bills/Carol", id))
            .await
            .json::<Value>();
        assert_eq!(dec_of(&bill["total_owed"]), dec!(16));
        assert_eq!(dec_of(&bill["total_receivable"]), Decimal::ZERO);
        assert_eq!(bill["detail_lines"], json!(["Share for Dinner: 10.00", "Share for Taxi: 6.00"]));
    }

    #[tokio::test]
    async fn test_unknown_participant_bill() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::dinner()).await;

        server
            .get(&format!("/api/v1/sessions/{}/bills/Dave", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_receipt_download_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_with(ApiConfig {
            export_dir: Some(dir.path().to_path_buf()),
            ..ApiConfig::default()
        });
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::trip()).await;

        let response = server
            .get(&format!("/api/v1/sessions/{}/bills/Carol/receipt", id))
            .await;
        response.assert_status_ok();

        let disposition = response.header("content-disposition");
        assert_eq!(disposition.to_str().unwrap(), "attachment; filename=\"Carol_bill.txt\"");

        let text = response.text();
        assert!(text.starts_with("Bill Receipt"));
        assert!(text.contains("Bill for: Carol"));
        assert!(text.contains("Total Owed: 16.00"));
        assert!(text.contains("- Share for Taxi: 6.00"));
        assert!(text.contains("Page 1"));

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_participant_receipt_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_with(ApiConfig {
            export_dir: Some(dir.path().to_path_buf()),
            ..ApiConfig::default()
        });
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::dinner()).await;

        server
            .get(&format!("/api/v1/sessions/{}/bills/Dave/receipt", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_session_stays_usable_across_receipt_downloads() {
        let server = server();
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::trip()).await;

        for _ in 0..3 {
            server
                .get(&format!("/api/v1/sessions/{}/bills/Carol/receipt", id))
                .await
                .assert_status_ok();
        }

        server
            .post(&format!("/api/v1/sessions/{}/participants", id))
            .json(&json!({ "name": "Dave" }))
            .await
            .assert_status(StatusCode::CREATED);

        let text = server
            .get(&format!("/api/v1/sessions/{}/bills/Dave/receipt", id))
            .await
            .text();
        assert!(text.contains("Bill for: Dave"));
    }

    #[tokio::test]
    async fn test_receipt_pagination_follows_config() {
        let server = server_with(ApiConfig {
            receipt_lines_per_page: 5,
            ..ApiConfig::default()
        });
        let id = open_session(&server, json!({})).await;
        replay(&server, &id, &ScenarioFixtures::trip()).await;

        let text = server
            .get(&format!("/api/v1/sessions/{}/bills/Carol/receipt", id))
            .await
            .text();
        assert!(text.contains("Page 2"));
    }
}
