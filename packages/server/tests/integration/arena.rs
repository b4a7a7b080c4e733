use chrono::Local;
use serde_json::json;

use crate::common::{TestApp, routes};

fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

mod today {
    use super::*;

    #[tokio::test]
    async fn returns_default_without_persisting_it() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::TODAY).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["date"], today_str());
        assert_eq!(res.body["team_a"]["name"], "蔡徐坤");
        assert_eq!(res.body["team_a"]["title"], "练习生");
        assert_eq!(res.body["team_a"]["color"], "#ec4899");
        assert_eq!(res.body["team_b"]["name"], "范小勤");
        assert_eq!(res.body["team_b"]["slogan"], "我要开发5G...");
        assert_eq!(res.body["team_b"]["memes"], json!([]));

        let list = app.get(routes::LIST).await;
        assert_eq!(list.body["total"], 0);
        assert!(app.arenas.all_rows().is_empty());
    }

    #[tokio::test]
    async fn returns_saved_configuration_for_today() {
        let app = TestApp::spawn().await;
        app.save_arena(&today_str(), "Today's Champion").await;

        let res = app.get(routes::TODAY).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["team_a"]["name"], "Today's Champion");
    }
}

mod by_date {
    use super::*;

    #[tokio::test]
    async fn returns_decoded_memes() {
        let app = TestApp::spawn().await;
        let res = app
            .post_json(
                routes::SAVE,
                &json!({
                    "date": "2026-01-22",
                    "team_a_memes": ["http://a.example.com/1.png", "http://a.example.com/2.png"],
                    "team_b_memes": "[\"http://b.example.com/1.gif\"]",
                }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);

        let res = app.get(&routes::arena("2026-01-22")).await;
        assert_eq!(res.status, 200);
        assert_eq!(
            res.body["team_a"]["memes"],
            json!(["http://a.example.com/1.png", "http://a.example.com/2.png"])
        );
        assert_eq!(res.body["team_b"]["memes"], json!(["http://b.example.com/1.gif"]));
    }

    #[tokio::test]
    async fn unparsable_memes_read_as_empty() {
        let app = TestApp::spawn().await;
        app.post_json(
            routes::SAVE,
            &json!({"date": "2026-01-22", "team_a_memes": "not json"}),
        )
        .await;

        let res = app.get(&routes::arena("2026-01-22")).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["team_a"]["memes"], json!([]));
    }

    #[tokio::test]
    async fn missing_date_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app.get(&routes::arena("1999-12-31")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.code(), "NOT_FOUND");
    }
}

mod save {
    use super::*;

    #[tokio::test]
    async fn second_save_updates_in_place() {
        let app = TestApp::spawn().await;

        let first = app
            .post_json(routes::SAVE, &json!({"date": "2026-01-22", "team_a_name": "First"}))
            .await;
        assert_eq!(first.status, 200);
        assert_eq!(first.body["message"], "Created successfully");

        let second = app
            .post_json(
                routes::SAVE,
                &json!({"id": 999, "date": "2026-01-22", "team_a_name": "Second"}),
            )
            .await;
        assert_eq!(second.status, 200);
        assert_eq!(second.body["message"], "Updated successfully");
        assert_eq!(second.body["data"]["id"], first.body["data"]["id"]);
        assert_eq!(second.body["data"]["created_at"], first.body["data"]["created_at"]);
        assert_eq!(second.body["data"]["team_a_name"], "Second");

        let list = app.get(routes::LIST).await;
        assert_eq!(list.body["total"], 1);
    }

    #[tokio::test]
    async fn save_is_a_full_replace() {
        let app = TestApp::spawn().await;
        app.post_json(
            routes::SAVE,
            &json!({"date": "2026-01-22", "team_a_name": "A", "team_b_slogan": "Keep?"}),
        )
        .await;

        let res = app
            .post_json(routes::SAVE, &json!({"date": "2026-01-22", "team_a_name": "A2"}))
            .await;
        assert_eq!(res.body["data"]["team_b_slogan"], "");
    }

    #[tokio::test]
    async fn empty_date_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app
            .post_json(routes::SAVE, &json!({"date": "", "team_a_name": "A"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "VALIDATION_ERROR");
        assert!(app.arenas.all_rows().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app
            .client
            .post(app.url(routes::SAVE))
            .header("Content-Type", "application/json")
            .body("{not json")
            .send()
            .await
            .expect("Failed to send POST request");

        assert_eq!(res.status(), 400);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().starts_with("Malformed JSON body"));
    }

    #[tokio::test]
    async fn body_without_json_content_type_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app
            .client
            .post(app.url(routes::SAVE))
            .body(r#"{"date":"2026-01-22"}"#)
            .send()
            .await
            .expect("Failed to send POST request");

        assert_eq!(res.status(), 400);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("application/json"));
        assert!(app.arenas.all_rows().is_empty());
    }

    #[tokio::test]
    async fn wrongly_typed_field_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app
            .post_json(routes::SAVE, &json!({"date": 20260122}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "VALIDATION_ERROR");
        assert!(res.body["message"].as_str().unwrap().starts_with("Invalid arena configuration"));
    }

    #[tokio::test]
    async fn saving_a_deleted_date_revives_the_row() {
        let app = TestApp::spawn().await;
        let id = app.save_arena("2026-01-22", "Before").await;
        assert_eq!(app.delete(&routes::arena(id)).await.status, 200);

        let res = app
            .post_json(routes::SAVE, &json!({"date": "2026-01-22", "team_a_name": "After"}))
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["message"], "Created successfully");
        assert_eq!(res.body["data"]["id"], id);

        let res = app.get(&routes::arena("2026-01-22")).await;
        assert_eq!(res.body["team_a"]["name"], "After");
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn lists_newest_date_first_with_raw_memes() {
        let app = TestApp::spawn().await;
        app.save_arena("2026-01-20", "Old").await;
        app.save_arena("2026-01-22", "New").await;
        app.save_arena("2026-01-21", "Mid").await;

        let res = app.get(routes::LIST).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"], 3);

        let dates: Vec<&str> = res.body["list"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates, ["2026-01-22", "2026-01-21", "2026-01-20"]);
        assert_eq!(res.body["list"][0]["team_a_memes"], "[]");
        assert!(res.body["list"][0].get("deleted_at").is_none());
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn deleted_row_disappears_and_others_remain() {
        let app = TestApp::spawn().await;
        let gone = app.save_arena("2026-01-21", "Gone").await;
        app.save_arena("2026-01-22", "Stays").await;

        let res = app.delete(&routes::arena(gone)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["message"], "Deleted successfully");

        assert_eq!(app.get(&routes::arena("2026-01-21")).await.status, 404);
        assert_eq!(app.get(&routes::arena("2026-01-22")).await.status, 200);

        let list = app.get(routes::LIST).await;
        assert_eq!(list.body["total"], 1);
        // Soft delete keeps the row in storage.
        assert_eq!(app.arenas.all_rows().len(), 2);
    }

    #[tokio::test]
    async fn unknown_or_repeated_delete_is_not_found() {
        let app = TestApp::spawn().await;
        assert_eq!(app.delete(&routes::arena(42)).await.code(), "NOT_FOUND");

        let id = app.save_arena("2026-01-22", "Once").await;
        assert_eq!(app.delete(&routes::arena(id)).await.status, 200);
        assert_eq!(app.delete(&routes::arena(id)).await.status, 404);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app.delete(&routes::arena("abc")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.code(), "VALIDATION_ERROR");
    }
}
