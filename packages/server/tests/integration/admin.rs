use crate::common::{TestApp, routes};

const FORM: &[(&str, &str)] = &[
    ("date", "2026-01-22"),
    ("team_a_name", "Kun"),
    ("team_a_title", "Trainee"),
    ("team_a_slogan", "Just because"),
    ("team_a_image", "https://img.example.com/a.png"),
    ("team_a_memes", "http://a\n\nfoo\n[]"),
    ("team_a_color", "#ec4899"),
    ("team_b_name", "Qin"),
    ("team_b_title", "Digger"),
    ("team_b_slogan", "5G"),
    ("team_b_image", ""),
    ("team_b_memes", " https://b.example.com/1.gif \r\nhttps://b.example.com/2.gif"),
    ("team_b_color", "#3b82f6"),
];

mod pages {
    use super::*;

    #[tokio::test]
    async fn list_page_shows_live_configurations() {
        let app = TestApp::spawn().await;
        app.save_arena("2026-01-21", "Alpha").await;
        let gone = app.save_arena("2026-01-20", "Removed").await;
        app.delete(&routes::arena(gone)).await;

        let res = app.get(routes::ADMIN).await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("2026-01-21"));
        assert!(res.text.contains("Alpha"));
        assert!(!res.text.contains("Removed"));
    }

    #[tokio::test]
    async fn new_page_is_prefilled_with_defaults() {
        let app = TestApp::spawn().await;
        let res = app.get(routes::ADMIN_NEW).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("蔡徐坤"));
        assert!(res.text.contains("范小勤"));
        assert!(res.text.contains("#3b82f6"));
        // Empty meme lists show as an empty textarea, not a JSON literal.
        assert!(!res.text.contains("[]"));
    }

    #[tokio::test]
    async fn edit_page_shows_memes_one_per_line() {
        let app = TestApp::spawn().await;
        let res = app
            .post_json(
                routes::SAVE,
                &serde_json::json!({
                    "date": "2026-01-22",
                    "team_a_name": "Editable",
                    "team_a_memes": ["https://a.example.com/1.png", "https://a.example.com/2.png"],
                }),
            )
            .await;
        let id = res.body["data"]["id"].as_i64().unwrap();

        let res = app.get(&routes::admin_edit(id)).await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("Editable"));
        assert!(res.text.contains("1.png\nhttps:"));
    }

    #[tokio::test]
    async fn edit_page_redirects_for_bad_or_unknown_id() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::admin_edit("abc")).await;
        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/admin"));

        let res = app.get(&routes::admin_edit(404)).await;
        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/admin"));
    }
}

mod save {
    use super::*;

    #[tokio::test]
    async fn form_save_converts_lines_and_redirects() {
        let app = TestApp::spawn().await;
        let res = app.post_form(routes::ADMIN_SAVE, FORM).await;

        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/admin"));

        let rows = app.arenas.all_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team_a_name, "Kun");
        assert_eq!(rows[0].team_a_memes, r#"["http://a"]"#);
        assert_eq!(
            rows[0].team_b_memes,
            r#"["https://b.example.com/1.gif","https://b.example.com/2.gif"]"#
        );

        let api = app.get(&routes::arena("2026-01-22")).await;
        assert_eq!(api.body["team_a"]["memes"], serde_json::json!(["http://a"]));
    }

    #[tokio::test]
    async fn form_save_updates_existing_date() {
        let app = TestApp::spawn().await;
        let id = app.save_arena("2026-01-22", "Before").await;

        app.post_form(routes::ADMIN_SAVE, FORM).await;

        let rows = app.arenas.all_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].team_a_name, "Kun");
    }

    #[tokio::test]
    async fn empty_date_re_renders_form_with_error() {
        let app = TestApp::spawn().await;
        let res = app
            .post_form(
                routes::ADMIN_SAVE,
                &[("date", "  "), ("team_a_name", "Keep me")],
            )
            .await;

        assert_eq!(res.status, 400);
        assert!(res.text.contains("Date must not be empty"));
        assert!(res.text.contains("Keep me"));
        assert!(app.arenas.all_rows().is_empty());
    }

    #[tokio::test]
    async fn empty_date_while_editing_keeps_edit_title() {
        let app = TestApp::spawn().await;
        let id = app.save_arena("2026-01-22", "Existing").await;

        let edit = app.get(&routes::admin_edit(id)).await;
        assert!(edit.text.contains(&format!(r#"name="id" value="{id}""#)));

        let id = id.to_string();
        let res = app
            .post_form(routes::ADMIN_SAVE, &[("id", id.as_str()), ("date", "")])
            .await;

        assert_eq!(res.status, 400);
        assert!(res.text.contains("Edit arena configuration"));
        assert!(!res.text.contains("New arena configuration"));
        assert!(res.text.contains(&format!(r#"name="id" value="{id}""#)));
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn delete_soft_deletes_and_redirects() {
        let app = TestApp::spawn().await;
        let id = app.save_arena("2026-01-22", "Doomed").await;

        let res = app.post_form(&routes::admin_delete(id), &[]).await;
        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/admin"));

        assert_eq!(app.get(&routes::arena("2026-01-22")).await.status, 404);
        assert!(app.arenas.all_rows()[0].deleted_at.is_some());
    }

    #[tokio::test]
    async fn delete_always_redirects() {
        let app = TestApp::spawn().await;

        for id in ["abc", "999"] {
            let res = app.post_form(&routes::admin_delete(id), &[]).await;
            assert_eq!(res.status, 303);
            assert_eq!(res.location.as_deref(), Some("/admin"));
        }
    }
}
