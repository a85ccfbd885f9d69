use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{mount_created_user, spawn_app};

fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ana"),
        ("email", "ana@x.com"),
        ("password", "abcdef"),
        ("password_confirmation", "abcdef"),
    ]
}

#[tokio::test]
async fn create_user_page_renders_the_form() {
    let app = spawn_app().await;

    let response = app.get("/users/create").await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    for label in ["Nome completo", "E-mail", "Senha", "Confirmação da senha"] {
        assert!(html.contains(label), "missing label {}", label);
    }
    assert!(html.contains(r#"<a class="button button-secondary" href="/users">Cancelar</a>"#));
    assert!(!html.contains(r#"role="alert""#));
}

#[tokio::test]
async fn valid_form_is_sent_to_the_api_and_redirects_to_users() {
    let app = spawn_app().await;

    Mock::given(path("/users"))
        .and(method("POST"))
        .and(body_partial_json(json!({
            "user": {
                "name": "Ana",
                "email": "ana@x.com",
                "password": "abcdef",
                "password_confirmation": "abcdef"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": {"id": "1", "name": "Ana", "email": "ana@x.com"}
        })))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let response = app.post_create_user(&valid_form()).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(response.headers()["HX-Redirect"], "/users");

    let requests = app.api_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let created_at = body["user"]["created_at"]
        .as_str()
        .expect("A creation timestamp should be attached.")
        .parse::<DateTime<Utc>>()
        .unwrap();
    assert!((Utc::now() - created_at).num_seconds().abs() < 60);
}

#[tokio::test]
async fn plain_form_posts_are_redirected_with_see_other() {
    let app = spawn_app().await;
    mount_created_user(&app.api_server).await;

    let response = app.post_create_user_without_htmx(&valid_form()).await;

    assert_eq!(303, response.status().as_u16());
    assert_eq!(response.headers()["Location"], "/users");
}

#[tokio::test]
async fn empty_fields_show_required_messages_and_skip_the_api() {
    let app = spawn_app().await;

    let response = app
        .post_create_user(&[
            ("name", ""),
            ("email", ""),
            ("password", ""),
            ("password_confirmation", ""),
        ])
        .await;

    assert_eq!(422, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Nome obrigatório"));
    assert!(html.contains("E-mail obrigatório"));
    assert!(html.contains("Senha obrigatória"));
    assert_eq!(app.api_requests("POST").await, 0);
}

#[tokio::test]
async fn short_password_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .post_create_user(&[
            ("name", "Ana"),
            ("email", "ana@x.com"),
            ("password", "abc"),
            ("password_confirmation", "abc"),
        ])
        .await;

    assert_eq!(422, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<p class="form-error" id="password-error">No mínimo 6 caracteres</p>"#));
    assert_eq!(app.api_requests("POST").await, 0);
}

#[tokio::test]
async fn mismatched_confirmation_is_rejected() {
    let app = spawn_app().await;
    let test_cases = [("abcdef", "abcdeg"), ("abcdef", ""), ("abcdef", "ABCDEF")];

    for (password, confirmation) in test_cases {
        let response = app
            .post_create_user(&[
                ("name", "Ana"),
                ("email", "ana@x.com"),
                ("password", password),
                ("password_confirmation", confirmation),
            ])
            .await;

        assert_eq!(
            422,
            response.status().as_u16(),
            "The form was accepted with confirmation {:?}.",
            confirmation
        );
        let html = response.text().await.unwrap();
        assert!(html.contains(r#"id="password_confirmation-error""#));
    }

    assert_eq!(app.api_requests("POST").await, 0);
}

#[tokio::test]
async fn api_failure_shows_a_failure_message_and_stays_on_the_form() {
    let app = spawn_app().await;

    Mock::given(path("/users"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let response = app.post_create_user(&valid_form()).await;

    assert_eq!(502, response.status().as_u16());
    assert!(response.headers().get("HX-Redirect").is_none());
    let html = response.text().await.unwrap();
    assert!(html.contains("Não foi possível criar o usuário. Tente novamente."));
    assert!(html.contains(r#"value="Ana""#));
    assert!(!html.contains("form-error"));
}
