use secrecy::ExposeSecret;

use crate::helper::spawn_app;

#[tokio::test]
async fn sign_in_page_renders_the_form() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<label class="form-label" for="email">E-mail</label>"#));
    assert!(html.contains(r#"<label class="form-label" for="password">Senha</label>"#));
    assert!(html.contains("Entrar"));
    assert!(!html.contains("form-error"));
}

#[tokio::test]
async fn empty_fields_show_required_messages() {
    let app = spawn_app().await;

    let response = app.post_sign_in(&[("email", ""), ("password", "")]).await;

    assert_eq!(422, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("E-mail obrigatório"));
    assert!(html.contains("Senha obrigatória"));
    assert!(app.sign_ins.entries().is_empty());
}

#[tokio::test]
async fn missing_fields_are_treated_as_empty() {
    let app = spawn_app().await;

    let response = app.post_sign_in(&[]).await;

    assert_eq!(422, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("E-mail obrigatório"));
    assert!(html.contains("Senha obrigatória"));
}

#[tokio::test]
async fn malformed_emails_are_rejected() {
    let app = spawn_app().await;
    let test_cases = ["ana", "ana@", "@x.com", "ana@x"];

    for email in test_cases {
        let response = app
            .post_sign_in(&[("email", email), ("password", "secret")])
            .await;

        assert_eq!(
            422,
            response.status().as_u16(),
            "The form was accepted with email {}.",
            email
        );
        let html = response.text().await.unwrap();
        assert!(html.contains("E-mail inválido"));
        assert!(!html.contains("Senha obrigatória"));
    }

    assert!(app.sign_ins.entries().is_empty());
}

#[tokio::test]
async fn valid_credentials_are_recorded_without_network_calls() {
    let app = spawn_app().await;

    let response = app
        .post_sign_in(&[("email", "a@b.com"), ("password", "secret")])
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(!html.contains("form-error"));
    assert!(!html.contains("aria-invalid"));

    let entries = app.sign_ins.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].email, "a@b.com");
    assert_eq!(entries[0].password.expose_secret(), "secret");

    assert_eq!(app.api_server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn submitted_password_is_not_echoed_back() {
    let app = spawn_app().await;

    let response = app
        .post_sign_in(&[("email", "not-an-email"), ("password", "hunter22")])
        .await;

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"value="not-an-email""#));
    assert!(!html.contains("hunter22"));
}
