use once_cell::sync::Lazy;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::form::{empty_secret, FieldRules, FormData, Rule, Schema};

pub static SIGN_IN_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            FieldRules::new("email")
                .rule(Rule::Required, "E-mail obrigatório")
                .rule(Rule::Email, "E-mail inválido"),
        )
        .field(FieldRules::new("password").rule(Rule::Required, "Senha obrigatória"))
});

/// Values posted by the sign-in form. Missing fields arrive as empty strings.
#[derive(Deserialize, Clone, Debug)]
pub struct SignInFormData {
    #[serde(default)]
    pub email: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
}

impl FormData for SignInFormData {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "email" => Some(self.email.as_str()),
            "password" => Some(self.password.expose_secret().as_str()),
            _ => None,
        }
    }
}
