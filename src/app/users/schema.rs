use once_cell::sync::Lazy;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::user::NewUser;
use crate::form::{empty_secret, FieldRules, FormData, Rule, Schema};

pub static CREATE_USER_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(FieldRules::new("name").rule(Rule::Required, "Nome obrigatório"))
        .field(
            FieldRules::new("email")
                .rule(Rule::Required, "E-mail obrigatório")
                .rule(Rule::Email, "E-mail inválido"),
        )
        .field(
            FieldRules::new("password")
                .rule(Rule::Required, "Senha obrigatória")
                .rule(Rule::MinLength(6), "No mínimo 6 caracteres"),
        )
        // Only equality is checked here, an empty confirmation is not rejected on its own.
        .field(
            FieldRules::new("password_confirmation")
                .rule(Rule::EqualsField("password"), "As senhas precisam ser iguais"),
        )
});

#[derive(Deserialize, Clone, Debug)]
pub struct CreateUserFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
    #[serde(default = "empty_secret")]
    pub password_confirmation: Secret<String>,
}

impl FormData for CreateUserFormData {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(self.name.as_str()),
            "email" => Some(self.email.as_str()),
            "password" => Some(self.password.expose_secret().as_str()),
            "password_confirmation" => Some(self.password_confirmation.expose_secret().as_str()),
            _ => None,
        }
    }
}

impl From<CreateUserFormData> for NewUser {
    fn from(value: CreateUserFormData) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password: value.password,
            password_confirmation: value.password_confirmation,
        }
    }
}
