use serde::Serialize;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
