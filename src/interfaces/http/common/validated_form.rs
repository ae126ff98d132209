//! `ValidatedForm<T>`: `axum::Form<T>` followed by `validator::Validate`.
//!
//! Decoding failures keep the status axum chose (400/415/422); validation
//! failures answer 422 with one `field: message` entry per violated rule.

use axum::extract::{Form, FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ApiError;

/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Inquiry {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn handler(ValidatedForm(form): ValidatedForm<Inquiry>) { /* valid here */ }
/// ```
pub struct ValidatedForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::new(rejection.status(), format!("Invalid form: {}", rejection.body_text()))
            })?;

        value.validate().map_err(|errors| {
            ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, describe(&errors))
        })?;

        Ok(Self(value))
    }
}

/// `email: must be a valid email address; subject: subject is required`,
/// sorted so the message is stable across runs.
fn describe(errors: &ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();

    if lines.is_empty() {
        return "Validation failed".to_string();
    }
    lines.sort();
    lines.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::header;
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Signup {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    async fn echo(ValidatedForm(form): ValidatedForm<Signup>) -> String {
        form.name
    }

    async fn post_form(body: &'static str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri("/signup")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        let response = Router::new()
            .route("/signup", post(echo))
            .oneshot(request)
            .await
            .unwrap()
            .into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn valid_form_reaches_handler() {
        let (status, body) = post_form("name=Ana&email=ana%40example.com").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Ana");
    }

    #[tokio::test]
    async fn undecodable_form_is_a_client_error() {
        let (status, body) = post_form("name=Ana").await;
        assert!(status.is_client_error());
        assert!(body.contains("Invalid form"));
    }

    #[tokio::test]
    async fn rule_violations_are_listed_per_field() {
        let (status, body) = post_form("name=&email=nope").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("email: email"));
        assert!(body.contains("name: name is required"));
    }
}
