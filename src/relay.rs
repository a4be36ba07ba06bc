use std::sync::OnceLock;

use http::StatusCode;
use thiserror::Error;
use url::Url;

use crate::contact::{ContactForm, FieldErrors};

pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xleqrrjq";
pub const ENDPOINT_ENV: &str = "CONTACT_RELAY_URL";

static GLOBAL_RELAY: OnceLock<ContactRelay> = OnceLock::new();

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid relay endpoint {0:?}: {1}")]
    InvalidEndpoint(String, url::ParseError),
    #[error("Relay endpoint must be http or https, got {0:?}")]
    UnsupportedScheme(String),
    #[error("Couldn't reach relay: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Relay rejected submission with status {0}")]
    Rejected(StatusCode),
    #[error("Contact relay not configured")]
    NotConfigured,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: Url,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::parse(std::env::var(ENDPOINT_ENV).ok().as_deref())
    }

    /// Blank or missing values fall back to [`DEFAULT_ENDPOINT`].
    pub fn parse(endpoint: Option<&str>) -> Result<Self, RelayError> {
        let raw = endpoint
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        let endpoint =
            Url::parse(raw).map_err(|e| RelayError::InvalidEndpoint(raw.to_string(), e))?;
        match endpoint.scheme() {
            "http" | "https" => Ok(Self { endpoint }),
            other => Err(RelayError::UnsupportedScheme(other.to_string())),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint should parse"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl ContactRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    pub fn request(&self, form: &ContactForm) -> Result<reqwest::Request, RelayError> {
        Ok(self
            .client
            .post(self.config.endpoint.clone())
            .form(form)
            .build()?)
    }

    pub async fn forward(&self, form: &ContactForm) -> Result<(), RelayError> {
        let request = self.request(form)?;
        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected(status));
        }
        tracing::debug!(%status, "relay accepted contact form");
        Ok(())
    }
}

// later calls keep the first relay
pub fn install(config: RelayConfig) -> &'static ContactRelay {
    GLOBAL_RELAY.get_or_init(|| ContactRelay::new(config))
}

pub fn global() -> Result<&'static ContactRelay, RelayError> {
    GLOBAL_RELAY.get().ok_or(RelayError::NotConfigured)
}

/// Re-checks a form that arrived from the browser before it is relayed.
pub fn screen(form: ContactForm) -> Result<ContactForm, FieldErrors> {
    let checked = form.validate();
    if checked.is_valid {
        Ok(form)
    } else {
        Err(checked.errors)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        net::SocketAddr,
        sync::{Arc, Mutex},
    };

    use axum::{extract::State, routing::post, Form, Router};

    use super::*;

    type Seen = Arc<Mutex<Vec<Vec<(String, String)>>>>;

    async fn accept(
        State(seen): State<Seen>,
        Form(fields): Form<Vec<(String, String)>>,
    ) -> StatusCode {
        seen.lock().expect("should be able to acquire lock").push(fields);
        StatusCode::OK
    }

    async fn refuse() -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    async fn serve_relay(seen: Seen) -> SocketAddr {
        let app = Router::new()
            .route("/ok", post(accept))
            .route("/refuse", post(refuse))
            .with_state(seen);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn relay_at(addr: SocketAddr, path: &str) -> ContactRelay {
        ContactRelay::new(RelayConfig::parse(Some(&format!("http://{addr}{path}"))).unwrap())
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(RelayConfig::parse(None).unwrap(), RelayConfig::default());
        assert_eq!(RelayConfig::parse(Some("  ")).unwrap(), RelayConfig::default());
        assert_eq!(
            RelayConfig::default().endpoint.as_str(),
            "https://formspree.io/f/xleqrrjq"
        );
    }

    #[test]
    fn test_parse_override() {
        let config = RelayConfig::parse(Some("http://localhost:8080/relay")).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8080/relay");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            RelayConfig::parse(Some("not a url")),
            Err(RelayError::InvalidEndpoint(..))
        ));
        assert!(matches!(
            RelayConfig::parse(Some("ftp://example.com/relay")),
            Err(RelayError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn test_request_is_form_post() {
        let relay = ContactRelay::new(RelayConfig::default());
        let req = relay.request(&form()).unwrap();
        assert_eq!(*req.method(), reqwest::Method::POST);
        assert_eq!(req.url().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(
            req.headers()
                .get(http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/x-www-form-urlencoded")
        );
        assert!(req.headers().get(http::header::AUTHORIZATION).is_none());
        let body = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            std::str::from_utf8(body).unwrap(),
            "name=Jo&email=jo%40example.com&subject=Hi&message=Hello+there"
        );
    }

    #[tokio::test]
    async fn test_forward_accepted() {
        let seen = Seen::default();
        let addr = serve_relay(seen.clone()).await;
        relay_at(addr, "/ok").forward(&form()).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let fields: Vec<(&str, &str)> = seen[0]
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("name", "Jo"),
                ("email", "jo@example.com"),
                ("subject", "Hi"),
                ("message", "Hello there"),
            ]
        );
    }

    #[tokio::test]
    async fn test_forward_rejected_status() {
        let addr = serve_relay(Seen::default()).await;
        let res = relay_at(addr, "/refuse").forward(&form()).await;
        assert!(matches!(
            res,
            Err(RelayError::Rejected(StatusCode::UNPROCESSABLE_ENTITY))
        ));
    }

    #[test]
    fn test_global_before_install() {
        // no test installs a relay
        assert!(matches!(global(), Err(RelayError::NotConfigured)));
    }

    #[test]
    fn test_screen_passes_valid_form() {
        assert_eq!(screen(form()).unwrap(), form());
    }

    #[test]
    fn test_screen_refuses_invalid_form() {
        let blank_name = ContactForm {
            name: "  ".to_string(),
            ..form()
        };
        let errors = screen(blank_name).unwrap_err();
        assert_eq!(errors.name, "Name is required");
        assert_eq!(errors.email, "");

        let bad_email = ContactForm {
            email: "jo@".to_string(),
            ..form()
        };
        let errors = screen(bad_email).unwrap_err();
        assert_eq!(errors.email, "Please enter a valid email");
        assert_eq!(errors.name, "");
    }
}
