//! HTTP client for the Holidaze API.
//!
//! Every authenticated request carries the session's bearer token and the
//! configured `X-Noroff-API-Key`. Responses go through `envelope` so callers
//! get typed data or one of the `HolidazeError` transport variants.

mod envelope;
mod requests;

pub use envelope::{decode_body, expect_success};
pub use requests::{
    AvatarUpdate, BookingRequest, LoginRequest, LoginResponse, REGISTRATION_EMAIL_DOMAIN,
    RegisterRequest, VenueForm,
};

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::HolidazeConfig;
use crate::display_name::ProfileLookup;
use crate::error::{HolidazeError, HolidazeResult};
use crate::model::{Booking, Profile, Venue};
use crate::ownership::VenueLookup;
use crate::session::Session;

const API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// Which related records to embed in a profile response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileInclude {
    Nothing,
    Venues,
    Bookings,
}

pub struct Api {
    http: reqwest::Client,
    base_url: Url,
    config: HolidazeConfig,
    token: Option<String>,
}

impl Api {
    pub fn new(config: &HolidazeConfig, session: Option<&Session>) -> HolidazeResult<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| HolidazeError::Config(format!("Invalid api_url '{}': {e}", config.api_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(HolidazeError::Config(format!(
                "Invalid api_url '{}'",
                config.api_url
            )));
        }

        Ok(Api {
            http: reqwest::Client::new(),
            base_url,
            config: config.clone(),
            token: session.map(|s| s.access_token().to_string()),
        })
    }

    // Auth

    pub async fn register(&self, request: &RegisterRequest) -> HolidazeResult<Profile> {
        request.validate()?;
        let req = self.request(Method::POST, &["auth", "register"])?.json(request);
        self.send(req).await
    }

    pub async fn login(&self, request: &LoginRequest) -> HolidazeResult<LoginResponse> {
        let req = self
            .request(Method::POST, &["auth", "login"])?
            .query(&[("_holidaze", "true")])
            .json(request);
        self.send(req).await
    }

    // Venues

    pub async fn venues(&self) -> HolidazeResult<Vec<Venue>> {
        let req = self
            .request(Method::GET, &["holidaze", "venues"])?
            .query(&[("_owner", "true")]);
        self.send(req).await
    }

    /// Fetch a venue with its bookings and declared owner embedded.
    pub async fn venue(&self, id: &str) -> HolidazeResult<Venue> {
        let req = self
            .request(Method::GET, &["holidaze", "venues", id])?
            .query(&[("_bookings", "true"), ("_owner", "true")]);
        self.send(req).await
    }

    pub async fn create_venue(&self, form: &VenueForm) -> HolidazeResult<Venue> {
        form.validate_new()?;
        let req = self.authed(Method::POST, &["holidaze", "venues"])?.json(form);
        self.send(req).await
    }

    pub async fn update_venue(&self, id: &str, form: &VenueForm) -> HolidazeResult<Venue> {
        form.validate_update()?;
        let req = self
            .authed(Method::PUT, &["holidaze", "venues", id])?
            .json(form);
        self.send(req).await
    }

    pub async fn delete_venue(&self, id: &str) -> HolidazeResult<()> {
        let req = self.authed(Method::DELETE, &["holidaze", "venues", id])?;
        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        expect_success(status, &body)
    }

    // Bookings

    pub async fn create_booking(&self, request: &BookingRequest) -> HolidazeResult<Booking> {
        let req = self
            .authed(Method::POST, &["holidaze", "bookings"])?
            .json(request);
        self.send(req).await
    }

    /// Bookings made on a venue, with the booking customer embedded.
    pub async fn venue_bookings(&self, venue_id: &str) -> HolidazeResult<Vec<Booking>> {
        let req = self
            .authed(Method::GET, &["holidaze", "bookings"])?
            .query(&[("venue", venue_id), ("_customer", "true"), ("_venue", "true")]);
        let bookings: Vec<Booking> = self.send(req).await?;

        // The endpoint has been seen ignoring the filter; keep only this venue
        // when the response says which venue each booking belongs to.
        Ok(bookings
            .into_iter()
            .filter(|b| b.venue.as_ref().is_none_or(|v| v.id == venue_id))
            .collect())
    }

    // Profiles

    pub async fn profile(&self, name: &str, include: ProfileInclude) -> HolidazeResult<Profile> {
        let mut req = self.authed(Method::GET, &["holidaze", "profiles", name])?;
        req = match include {
            ProfileInclude::Nothing => req,
            ProfileInclude::Venues => req.query(&[("_venues", "true")]),
            ProfileInclude::Bookings => req.query(&[("_bookings", "true")]),
        };
        self.send(req).await
    }

    pub async fn update_avatar(&self, name: &str, url: &str) -> HolidazeResult<Profile> {
        let update = AvatarUpdate::new(url)?;
        let req = self
            .authed(Method::PUT, &["holidaze", "profiles", name])?
            .json(&update);
        self.send(req).await
    }

    fn endpoint(&self, segments: &[&str]) -> HolidazeResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HolidazeError::Config(format!("Invalid api_url '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// A request that sends the API key when one is configured.
    fn request(&self, method: Method, segments: &[&str]) -> HolidazeResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "api request");

        let mut req = self.http.request(method, url);
        if let Ok(key) = self.config.require_api_key() {
            req = req.header(API_KEY_HEADER, key);
        }
        Ok(req)
    }

    /// A request that requires the bearer token and API key.
    fn authed(&self, method: Method, segments: &[&str]) -> HolidazeResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(HolidazeError::NotLoggedIn)?;
        self.config.require_api_key()?;
        Ok(self.request(method, segments)?.bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> HolidazeResult<T> {
        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!(status, bytes = body.len(), "api response");
        decode_body(status, &body)
    }
}

impl VenueLookup for Api {
    async fn venue_ids_for(&self, user: &Profile) -> HolidazeResult<Vec<String>> {
        let profile = self.profile(&user.name, ProfileInclude::Venues).await?;
        Ok(profile.venues.into_iter().map(|v| v.id).collect())
    }
}

impl ProfileLookup for Api {
    async fn display_name(&self, candidate: &str) -> HolidazeResult<Option<String>> {
        match self.profile(candidate, ProfileInclude::Nothing).await {
            Ok(profile) => Ok(Some(profile.name)),
            Err(e) if e.status() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve exactly one HTTP response and hand back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];

            // Read until the end of headers plus the declared body
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
        });

        (base, rx)
    }

    fn api(base: &str, logged_in: bool) -> Api {
        let config = HolidazeConfig {
            api_url: base.to_string(),
            api_key: Some("key-123".into()),
        };
        let session = Session::new(
            "tok-456".into(),
            Profile {
                name: "alice".into(),
                ..Default::default()
            },
        );
        Api::new(&config, logged_in.then_some(&session)).unwrap()
    }

    #[tokio::test]
    async fn test_authenticated_request_carries_both_headers() {
        let (base, request) = serve_once("201 Created", r#"{"data": {"id": "v9", "name": "Cabin"}}"#).await;

        let form = VenueForm {
            name: Some("Cabin".into()),
            description: Some("By the lake".into()),
            price: Some(120.0),
            max_guests: Some(4),
            media: None,
        };
        let venue = api(&base, true).create_venue(&form).await.unwrap();
        assert_eq!(venue.id, "v9");

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /holidaze/venues "));
        assert!(request.contains("authorization: bearer tok-456"));
        assert!(request.contains("x-noroff-api-key: key-123"));
    }

    #[tokio::test]
    async fn test_error_payload_surfaces_message() {
        let (base, _request) = serve_once(
            "400 Bad Request",
            r#"{"errors": [{"message": "The selected dates are not available"}], "statusCode": 400}"#,
        )
        .await;

        let stay = crate::date_range::StayRange::from_args("2026-07-01", None).unwrap();
        let booking = BookingRequest::new("v1", &stay, 1).unwrap();
        let err = api(&base, true).create_booking(&booking).await.unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "The selected dates are not available");
    }

    #[tokio::test]
    async fn test_authed_calls_require_login() {
        let err = api("http://127.0.0.1:9", false).delete_venue("v1").await.unwrap_err();
        assert!(matches!(err, HolidazeError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_profile_lookup_treats_404_as_miss() {
        let (base, request) = serve_once(
            "404 Not Found",
            r#"{"errors": [{"message": "No profile with this name"}]}"#,
        )
        .await;

        let name = api(&base, true).display_name("ghost").await.unwrap();
        assert_eq!(name, None);
        assert!(request.await.unwrap().starts_with("GET /holidaze/profiles/ghost "));
    }

    #[tokio::test]
    async fn test_venue_lookup_returns_profile_venue_ids() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"data": {"name": "alice", "venues": [{"id": "v1"}, {"id": "v2"}]}}"#,
        )
        .await;

        let user = Profile {
            name: "alice".into(),
            ..Default::default()
        };
        let ids = api(&base, true).venue_ids_for(&user).await.unwrap();

        assert_eq!(ids, vec!["v1", "v2"]);
        assert!(request.await.unwrap().contains("_venues=true"));
    }

    #[tokio::test]
    async fn test_venue_bookings_keeps_only_that_venue() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"data": [
                {"id": "b1", "dateFrom": "2026-07-01T00:00:00.000Z", "dateTo": "2026-07-03T00:00:00.000Z", "guests": 2, "venue": {"id": "v1"}},
                {"id": "b2", "dateFrom": "2026-07-04T00:00:00.000Z", "dateTo": "2026-07-05T00:00:00.000Z", "guests": 1, "venue": {"id": "v2"}},
                {"id": "b3", "dateFrom": "2026-08-01T00:00:00.000Z", "dateTo": "2026-08-02T00:00:00.000Z", "guests": 1}
            ]}"#,
        )
        .await;

        let bookings = api(&base, true).venue_bookings("v1").await.unwrap();
        let ids: Vec<_> = bookings.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["b1", "b3"]);
        let request = request.await.unwrap();
        assert!(request.contains("venue=v1"));
        assert!(request.contains("_customer=true"));
    }

    #[tokio::test]
    async fn test_authed_calls_require_api_key() {
        let config = HolidazeConfig {
            api_url: "http://127.0.0.1:9".into(),
            api_key: None,
        };
        let session = Session::new("tok-456".into(), Profile::default());
        let api = Api::new(&config, Some(&session)).unwrap();

        let err = api.delete_venue("v1").await.unwrap_err();
        assert!(matches!(err, HolidazeError::Config(_)));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Bind then drop so nothing is listening on the port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = api(&base, false).venues().await.unwrap_err();
        assert!(matches!(err, HolidazeError::Transport(_)));
    }

    #[test]
    fn test_path_segments_are_escaped() {
        let api = api("https://v2.api.noroff.dev", true);
        let url = api.endpoint(&["holidaze", "profiles", "a b/c"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://v2.api.noroff.dev/holidaze/profiles/a%20b%2Fc"
        );
    }
}
