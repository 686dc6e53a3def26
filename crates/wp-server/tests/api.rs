//! Router-level tests driven through `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;
use wp_auth::{PasswordGate, TokenSet};
use wp_server::{AppState, router};
use wp_store::{FileStore, Store, TravelService};

const PASSWORD: &str = "pintxos";

struct TestApp {
    app: Router,
    dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        Self::with_client(false)
    }

    fn with_client(with_client: bool) -> Self {
        let dir = TempDir::new().unwrap();
        let store = Store::File(FileStore::new(dir.path().join("data.json"), true));
        let state = AppState::new(
            TravelService::new(store),
            PasswordGate::new(PASSWORD, TokenSet::new()),
        );

        let dist = dir.path().join("dist");
        if with_client {
            std::fs::create_dir_all(&dist).unwrap();
            std::fs::write(dist.join("index.html"), "<!doctype html><title>Waypoint</title>").unwrap();
            std::fs::write(dist.join("app.js"), "console.log('waypoint')").unwrap();
        }
        let app = router(state, Some(&dist));
        Self { app, dir }
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        };
        self.send(req.unwrap()).await
    }

    async fn login(&self) -> String {
        let (status, body) = self
            .call(Method::POST, "/api/login", None, Some(json!({"password": PASSWORD})))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        body["token"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn login_issues_hex_token() {
    let app = TestApp::new();
    let token = app.login().await;
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn wrong_password_is_401() {
    let app = TestApp::new();
    let (status, body) = app
        .call(Method::POST, "/api/login", None, Some(json!({"password": "nope"})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "wrong password"}));
}

#[tokio::test]
async fn protected_routes_need_a_token() {
    let app = TestApp::new();

    let (status, body) = app.call(Method::GET, "/api/data", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "login required");

    let (status, body) = app
        .call(Method::GET, "/api/data", Some("not-a-real-token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid or expired token");

    let req = Request::builder()
        .uri("/api/data")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_revokes_the_token() {
    let app = TestApp::new();
    let token = app.login().await;

    let (status, body) = app.call(Method::POST, "/api/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = app.call(Method::GET, "/api/data", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn fresh_document_has_both_cities() {
    let app = TestApp::new();
    let token = app.login().await;
    let (status, body) = app.call(Method::GET, "/api/data", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cities"]["bilbao"]["name"], "Bilbao");
    assert_eq!(body["cities"]["sanSebastian"]["places"], json!([]));
    assert_eq!(body["quickLinks"], json!([]));
}

#[tokio::test]
async fn place_lifecycle() {
    let app = TestApp::new();
    let token = app.login().await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/places",
            Some(&token),
            Some(json!({
                "cityKey": "bilbao",
                "place": {"name": "Guggenheim", "category": "museums", "website": "guggenheim-bilbao.eus"}
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["place"]["website"], "https://guggenheim-bilbao.eus");
    let id = body["place"]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/places/{id}");
    let (status, body) = app.call(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Guggenheim");
    assert_eq!(body["city"], "bilbao");
    assert_eq!(body["visited"], false);

    let (status, body) = app
        .call(
            Method::PUT,
            &uri,
            Some(&token),
            Some(json!({"id": "hijack", "visited": true, "notes": "Book ahead"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, body) = app.call(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["visited"], true);
    assert_eq!(body["notes"], "Book ahead");
    assert_eq!(body["category"], "museums");

    let (status, _) = app.call(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.call(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id));

    let (status, _) = app.call(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .call(Method::PUT, &uri, Some(&token), Some(json!({"visited": false})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_city_is_400() {
    let app = TestApp::new();
    let token = app.login().await;
    let (status, body) = app
        .call(
            Method::POST,
            "/api/places",
            Some(&token),
            Some(json!({"cityKey": "madrid", "place": {"name": "Prado", "category": "museums"}})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("madrid"));
}

#[tokio::test]
async fn blank_name_update_is_400() {
    let app = TestApp::new();
    let token = app.login().await;
    let (_, body) = app
        .call(
            Method::POST,
            "/api/places",
            Some(&token),
            Some(json!({"cityKey": "bilbao", "place": {"name": "Guggenheim", "category": "museums"}})),
        )
        .await;
    let uri = format!("/api/places/{}", body["place"]["id"].as_str().unwrap());

    let (status, body) = app
        .call(Method::PUT, &uri, Some(&token), Some(json!({"name": "  "})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));

    // The whole document still round-trips.
    let (_, data) = app.call(Method::GET, "/api/data", Some(&token), None).await;
    let (status, _) = app.call(Method::POST, "/api/data", Some(&token), Some(data)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_bodies_are_400_json() {
    let app = TestApp::new();
    let token = app.login().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/places")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // Unknown category.
    let (status, _) = app
        .call(
            Method::POST,
            "/api/places",
            Some(&token),
            Some(json!({"cityKey": "bilbao", "place": {"name": "X", "category": "nightlife"}})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn replace_whole_document() {
    let app = TestApp::new();
    let token = app.login().await;

    let doc = json!({
        "cities": {
            "bilbao": {"name": "Bilbao", "places": [{"id": "p1", "name": "Guggenheim", "category": "museums"}]},
            "sanSebastian": {"name": "San Sebastián", "places": []}
        },
        "quickLinks": [{"category": "Transport", "links": [{"name": "Bizkaibus", "url": "https://bizkaibus.eus"}]}]
    });
    let (status, body) = app.call(Method::POST, "/api/data", Some(&token), Some(doc)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, body) = app.call(Method::GET, "/api/data", Some(&token), None).await;
    assert_eq!(body["cities"]["bilbao"]["places"][0]["id"], "p1");
    assert_eq!(body["quickLinks"][0]["links"][0]["name"], "Bizkaibus");

    let on_disk = std::fs::read_to_string(app.dir.path().join("data.json")).unwrap();
    assert!(on_disk.contains("\"Guggenheim\""));

    let duplicate = json!({
        "cities": {
            "bilbao": {"name": "Bilbao", "places": [
                {"id": "p1", "name": "A", "category": "other"},
                {"id": "p1", "name": "B", "category": "other"}
            ]}
        },
        "quickLinks": []
    });
    let (status, body) = app
        .call(Method::POST, "/api/data", Some(&token), Some(duplicate))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("duplicate place id"));
}

#[tokio::test]
async fn quick_link_routes() {
    let app = TestApp::new();
    let token = app.login().await;

    for (name, url) in [("Bizkaibus", "bizkaibus.eus"), ("Euskotren", "euskotren.eus")] {
        let (status, _) = app
            .call(
                Method::POST,
                "/api/quick-links",
                Some(&token),
                Some(json!({"category": "Transport", "name": name, "url": url})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = app
        .call(
            Method::POST,
            "/api/quick-links",
            Some(&token),
            Some(json!({"category": "Transport", "name": "", "url": "x.eus"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .call(Method::DELETE, "/api/quick-links/Transport/0", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.call(Method::GET, "/api/data", Some(&token), None).await;
    assert_eq!(
        body["quickLinks"],
        json!([{"category": "Transport", "links": [{"name": "Euskotren", "url": "https://euskotren.eus"}]}])
    );

    let (status, _) = app
        .call(Method::DELETE, "/api/quick-links/Transport/9", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .call(Method::DELETE, "/api/quick-links/Transport/first", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .call(Method::DELETE, "/api/quick-links/Transport", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .call(Method::DELETE, "/api/quick-links/Transport", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_api_route_is_json_404() {
    let app = TestApp::with_client(true);
    let (status, body) = app.call(Method::GET, "/api/nothing-here", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn client_files_and_spa_fallback() {
    let app = TestApp::with_client(true);

    let (status, body) = app.call(Method::GET, "/app.js", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("console.log('waypoint')".into()));

    let (status, body) = app.call(Method::GET, "/city/bilbao", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap().contains("<title>Waypoint</title>"));
}

#[tokio::test]
async fn cors_preflight_allows_authorization() {
    let app = TestApp::new();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/data")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();
    let resp = app.app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
