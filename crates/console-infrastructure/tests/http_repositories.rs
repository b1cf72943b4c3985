use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use console_core::domain::{CreateClientRequest, LoginRequest};
use console_core::error::DomainError;
use console_core::repositories::{
    AssetRepository, AuthRepository, ClientRepository, DashboardRepository,
    NotificationRepository, RoleRepository, ShowroomRepository,
};
use console_core::views::PendingFile;
use console_infrastructure::{
    ApiClient, HttpAssetRepository, HttpAuthRepository, HttpClientRepository,
    HttpDashboardRepository, HttpNotificationRepository, HttpRoleRepository,
    HttpShowroomRepository,
};

async fn setup() -> (MockServer, Arc<ApiClient>) {
    let server = MockServer::start().await;
    let api = ApiClient::with_base_url(&server.uri(), Duration::from_secs(5)).unwrap();
    (server, Arc::new(api))
}

#[tokio::test]
async fn login_arms_bearer_token_for_later_requests() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("owner@acme.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "accessToken": "tok-123",
                "user": {
                    "id": "u1",
                    "email": "owner@acme.test",
                    "role": { "code": "OWNER", "permissions": ["assets.read"] }
                }
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/assets"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [{ "id": "a1", "name": "Router", "type": "credential" }]
        })))
        .mount(&server)
        .await;

    let auth = HttpAuthRepository::new(Arc::clone(&api));
    let session = auth
        .login(&LoginRequest { email: "owner@acme.test".into(), password: "pw".into() })
        .await
        .unwrap();
    assert_eq!(session.token, "tok-123");
    assert!(session.auth_context().is_owner_role);

    let assets = HttpAssetRepository::new(api).list().await.unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].name, "Router");
}

#[tokio::test]
async fn error_status_carries_backend_message() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid email or password" })),
        )
        .mount(&server)
        .await;

    let result = HttpAuthRepository::new(Arc::clone(&api))
        .login(&LoginRequest { email: "x@acme.test".into(), password: "bad".into() })
        .await;

    let err = result.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid email or password");
    assert!(!api.has_token());
}

#[tokio::test]
async fn list_tolerates_envelope_shapes() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/showrooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "s1", "name": "North Hall" },
                { "name": "missing id" }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let showrooms = HttpShowroomRepository::new(Arc::clone(&api)).list().await.unwrap();
    assert_eq!(showrooms.len(), 1);
    assert_eq!(showrooms[0].id, "s1");

    let roles = HttpRoleRepository::new(api).list().await.unwrap();
    assert!(roles.is_empty());
}

#[tokio::test]
async fn find_by_id_maps_404_to_none() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/assets/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Asset not found" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/assets/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "asset": { "id": "a1", "name": "Router", "type": "text" } }
        })))
        .mount(&server)
        .await;

    let repo = HttpAssetRepository::new(api);
    assert!(repo.find_by_id("missing").await.unwrap().is_none());
    assert_eq!(repo.find_by_id("a1").await.unwrap().unwrap().name, "Router");
}

#[tokio::test]
async fn upload_sends_multipart_files_field() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/assets/a1/files"))
        .and(body_string_contains("name=\"files\""))
        .and(body_string_contains("filename=\"front.png\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "files": [{ "id": "f1", "assetId": "a1", "fileName": "front.png", "mimeType": "image/png" }]
        })))
        .mount(&server)
        .await;

    let uploaded = HttpAssetRepository::new(api)
        .upload_files("a1", vec![PendingFile::new("front.png", vec![1, 2, 3])])
        .await
        .unwrap();
    assert_eq!(uploaded.len(), 1);
    assert!(uploaded[0].is_image());
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/showrooms/s1/assets/a1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    HttpShowroomRepository::new(api).delete_asset("s1", "a1").await.unwrap();
}

#[tokio::test]
async fn notifications_and_dashboard() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/notifications"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notifications": [{ "id": "n1", "title": "New asset", "isRead": false }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/notifications/read-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "totalAssets": 12, "totalShowrooms": 3 }
        })))
        .mount(&server)
        .await;

    let notifications = HttpNotificationRepository::new(Arc::clone(&api));
    assert_eq!(notifications.list(20).await.unwrap().len(), 1);
    notifications.mark_all_read().await.unwrap();

    let stats = HttpDashboardRepository::new(api).stats().await.unwrap();
    assert_eq!(stats.assets, 12);
    assert_eq!(stats.showrooms, 3);
    assert_eq!(stats.clients, 0);
}

#[tokio::test]
async fn create_client_posts_slug() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/clients"))
        .and(body_string_contains("\"slug\":\"acme-motors\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "client": { "id": "c1", "name": "Acme Motors", "slug": "acme-motors" }
        })))
        .mount(&server)
        .await;

    let client = HttpClientRepository::new(api)
        .create(&CreateClientRequest::new("Acme Motors", None, None))
        .await
        .unwrap();
    assert_eq!(client.id, "c1");
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let api = ApiClient::with_base_url("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let result = HttpRoleRepository::new(Arc::new(api)).list().await;
    assert!(matches!(result, Err(DomainError::Network(_))));
}

#[tokio::test]
async fn ids_with_reserved_characters_stay_in_their_segment() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/assets/a1/files/f9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/assets/a1%2Ffiles%2Ff9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/showrooms/s1%3Fx=1/assets/a%231"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "asset": { "id": "a#1", "name": "Key", "type": "credential" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    HttpAssetRepository::new(Arc::clone(&api))
        .delete("a1/files/f9")
        .await
        .unwrap();

    let asset = HttpShowroomRepository::new(api)
        .update_asset("s1?x=1", "a#1", &Default::default())
        .await
        .unwrap();
    assert_eq!(asset.id, "a#1");
}
