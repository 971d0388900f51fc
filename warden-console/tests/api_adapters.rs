use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use warden_console::infrastructure::api_client::ApiClient;
use warden_console::infrastructure::services::session::{SessionApiAdapter, SessionService};
use warden_console::infrastructure::services::user_management::{
    UserAdminApiAdapter, UserAdminService,
};
use warden_model::{UserDraft, UserId, roles};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(server.uri(), Duration::from_secs(5)).unwrap())
}

#[tokio::test]
async fn list_users_unwraps_envelope_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": [
                {"id": "1", "name": "Ann", "team": "core"},
                {"id": "2", "name": "Bo"}
            ]
        })))
        .mount(&server)
        .await;

    let adapter = UserAdminApiAdapter::new(client_for(&server));
    let users = adapter.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Ann");
    assert_eq!(users[0].extra.get("team"), Some(&json!("core")));
    assert_eq!(users[1].id, UserId::new("2"));
}

#[tokio::test]
async fn server_error_text_becomes_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/users"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "status": "error",
            "error": "database offline"
        })))
        .mount(&server)
        .await;

    let adapter = UserAdminApiAdapter::new(client_for(&server));
    let err = adapter.list_users().await.unwrap_err();
    assert_eq!(err.to_string(), "database offline");
}

#[tokio::test]
async fn plain_error_body_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/users/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such user"))
        .mount(&server)
        .await;

    let adapter = UserAdminApiAdapter::new(client_for(&server));
    let err = adapter.delete_user(UserId::new("9")).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("no such user"), "{message}");
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/users/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = UserAdminApiAdapter::new(client_for(&server));
    adapter.delete_user(UserId::new("1")).await.unwrap();
}

#[tokio::test]
async fn delete_sends_id_as_single_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/users/7%2F..%2F2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/users/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let adapter = UserAdminApiAdapter::new(client_for(&server));
    adapter.delete_user(UserId::new("7/../2")).await.unwrap();
}

#[tokio::test]
async fn delete_rejects_dot_segment_ids_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let adapter = UserAdminApiAdapter::new(client_for(&server));
    assert!(adapter.delete_user(UserId::new("..")).await.is_err());
}

#[tokio::test]
async fn create_posts_draft_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/admin/users"))
        .and(header("authorization", "Bearer t0ken"))
        .and(body_json(json!({"name": "Dee", "role": "manager"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"id": "srv-1", "name": "Dee", "role": "manager"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Duration::from_secs(5))
        .unwrap()
        .with_token("t0ken");
    let adapter = UserAdminApiAdapter::new(Arc::new(client));

    let draft = UserDraft::default().with_name("Dee").with_role(roles::MANAGER);
    let user = adapter.create_user(draft).await.unwrap();
    assert_eq!(user.id.as_str(), "srv-1");
}

#[tokio::test]
async fn missing_data_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .mount(&server)
        .await;

    let adapter = UserAdminApiAdapter::new(client_for(&server));
    let err = adapter.list_users().await.unwrap_err();
    assert_eq!(err.to_string(), "Empty response from server");
}

#[tokio::test]
async fn current_actor_resolves_and_401_means_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"user_id": "1", "username": "ann", "roles": ["admin"]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let signed_in = SessionApiAdapter::new(Arc::new(
        ApiClient::new(server.uri(), Duration::from_secs(5))
            .unwrap()
            .with_token("good"),
    ));
    let actor = signed_in.current_actor().await.unwrap().unwrap();
    assert_eq!(actor.username, "ann");
    assert!(actor.has_role(roles::ADMIN));

    let anonymous = SessionApiAdapter::new(client_for(&server));
    assert!(anonymous.current_actor().await.unwrap().is_none());
}
