//! Session store behavior against a stateful mock backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anang_api::ApiClient;
use anang_api::mock::{MockBackend, MockRequest, MockResponse};
use anang_auth::{AUTH_KEY, AuthError, FileStorage, MemoryStorage, SessionStorage, SessionStore, USER_KEY};
use anang_core::entities::Session;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Minimal account service: signup stores a password, login checks it.
fn account_backend() -> MockBackend {
    let accounts: Arc<Mutex<HashMap<String, String>>> = Arc::default();
    MockBackend::start(move |req: &MockRequest| {
        let body = req.json().unwrap_or_default();
        let email = body["email"].as_str().unwrap_or_default().to_lowercase();
        let password = body["password"].as_str().unwrap_or_default().to_string();
        let mut accounts = accounts.lock().unwrap();
        match (req.method.as_str(), req.path.as_str()) {
            ("POST", "/api/signup") => {
                if accounts.contains_key(&email) {
                    return MockResponse::detail(409, "Email already registered. Please log in.");
                }
                accounts.insert(email.clone(), password);
                MockResponse::ok(&json!({
                    "email": email, "business_name": "", "name": email.split('@').next(),
                    "progress": 1, "status": "approved", "is_verified": false
                }))
            }
            ("POST", "/api/login") => match accounts.get(&email) {
                Some(stored) if *stored == password => MockResponse::ok(&json!({
                    "email": email, "business_name": "", "name": email.split('@').next(),
                    "progress": 1, "status": "approved", "is_verified": false
                })),
                _ => MockResponse::detail(401, "Invalid credentials"),
            },
            _ => MockResponse::not_found(),
        }
    })
    .unwrap()
}

fn store(backend: &MockBackend, storage: Arc<dyn SessionStorage>) -> SessionStore {
    SessionStore::new(ApiClient::new(backend.base_url()), storage)
}

#[tokio::test]
async fn login_401_keeps_session_anonymous() {
    let backend = account_backend();
    let storage = Arc::new(MemoryStorage::new());
    let store = store(&backend, storage.clone());

    let err = store.login("nobody@b.ca", "secret1").await.unwrap_err();
    assert!(matches!(err, AuthError::Api(anang_api::ApiError::Auth { .. })));
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(store.current(), Session::Anonymous);
    assert!(storage.load(AUTH_KEY).unwrap().is_none());
}

#[tokio::test]
async fn signup_then_login_is_authenticated() {
    let backend = account_backend();
    let storage = Arc::new(MemoryStorage::new());
    let store = store(&backend, storage.clone());

    let session = store.signup("Sage@Cafe.ca", "secret1").await.unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().email, "sage@cafe.ca");

    store.logout().unwrap();
    assert_eq!(store.current(), Session::Anonymous);

    let again = store.login("sage@cafe.ca", "secret1").await.unwrap();
    assert!(again.is_authenticated());
    assert_eq!(store.current(), again);
}

#[tokio::test]
async fn empty_credentials_are_rejected_without_request() {
    let backend = account_backend();
    let store = store(&backend, Arc::new(MemoryStorage::new()));

    let err = store.login("  ", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
    assert_eq!(err.to_string(), "Email and password are required.");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn subscribers_see_login_and_logout() {
    let backend = account_backend();
    let store = store(&backend, Arc::new(MemoryStorage::new()));
    let mut rx = store.subscribe();

    store.signup("a@b.ca", "secret1").await.unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_authenticated());

    store.logout().unwrap();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), Session::Anonymous);
}

#[tokio::test]
async fn session_survives_restart_via_file_storage() {
    let backend = account_backend();
    let tmp = tempfile::TempDir::new().unwrap();

    let first = store(&backend, Arc::new(FileStorage::new(tmp.path())));
    first.signup("a@b.ca", "secret1").await.unwrap();
    let expected = first.current();

    let second = store(&backend, Arc::new(FileStorage::new(tmp.path())));
    assert_eq!(second.current(), expected);

    let files = FileStorage::new(tmp.path());
    assert!(files.load(USER_KEY).unwrap().is_some());

    second.logout().unwrap();
    assert!(files.load(AUTH_KEY).unwrap().is_none());
    assert!(files.load(USER_KEY).unwrap().is_none());
    assert_eq!(
        store(&backend, Arc::new(FileStorage::new(tmp.path()))).current(),
        Session::Anonymous
    );
}

#[tokio::test]
async fn failed_login_leaves_existing_session() {
    let backend = account_backend();
    let store = store(&backend, Arc::new(MemoryStorage::new()));
    let session = store.signup("a@b.ca", "secret1").await.unwrap();

    assert!(store.login("a@b.ca", "wrong-pw").await.is_err());
    assert_eq!(store.current(), session);
}

#[tokio::test]
async fn login_without_token_is_rejected() {
    let backend = MockBackend::start(|_: &MockRequest| {
        MockResponse::ok(&json!({ "user": { "id": "", "email": "", "name": "" }, "token": "" }))
    })
    .unwrap();
    let storage = Arc::new(MemoryStorage::new());
    let store = store(&backend, storage.clone());

    let err = store.login("a@b.ca", "secret1").await.unwrap_err();
    assert!(matches!(err, AuthError::Api(anang_api::ApiError::Decode(_))));
    assert_eq!(store.current(), Session::Anonymous);
    assert!(storage.load(AUTH_KEY).unwrap().is_none());
    assert!(storage.load(USER_KEY).unwrap().is_none());
}
