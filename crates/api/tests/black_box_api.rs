use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = shaper_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn get_json(client: &reqwest::Client, url: String) -> (StatusCode, Value) {
    let res = client.get(url).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn root_and_status_example() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, srv.url("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello World"}));

    let (status, body) = get_json(&client, srv.url("/status_code_example/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response_status": "OK"}));
}

#[tokio::test]
async fn path_binding() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, srv.url("/items/123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"item_id": 123}));

    let (status, body) = get_json(&client, srv.url("/items/abc")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["path", "item_id"]));

    let at_limit = "a".repeat(50);
    let (status, body) = get_json(&client, srv.url(&format!("/users/{at_limit}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], at_limit);

    let (status, _) = get_json(&client, srv.url(&format!("/users/{}", "a".repeat(51)))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn transport_ordinals() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (ordinal, name) in [(1, "car"), (2, "motorbike"), (3, "bicycle")] {
        let (status, body) =
            get_json(&client, srv.url(&format!("/users/transport/{ordinal}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"transport": name}));
    }

    let (status, body) = get_json(&client, srv.url("/users/transport/4")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn every_filtering_route_hides_the_password() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let input = json!({"id": "u1", "name": "Alice", "age": 30, "password": "secret"});

    for route in ["return_model", "type_annotation", "explicit_exclusion"] {
        let url = srv.url(&format!("/filtering/{route}"));

        for req in [client.get(&url), client.post(&url)] {
            let res = req.json(&input).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::OK, "{route}");
            let body: Value = res.json().await.unwrap();
            assert_eq!(body, json!({"id": "u1", "name": "Alice", "age": 30}), "{route}");
        }

        let res = client
            .post(&url)
            .json(&json!({"id": "u2", "name": "Bob", "password": "pw"}))
            .send()
            .await
            .unwrap();
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["age"], 18, "{route}");
        assert!(body.get("password").is_none(), "{route}");

        let res = client
            .post(&url)
            .json(&json!({"id": "u3", "name": "Eve"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY, "{route}");
    }
}

#[tokio::test]
async fn body_record_echo() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let record = json!({"id": "b1", "name": "box", "attr1": "red", "attr2": 2});

    let res = client.post(srv.url("/items/")).json(&record).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"body": record}));

    // attr1 may be null but must be present.
    let res = client
        .post(srv.url("/items/"))
        .json(&json!({"id": "b1", "name": "box", "attr2": 2}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
