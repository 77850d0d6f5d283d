use rendezvous::graphql::{bind, build_schema, serve};
use rendezvous::store::StoreHandle;
use serde_json::{Value, json};

async fn start() -> String {
    let listener = bind("127.0.0.1", 0).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let schema = build_schema(StoreHandle::default());
    tokio::spawn(async move {
        let _ = serve(listener, schema).await;
    });
    format!("http://{}/", addr)
}

async fn post_graphql(client: &reqwest::Client, url: &str, query: &str) -> Value {
    let response = client
        .post(url)
        .json(&json!({ "query": query }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn test_post_executes_graphql() {
    let url = start().await;
    let client = reqwest::Client::new();

    let body = post_graphql(
        &client,
        &url,
        r#"mutation { addUser(data: { username: "ann", email: "a@x.com" }) { username } }"#,
    )
    .await;
    assert_eq!(body["data"]["addUser"]["username"], "ann");

    let body = post_graphql(&client, &url, "{ users { email } }").await;
    assert_eq!(body["data"]["users"], json!([{ "email": "a@x.com" }]));
}

#[tokio::test]
async fn test_post_reports_not_found() {
    let url = start().await;
    let client = reqwest::Client::new();

    let body = post_graphql(&client, &url, r#"mutation { deleteUser(id: "ghost") { id } }"#).await;
    assert_eq!(body["errors"][0]["message"], "User not found: ghost");
}

#[tokio::test]
async fn test_get_serves_graphiql() {
    let url = start().await;

    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let page = response.text().await.unwrap();
    assert!(page.to_lowercase().contains("graphiql"), "{}", page);
}
