use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use crate::helper::spawn_app;

fn items(n: usize) -> serde_json::Value {
    serde_json::Value::Array((0..n).map(|i| serde_json::json!({ "id": i })).collect())
}

#[tokio::test]
async fn github_counts_issues_and_pulls() {
    let app = spawn_app().await;

    Mock::given(path("/repos/freecodecamp/freecodecamp/pulls"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items(4)))
        .expect(1)
        .mount(&app.github_server)
        .await;
    Mock::given(path("/repos/freecodecamp/freecodecamp/issues"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items(30)))
        .expect(1)
        .mount(&app.github_server)
        .await;

    let res = app.get("/api/github").await;
    assert_eq!(200, res.status().as_u16());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "issues": 26, "pulls": 4 }));
}

#[tokio::test]
async fn github_unavailable_returns_sentinels() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&app.github_server)
        .await;

    let res = app.get("/api/github").await;
    assert_eq!(200, res.status().as_u16());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "issues": "Can't connect to GitHub",
            "pulls": "Can't connect to github",
        })
    );
}
