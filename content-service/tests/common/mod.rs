#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use content_service::services::{InMemoryContentStore, MockCompletionProvider};
use content_service::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryContentStore>,
    pub completion: Arc<MockCompletionProvider>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_completion(MockCompletionProvider::replying("Hello from the stub"))
    }

    pub fn with_completion(completion: MockCompletionProvider) -> Self {
        let store = Arc::new(InMemoryContentStore::new());
        let completion = Arc::new(completion);

        let router = build_router(AppState {
            store: store.clone(),
            completion: completion.clone(),
        });

        Self {
            router,
            store,
            completion,
        }
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, "application/json", body.to_string()).await
    }

    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: &str,
        body: impl Into<Body>,
    ) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, content_type)
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get_text(uri).await;
        (status, serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A representative valid record for each resource route.
pub fn sample_record(resource: &str, n: usize) -> Value {
    match resource {
        "features" | "voicefeatures" | "testimonials" => serde_json::json!({
            "title": format!("{} {}", resource, n),
            "description": "Fast and friendly",
            "image": "/img/card.png"
        }),
        "chatfeatures" => serde_json::json!({
            "sectionTitle": format!("Chat {}", n),
            "sectionSubtitle": "Talk to us",
            "features": [
                { "title": "Instant", "description": "Replies in seconds", "image": "/img/a.png" },
                { "title": "Smart", "description": "Understands context", "image": "/img/b.png" }
            ]
        }),
        "rankings" => serde_json::json!({
            "rank": n,
            "name": format!("Player {}", n),
            "points": 1000 - n,
            "image": "/img/player.png"
        }),
        "userrankings" => serde_json::json!({
            "sectionTitle": format!("Leaderboard {}", n),
            "sectionDescription": "Top contributors",
            "image": "/img/board.png",
            "linkText": "See all",
            "linkPath": "/rankings"
        }),
        "participants" => serde_json::json!({
            "name": format!("Participant {}", n),
            "bio": "Builder",
            "image": "/img/p.png"
        }),
        "learnmore" => serde_json::json!({
            "title": format!("Learn more {}", n),
            "paragraphs": ["First paragraph", "Second paragraph"],
            "buttonText": "Start",
            "buttonPath": "/start",
            "image": "/img/learn.png"
        }),
        other => panic!("no sample for resource {}", other),
    }
}
