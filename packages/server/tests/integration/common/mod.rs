use std::net::SocketAddr;

use reqwest::Client;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use serde_json::Value;

use server::config::{AppConfig, AuthConfig, CorsConfig, DatabaseConfig, ServerConfig};
use server::entity::{judge, team};
use server::state::AppState;
use server::utils::jwt::{self, TokenScope};

/// Secret shared between the test token mint and the spawned app.
const JWT_SECRET: &str = "test-secret-for-integration-tests";

pub mod routes {
    pub const ROUNDS: &str = "/admin/rounds";

    pub fn round(id: i32) -> String {
        format!("/admin/rounds/{id}")
    }

    pub const JUDGES: &str = "/admin/evaluation";
    pub const TEAMS: &str = "/admin/evaluation/teams";
    pub const ASSIGN: &str = "/admin/evaluation/assign";

    pub fn unassign(team_id: i32) -> String {
        format!("/admin/evaluation/unassign/{team_id}")
    }

    pub const JUDGE_STATISTICS: &str = "/admin/evaluation/statistics";
    pub const ALL_EVALUATIONS: &str = "/admin/evaluation/all";
    pub const PLATFORM_STATISTICS: &str = "/admin/statistics";

    pub const SUBMIT: &str = "/judge/team-evaluation/submit";
    pub const SAVE_DRAFT: &str = "/judge/team-evaluation/save-draft";
    pub const OWN_EVALUATIONS: &str = "/judge/team-evaluation";

    pub fn own_evaluation(team_id: i32) -> String {
        format!("/judge/team-evaluation/{team_id}")
    }
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Fresh in-memory SQLite per test. A single pooled connection keeps
        // the database alive for the lifetime of the app.
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1);
        let db = Database::connect(opts)
            .await
            .expect("Failed to connect to in-memory database");
        db.get_schema_registry("server::entity::*")
            .sync(&db)
            .await
            .expect("Failed to sync schema");
        server::seed::ensure_indexes(&db)
            .await
            .expect("Failed to create indexes");

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
            },
            auth: AuthConfig {
                jwt_secret: JWT_SECRET.to_string(),
            },
        };

        let state = AppState {
            db: db.clone(),
            config: app_config,
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Mint an admin-scope token the way the external auth service would.
    pub fn admin_token(&self) -> String {
        jwt::sign(JWT_SECRET, 1, "admin1", TokenScope::Admin).expect("Failed to sign admin token")
    }

    /// Mint a judge-scope token for an existing judge.
    pub fn judge_token(&self, judge_id: i32, username: &str) -> String {
        jwt::sign(JWT_SECRET, judge_id, username, TokenScope::Judge)
            .expect("Failed to sign judge token")
    }

    /// Insert a team directly; team provisioning lives outside this
    /// subsystem.
    pub async fn create_team(&self, team_name: &str, category: &str) -> i32 {
        let model = team::ActiveModel {
            team_name: Set(team_name.to_string()),
            email: Set(format!("{team_name}@example.com")),
            members: Set(serde_json::json!(["Alice", "Bob", "Chen"])),
            category: Set(category.to_string()),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.expect("Failed to insert team");
        inserted.id
    }

    /// Insert a judge directly; judge provisioning lives outside this
    /// subsystem.
    pub async fn create_judge(&self, username: &str, is_active: bool) -> i32 {
        let model = judge::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set("$argon2id$stub".to_string()),
            name: Set(format!("Judge {username}")),
            email: Set(format!("{username}@example.com")),
            expertise: Set(serde_json::json!(["fintech", "ai"])),
            is_active: Set(is_active),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        let inserted = model
            .insert(&self.db)
            .await
            .expect("Failed to insert judge");
        inserted.id
    }

    /// Assign a judge to a team via the API.
    pub async fn assign(&self, team_id: i32, judge_id: i32, admin_token: &str) {
        let res = self
            .post_with_token(
                routes::ASSIGN,
                &serde_json::json!({ "team_id": team_id, "judge_id": judge_id }),
                admin_token,
            )
            .await;
        assert_eq!(res.status, 200, "assign failed: {}", res.text);
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn put_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn patch_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .patch(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send PATCH request");

        TestResponse::from_response(res).await
    }

    pub async fn delete_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i32 {
        self.body["id"]
            .as_i64()
            .expect("response body should contain 'id'") as i32
    }
}
