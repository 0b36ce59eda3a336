use photokeep_adapters::{HashMapUserDirectory, config};
use photokeep_auth_service::AuthService;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

/// Spawn the service on an ephemeral port with a fresh in-memory directory.
pub async fn spawn_app() -> TestApp {
    let directory = HashMapUserDirectory::new();
    let service = AuthService::new(directory);

    let listener = tokio::net::TcpListener::bind(config::test::APP_ADDRESS)
        .await
        .expect("Failed to bind test listener");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(service.run(listener));

    // Redirects are left to the caller so tests can observe them.
    let http_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build http client");

    TestApp {
        address,
        http_client,
    }
}

impl TestApp {
    pub async fn post_login(&self, email: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_register(&self, email: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }
}
