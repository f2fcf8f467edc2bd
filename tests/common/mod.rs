use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Isolated home and working directory for one binary invocation
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub log_file: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let log_file = tmp.path().join("shopkeep.log");

        Self {
            _tmp: tmp,
            home,
            log_file,
        }
    }

    /// Write ~/.config/shopkeep/config.toml inside the isolated home
    pub fn write_config(&self, contents: &str) {
        let dir = self.home.join(".config").join("shopkeep");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), contents).expect("write config");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("shopkeep").expect("shopkeep binary");
        cmd.env("HOME", &self.home)
            .env_remove("GEMINI_API_KEY")
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("HTTPS_PROXY")
            .env_remove("ALL_PROXY")
            .env_remove("http_proxy")
            .env_remove("https_proxy")
            .env_remove("all_proxy")
            .current_dir(&self.home)
            .arg("--log-file")
            .arg(&self.log_file);
        cmd
    }
}

/// Catalog server answering `GET /api/products` exactly once
pub async fn catalog_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// Provider answering `POST /v1beta/openai/chat/completions` exactly once
pub async fn llm_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/openai/chat/completions"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

pub fn json_body(status: u16, body: &'static str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/json")
}

/// Config pointing both lookups at local mock servers
pub fn config_for(catalog: &MockServer, llm: &MockServer) -> String {
    format!(
        "[agent]\nbase_url = \"{}/v1beta/openai/\"\n\n[catalog]\nurl = \"{}/api/products\"\n",
        llm.uri(),
        catalog.uri()
    )
}
