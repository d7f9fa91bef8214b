use tokio::runtime::Runtime;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A local HTTP server answering every GET with a fixed HTML page
///
/// The server runs on its own multi-threaded runtime so blocking clients can
/// call it from plain `#[test]` functions.
pub struct TestSite {
    // Dropped before the runtime that drives it
    server: MockServer,
    _runtime: Runtime,
}

impl TestSite {
    pub fn serve(status: u16, html: &str) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();

        let body = html.to_string();
        let server = runtime.block_on(async move {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status).set_body_raw(body, "text/html"))
                .mount(&server)
                .await;
            server
        });

        Self {
            server,
            _runtime: runtime,
        }
    }

    /// Root URL of the site, e.g. `http://127.0.0.1:41234/`
    pub fn url(&self) -> String {
        format!("{}/", self.server.uri())
    }
}
