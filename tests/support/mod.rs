// One shared simulation server per integration-test binary.
use axiom_server::ServerSettings;
use axiom_server::use_cases::GenerationSettings;
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

// Fixed world so every run sees the same map and units.
pub const WORLD_WIDTH: usize = 96;
pub const WORLD_HEIGHT: usize = 96;
const WORLD_SEED: u64 = 7;
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

/// Starts the server on first use and returns its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);

        // A dedicated OS thread and runtime, so the server outlives each `#[tokio::test]` runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));

                let settings = ServerSettings {
                    generation: GenerationSettings {
                        width: WORLD_WIDTH,
                        height: WORLD_HEIGHT,
                        seed: WORLD_SEED,
                    },
                    tick_interval: TICK_INTERVAL,
                };
                axiom_server::run(listener, settings)
                    .await
                    .expect("server failed");
            });
        });

        wait_until_accepting(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

fn wait_until_accepting(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };
    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
