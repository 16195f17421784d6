#[tokio::main]
async fn main() -> std::io::Result<()> {
    axiom_server::run_with_config().await
}
