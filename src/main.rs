#[tokio::main]
async fn main() -> std::io::Result<()> {
    invaders_server::run_with_config().await
}
