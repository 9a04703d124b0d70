#[tokio::main]
async fn main() -> anyhow::Result<()> {
    safeguard_server::start().await
}
