#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gamewatch::start_server().await
}
