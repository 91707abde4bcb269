#[tokio::main]
async fn main() -> anyhow::Result<()> {
    glosor_terminal::run().await
}
