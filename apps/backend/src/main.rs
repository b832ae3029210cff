#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hebrew_practice_backend::run().await
}
