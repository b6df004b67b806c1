#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    seminars_ui::run().await
}
