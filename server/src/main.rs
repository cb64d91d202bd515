#[tokio::main]
async fn main() {
    optout::start_server().await;
}
