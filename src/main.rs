#[tokio::main]
async fn main() {
    if let Err(e) = table_reservation_backend::run().await {
        eprintln!("reservation service failed: {}", e);
        std::process::exit(1);
    }
}
