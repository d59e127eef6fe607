use edulink_ai_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("edulink-ai service failed: {err}");
        std::process::exit(1);
    }
}
