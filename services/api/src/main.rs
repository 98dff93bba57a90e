use tasador_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("tasador-api: {err}");
        std::process::exit(1);
    }
}
