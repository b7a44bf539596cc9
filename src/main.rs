use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = lifelink::run().await {
        eprintln!("lifelink: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
