use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match ai_cli_tool::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ai_cli_tool::render_error(&err));
            ExitCode::FAILURE
        }
    }
}
