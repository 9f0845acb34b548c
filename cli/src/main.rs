use std::process::ExitCode;

use clap::Parser;
use memory_cli::{Cli, init_tracing, run};
use memory_embeddings::LocalProvider;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Arguments are checked before anything touches the model or the disk.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);
    let config = cli.config();

    run(
        &config,
        &cli.command,
        || LocalProvider::load(&config.model, &config.model_cache_dir),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await
    .into()
}
