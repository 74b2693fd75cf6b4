use clap::Parser;
use collect_code::{CollectError, Config, cli::Cli, logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = Config::discover().and_then(|config| run(&config));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run failed: {e:?}");
            match e.downcast_ref::<CollectError>() {
                Some(err) => eprintln!("Error: {err}"),
                None => eprintln!("An unexpected error occurred: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
