use clap::Parser;
use incpath::cli;

fn main() {
    let cli = cli::Cli::parse();
    let check = cli.check;

    match cli::run(cli) {
        Ok(summary) => {
            if check && summary.changed > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
