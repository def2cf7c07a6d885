use clap::Parser;

fn main() {
    let cli = aps::cli::Cli::parse();

    if let Err(err) = aps::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
