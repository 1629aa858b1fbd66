use std::process;
use unimported::{
    cli::{Args, Command},
    logger::init_logger,
};

fn main() {
    let args = Args::parse_args();

    init_logger(args.verbose, args.quiet, args.no_colors);
    tracing::debug!("unimported v{}", unimported::VERSION);

    let command = Command::from_args(args);
    process::exit(command.run());
}
