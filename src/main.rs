use create_my_app::{
    cli::{get_log_level_from_verbose, parse_cli, print_outcome, run},
    error::default_error_handler,
};

fn main() {
    let args = parse_cli();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    match run(args) {
        Ok(outcome) => print_outcome(&outcome),
        Err(err) => default_error_handler(err),
    }
}
