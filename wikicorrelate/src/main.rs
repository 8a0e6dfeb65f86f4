use wikicorrelate::commands::command_argument_builder;
use wikicorrelate::handlers::{handle_correlate, options_from_matches};
use wikicorrelate_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    // --quiet is global, so it may sit on either side of `ui`
    let quiet = chosen_command.get_flag("quiet")
        || chosen_command
            .subcommand()
            .is_some_and(|(_, sub)| sub.get_flag("quiet"));

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        Some(("ui", primary_command)) => {
            let defaults = options_from_matches(primary_command);
            if let Err(e) = wikicorrelate_tui::run(defaults) {
                eprintln!("Error running TUI: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => unreachable!("clap should ensure we don't get here"),
        None => handle_correlate(&chosen_command).await,
    }
}
