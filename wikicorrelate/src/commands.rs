use clap::{arg, command};
use url::Url;
use wikicorrelate_scanner::DEFAULT_BASE_URL;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("wikicorrelate")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wikicorrelate")
        .about("The Wikipedia Graph DFS Discovery Tool")
        .styles(CLAP_STYLING)
        .subcommand_negates_reqs(true)
        .arg(
            arg!(-q --"quiet" "Suppress banner and non-essential output")
                .required(false)
                .global(true),
        )
        .arg(arg!(<SOURCE> "Title of the article to start from"))
        .arg(arg!(<DESTINATION> "Title of the article to reach"))
        .arg(
            arg!(<HOPS> "Maximum number of intermediate articles to pass through")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(<MSG_LEVEL> "Log articles expanded at this depth or shallower (0 disables)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(<TIMEOUT> "Page fetch timeout in seconds")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--"base-url" <URL>)
                .required(false)
                .help("Wiki host to search")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_BASE_URL)
                .global(true),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Save report to file (default: display to screen)"),
        )
        .subcommand(
            command!("ui").about("Open the interactive correlation form in the terminal"),
        )
}
