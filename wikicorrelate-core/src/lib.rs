pub mod correlate;
pub mod error;
pub mod finder;
pub mod report;
pub mod result;
pub mod title;

use colored::Colorize;

pub use correlate::{CorrelateOptions, execute_correlation};
pub use error::{CorrelateError, Result};
pub use finder::PathFinder;
pub use result::SearchResult;
pub use title::normalize_title;

pub fn print_banner() {
    let banner = r#"
 __        ___ _    _  ____                    _       _
 \ \      / (_) | _(_)/ ___|___  _ __ _ __ ___| | __ _| |_ ___
  \ \ /\ / /| | |/ / | |   / _ \| '__| '__/ _ \ |/ _` | __/ _ \
   \ V  V / | |   <| | |__| (_) | |  | | |  __/ | (_| | ||  __/
    \_/\_/  |_|_|\_\_|\____\___/|_|  |_|  \___|_|\__,_|\__\___|
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "  {} {}\n",
        "The Wikipedia Graph DFS Discovery Tool".bright_white().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
