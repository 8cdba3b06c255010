use commands::command_argument_builder;
use harmwatch::handlers;
use harmwatch_core::print_banner;

mod commands;

pub use harmwatch::CLAP_STYLING;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("init", primary_command)) => handlers::handle_init(primary_command),
        Some(("classify", primary_command)) => handlers::handle_classify(primary_command).await,
        Some(("report", primary_command)) => handlers::handle_report(primary_command),
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
