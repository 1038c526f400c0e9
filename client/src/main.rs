mod config;
mod input;
mod terminal_renderer;

use std::io::{self, BufRead};

use clap::Parser;
use tictactoe_common::config::ConfigManager;
use tictactoe_common::logger::{self, LogLevel};
use tictactoe_common::log;
use tictactoe_common::tictactoe::GameController;

use config::{Config, get_config_manager};
use input::{Command, HELP, parse_command};
use terminal_renderer::TerminalRenderer;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// YAML config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log engine decisions
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config: Config = match args.config.as_deref() {
        Some(path) => ConfigManager::from_yaml_file(path).get_config()?,
        None => get_config_manager().get_config()?,
    };

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.log_level()
    };
    logger::init_logger(prefix, level);

    let renderer = TerminalRenderer::new(io::stdout(), config.glyphs(), config.show_cell_hints);
    let mut controller = GameController::new(renderer, config.glyphs());

    println!("{}", HELP);
    controller.start();

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Place(index)) => {
                if let Err(e) = controller.handle_human_move(index) {
                    println!("{}", e);
                }
            }
            Ok(Command::Reset) => controller.handle_reset(),
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(message) => println!("{}", message),
        }
    }

    log!("Client shut down");

    Ok(())
}
