mod config;
mod ui;

use clap::Parser;
use common::{log, log_warn, logger};

use config::{ClientConfig, DEFAULT_CONFIG_PATH, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_warn!("Using default config: {}", e);
            ClientConfig::default()
        }
    };
    log!("Loaded config from {}: {:?}", args.config, config);

    let board_side = config.cell_size * 3.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_side + 80.0, board_side + 200.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(config, config_manager)))),
    )?;

    Ok(())
}
