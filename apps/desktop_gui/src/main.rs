mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use crossbeam_channel::bounded;
use ui::GameApp;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:8700")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded(256);

    backend_bridge::runtime::launch(cmd_rx, ui_tx, args.server_url);

    // Load the current board as soon as the worker comes up.
    let _ = cmd_tx.send(BackendCommand::FetchGame);

    eframe::run_native(
        "Hexbee",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(GameApp::new(cmd_tx, ui_rx)))),
    )
}
