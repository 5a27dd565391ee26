use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use client_core::{GameClient, InputController};
use tracing::error;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:8700")]
    server_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let client = GameClient::new(args.server_url);
    let snapshot = client.fetch_game().await?;
    let mut controller = InputController::from_snapshot(&snapshot)?;

    print_board(&controller);
    println!("Type a word to submit it; :shuffle, :board, :new, :reveal, :quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            ":quit" | ":q" => break,
            ":shuffle" => {
                controller.shuffle(&mut rand::thread_rng());
                print_board(&controller);
            }
            ":board" => {
                print_board(&controller);
                print_progress(&controller);
            }
            ":new" => {
                match client.new_game().await {
                    Ok(snapshot) => {
                        controller.apply_snapshot(&snapshot)?;
                        println!("New game started.");
                        print_board(&controller);
                    }
                    Err(err) => {
                        error!(%err, "new game request failed");
                        println!("{}", client_core::TRANSPORT_FAILURE_MESSAGE);
                    }
                }
            }
            ":reveal" => match client.reveal().await {
                Ok(solutions) => {
                    println!(
                        "Solutions ({}): {}",
                        solutions.total,
                        solutions.words.join(", ")
                    );
                }
                Err(err) => {
                    error!(%err, "reveal request failed");
                    println!("{}", client_core::TRANSPORT_FAILURE_MESSAGE);
                }
            },
            _ => {
                *controller.buffer_mut() = trimmed.to_string();
                let Some(word) = controller.take_submission() else {
                    continue;
                };
                match client.submit(&word).await {
                    Ok(outcome) => controller.apply_verdict(&outcome),
                    Err(err) => {
                        error!(%err, "submit request failed");
                        controller.apply_transport_failure();
                    }
                }
                println!("{}", controller.message());
                print_progress(&controller);
            }
        }
    }

    Ok(())
}

fn print_board(controller: &InputController) {
    let board = controller.board();
    let outer = board.outer_glyphs();
    println!(
        "Letters: {} {} {} [{}] {} {} {}",
        outer[0],
        outer[1],
        outer[2],
        board.center_glyph(),
        outer[3],
        outer[4],
        outer[5],
    );
}

fn print_progress(controller: &InputController) {
    let found: Vec<String> = controller
        .found()
        .iter()
        .map(|entry| entry.display())
        .collect();
    println!(
        "Score: {}  Rating: {}  Found ({}): {}",
        controller.score_text(),
        controller.rating_text(),
        found.len(),
        found.join(", ")
    );
}
