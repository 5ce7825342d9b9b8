use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use colored::Colorize;
use tracing::info;

use mg_arcade::{Arcade, ArcadeConfig};

pub fn run(
    seed: Option<u64>,
    words: Option<PathBuf>,
    champions: Option<PathBuf>,
    instant: bool,
) -> Result<(), String> {
    let mut config = ArcadeConfig::default()
        .with_words(super::word_source(words))
        .with_champions(super::champion_source(champions));
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if instant {
        config = config.with_instant_timers();
    }

    let mut arcade = Arcade::new(config);

    println!("  {} Minigame Arcade", "Starting".bold());
    if let Some(seed) = seed {
        println!("  Seed: {seed}");
    }
    println!("  Type 'games' to see what's on, 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match arcade.process(input) {
            Ok(reply) => {
                if !reply.text.is_empty() {
                    println!("{}\n", reply.text);
                }
                if let Some(timer) = reply.timer {
                    thread::sleep(timer.delay());
                    match arcade.fire(timer) {
                        Ok(text) => println!("{text}\n"),
                        Err(e) => println!("{}\n", e.to_string().yellow()),
                    }
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    info!(score = %arcade.score(), "session ended");
    println!("  Final score: {}", arcade.score().to_string().bold());
    Ok(())
}
