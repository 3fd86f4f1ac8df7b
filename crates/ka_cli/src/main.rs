//! Kickabout CLI
//!
//! Terminal stand-in for a graphical presentation layer. It translates typed
//! commands into core intents, obeys the timer start/stop commands, and
//! prints snapshots after every mutation. `script` mode pipes raw JSON
//! intents straight through the core's JSON API instead.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ka_core::{
    apply_intent_json, pixel_to_percent, Coordinate, MatchState, SurfaceRect, TickTimer,
    TimerCommand,
};

/// Pixel rectangle the interactive mode pretends the pitch is rendered in.
/// Used by the `clickpx` command to exercise the pixel translation path.
const PLAY_SURFACE: SurfaceRect = SurfaceRect { left: 0.0, top: 0.0, width: 800.0, height: 600.0 };

#[derive(Parser)]
#[command(name = "ka_cli")]
#[command(about = "Drive a kickabout match from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: read commands from stdin, print state after each
    Play,

    /// Read newline-delimited JSON intents from stdin, print JSON responses
    Script,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play => run_play(),
        Commands::Script => run_script(),
    }
}

// ============================================================
// Interactive mode
// ============================================================

const HELP: &str = "\
commands:
  select <id>        select a player (h1-h4, a1-a4)
  click <x> <y>      click the pitch at percent coordinates
  clickpx <px> <py>  click at pixel coordinates on an 800x600 surface
  toggle             start/pause the match
  tick [n]           deliver n one-second ticks (default 1)
  reset              back to kick-off
  show               print the current state
  quit";

fn run_play() -> Result<()> {
    let mut state = MatchState::new();
    let mut timer = TickTimer::new();
    let stdin = io::stdin();

    println!("kickabout v{} - type 'help' for commands", ka_core::VERSION);
    print_state(&state);

    let mut out = io::stdout();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        let result = match words.as_slice() {
            [] => continue,
            ["quit"] | ["q"] => break,
            ["help"] => {
                println!("{}", HELP);
                continue;
            }
            ["show"] => {
                print_state(&state);
                continue;
            }
            ["select", id] => state.select_player(id).map_err(Into::into),
            ["click", x, y] => parse_pair(x, y).and_then(|(x, y)| {
                state.field_clicked(Coordinate::new(x, y)).map_err(Into::into)
            }),
            ["clickpx", px, py] => parse_pair(px, py).and_then(|pixel| {
                let target = pixel_to_percent(pixel, &PLAY_SURFACE);
                state.field_clicked(target).map_err(Into::into)
            }),
            ["toggle"] => {
                state.toggle_running();
                Ok(())
            }
            ["tick"] => {
                state.tick();
                Ok(())
            }
            ["tick", n] => n
                .parse::<u32>()
                .context("tick count must be a number")
                .map(|n| (0..n).for_each(|_| state.tick())),
            ["reset"] => {
                state.reset();
                Ok(())
            }
            _ => {
                println!("unknown command, try 'help'");
                continue;
            }
        };

        if let Err(err) = result {
            println!("error: {}", err);
            continue;
        }

        // Keep the host timer paired with the running flag
        match timer.sync(state.is_running()) {
            Some(TimerCommand::Start) => println!("[timer] interval armed"),
            Some(TimerCommand::Stop) => println!("[timer] interval cancelled"),
            None => {}
        }

        for event in state.drain_events() {
            println!("GOAL! {} team scores at {}s", event.team.as_str(), event.at_seconds);
        }
        print_state(&state);
    }

    Ok(())
}

fn parse_pair(x: &str, y: &str) -> Result<(f32, f32)> {
    let x = x.parse::<f32>().context("x must be a number")?;
    let y = y.parse::<f32>().context("y must be a number")?;
    Ok((x, y))
}

fn print_state(state: &MatchState) {
    let snapshot = state.snapshot();
    println!(
        "{}-{} | {:02}:{:02} | {} | ball ({:.1}, {:.1})",
        snapshot.score.home,
        snapshot.score.away,
        snapshot.clock_seconds / 60,
        snapshot.clock_seconds % 60,
        if snapshot.running { "running" } else { "paused" },
        snapshot.ball.x,
        snapshot.ball.y,
    );
    for player in &snapshot.players {
        println!(
            "  {}{} {:>4} ({:5.1}, {:5.1})",
            if player.selected { "*" } else { " " },
            player.id,
            player.team.as_str(),
            player.position.x,
            player.position.y,
        );
    }
}

// ============================================================
// Script mode
// ============================================================

fn run_script() -> Result<()> {
    let mut state = MatchState::new();
    let stdin = io::stdin();
    let mut out = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read intent line")?;
        if line.trim().is_empty() {
            continue;
        }
        match apply_intent_json(&mut state, &line) {
            Ok(response) => writeln!(out, "{}", response)?,
            Err(err) => writeln!(out, "{}", serde_json::json!({ "error": err.to_string() }))?,
        }
    }

    Ok(())
}
