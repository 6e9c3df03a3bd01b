//! UMI protocol implementation

use std::io::{self, Write};
use std::ops::ControlFlow;

use anyhow::{bail, ensure, Context, Result};
use indoc::printdoc;
use keibot::{
    ai::SearchResult,
    core::{GameState, Loc, Move, MoveReport, Outcome},
    engine::{Engine, SearchOptions},
};

/// Handle a UMI command, breaking on `quit`
pub fn handle_command(cmd: &str, engine: &mut Engine) -> Result<ControlFlow<()>> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(ControlFlow::Continue(()));
    }

    match parts[0] {
        "umi" => {
            printdoc! {"
                id name keibot {version}
                option name boardsize type spin default 8 min 5 max 12
                option name firstmove type combo default red var red var blue
                option name difficulty type combo default easy var easy var normal var hard
                option name computer type combo default red var red var blue var none
                option name hints type check default true
                option name movebudget type string default none
                option name strictmode type check default false
                option name seed type string default <none>
                umiok
                ",
                version = env!("CARGO_PKG_VERSION"),
            };
        }
        "isready" => {
            println!("readyok");
        }
        "setoption" => {
            ensure!(parts.len() == 5 && parts[1] == "name" && parts[3] == "value",
                "invalid setoption command");

            engine.set_option(parts[2], parts[4])?;
        }
        "newgame" => {
            engine.new_game();
        }
        "position" => {
            ensure!(parts.len() >= 2, "position command requires at least 2 arguments");

            match parts[1] {
                "startpos" => {
                    engine.new_game();
                }
                "fen" if parts.len() >= 3 => {
                    let fen = parts[2..].join(" ");
                    engine.set_position(GameState::from_fen(&fen)?);
                }
                _ => bail!("invalid position command")
            }
        }
        "moves" => {
            ensure!(parts.len() == 2, "moves command takes one cell");
            let loc: Loc = parts[1].parse()?;

            print_locs("moves", &engine.hints(loc));
        }
        "move" => {
            let mv = Move::from_args(&parts[1..])?;
            let report = engine.play_move(mv)?;
            print_report(&report, engine);

            if engine.computer_to_move() {
                if let Some(report) = engine.play_computer(&SearchOptions::default())? {
                    println!("bestmove {}", report.mv);
                    print_report(&report, engine);
                }
            }
        }
        "go" => {
            let search_options = parts[1..].join(" ").parse::<SearchOptions>()?;
            let result = engine.go(&search_options);

            print_search(result.as_ref());
        }
        "play" => {
            let search_options = parts[1..].join(" ").parse::<SearchOptions>()?;
            let result = engine.go(&search_options);

            print_search(result.as_ref());

            if let Some(result) = result {
                let report = engine.play_move(result.best_move)?;
                print_report(&report, engine);
            }
        }
        "display" => {
            engine.display();
        }
        "getfen" => {
            println!("{}", engine.get_fen()?);
        }
        "quit" => {
            return Ok(ControlFlow::Break(()));
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    io::stdout().flush().context("failed to flush stdout")?;
    Ok(ControlFlow::Continue(()))
}

fn print_locs(prefix: &str, locs: &[Loc]) {
    let mut line = prefix.to_string();
    for loc in locs {
        line.push(' ');
        line.push_str(&loc.to_string());
    }
    println!("{}", line);
}

fn print_search(result: Option<&SearchResult>) {
    match result {
        Some(result) => {
            println!("info score {} eval {} nodes {} candidates {}",
                result.score, result.evaluation, result.nodes, result.candidates);
            println!("bestmove {}", result.best_move);
        }
        None => println!("bestmove none"),
    }
}

fn print_report(report: &MoveReport, engine: &Engine) {
    print_locs("info beads", &report.beads_placed);
    println!("info shield {}", report.shield);

    match report.outcome {
        Some(Outcome::Win { winner, cause }) => println!("info result {} {}", winner.name(), cause.tag()),
        Some(Outcome::Draw) => println!("info result draw"),
        None if engine.config.show_hints => {
            for (from, targets) in engine.all_hints() {
                print_locs(&format!("info hints {}", from), &targets);
            }
        }
        None => {}
    }
}
