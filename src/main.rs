use anyhow::Result;
use keibot::engine::Engine;
use std::io::{self, BufRead};
use std::ops::ControlFlow;

mod umi;
use umi::command::parse_command;
use umi::protocol::handle_command;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let input = line?;

        if let Some(cmd) = parse_command(&input) {
            match handle_command(&cmd, &mut engine) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(err) => {
                    if engine.options.strict_mode {
                        return Err(err);
                    }
                    eprintln!("error: {:#}", err);
                }
            }
        }
    }

    Ok(())
}
