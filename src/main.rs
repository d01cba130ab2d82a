use std::io::{self, BufRead, Write};

use env_logger::Env;
use log::{error, info};

use chess_session::board::{algebraic_to_square, encode};
use chess_session::collaborator::{MoveSelector, RandomMoveSelector, UciMoveSelector};
use chess_session::{GameDriver, Session, SessionConfig};

fn print_session(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", session.board())?;
    write!(out, "{}", session.status_label())?;
    if let Some(sq) = session.selection() {
        write!(out, " (selected {sq})")?;
    }
    writeln!(out)
}

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("CHESS_LOG", "info")).init();

    let config = match SessionConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let selector: Box<dyn MoveSelector> = match &config.engine_path {
        Some(path) => Box::new(UciMoveSelector::new(path.clone(), config.engine_args.clone())),
        None => {
            info!("no engine configured, opponent plays random moves");
            Box::new(RandomMoveSelector::new())
        }
    };
    let driver = GameDriver::new(&config, selector);
    driver.wait_for_opponent();

    if let Err(e) = run(&driver) {
        error!("terminal i/o failed: {e}");
    }
}

fn run(driver: &GameDriver<Box<dyn MoveSelector>>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_session(&mut out, &driver.snapshot())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" => break,
            "fen" => {
                let session = driver.snapshot();
                writeln!(out, "{}", encode(session.board(), session.side_to_move()))?;
                continue;
            }
            "moves" => {
                let session = driver.snapshot();
                let moves: Vec<String> = session
                    .board()
                    .legal_moves(session.side_to_move())
                    .iter()
                    .map(|(from, to)| format!("{from}{to}"))
                    .collect();
                writeln!(out, "{}", moves.join(" "))?;
                continue;
            }
            name => match algebraic_to_square(name) {
                Ok(sq) => {
                    driver.click(sq);
                    if driver.snapshot().awaiting_opponent() {
                        print_session(&mut out, &driver.snapshot())?;
                        driver.wait_for_opponent();
                    }
                }
                Err(e) => {
                    writeln!(out, "{e}; enter a square such as e2, or fen, moves, quit")?;
                    continue;
                }
            },
        }
        print_session(&mut out, &driver.snapshot())?;
    }
    Ok(())
}
