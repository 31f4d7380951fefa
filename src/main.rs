//! Random self-play demo driver.
//!
//! Plays both sides with the random engine, one decision at a time, printing
//! each applied move and the adjudicated status until checkmate, a dead end,
//! or the ply cap. Exercises the full query/apply/status surface end to end.

use arbiter_chess::engines::engine_random::RandomEngine;
use arbiter_chess::engines::engine_trait::Engine;
use arbiter_chess::game_state::GameState;
use arbiter_chess::move_generation::check_status::{inspect_check_status, CheckStatus};
use arbiter_chess::move_generation::legal_move_apply::apply_move_to_game_unchecked;
use arbiter_chess::piece_team::PieceTeam;
use arbiter_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: u16 = 300;

fn team_label(team: PieceTeam) -> &'static str {
    match team {
        PieceTeam::Light => "Light",
        PieceTeam::Dark => "Dark",
    }
}

fn main() {
    let started = chrono::Local::now();
    println!(
        "arbiter_chess random self-play, started {}",
        started.format("%Y-%m-%d %H:%M:%S")
    );

    let mut game = GameState::new_game();
    let mut engine = RandomEngine::new();
    engine.new_game();

    for ply in 1..=MAX_PLIES {
        let Some(chosen) = engine.choose_move(&game) else {
            // draw adjudication is out of scope; just report the dead end
            println!("no legal move available for {}", team_label(game.turn));
            break;
        };
        println!(
            "ply {:3}: {} {:?} {:?} -> {:?}",
            ply,
            team_label(game.turn),
            chosen.piece.class,
            chosen.start,
            chosen.stop
        );

        game = match apply_move_to_game_unchecked(&game, &chosen) {
            Ok(next) => next,
            Err(error) => {
                eprintln!("engine produced an unusable move: {:?}", error);
                return;
            }
        };

        match inspect_check_status(&game, game.turn) {
            CheckStatus::Checkmate => {
                println!("checkmate, {} wins", team_label(game.turn.opposite()));
                break;
            }
            CheckStatus::Check => println!("         {} is in check", team_label(game.turn)),
            CheckStatus::Clear => {}
        }
    }

    println!("{}", render_game_state(&game));
    println!(
        "finished {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}
