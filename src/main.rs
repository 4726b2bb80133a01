use anyhow::{Context, Result};
use menagerie_arbiter::{Match, MatchConfig, Status};
use menagerie_core::STARTING_FEN;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let fen = std::env::args().nth(1).unwrap_or_else(|| STARTING_FEN.to_string());
    info!(%fen, "menagerie starting");

    let game = Match::new(&fen, MatchConfig::default())
        .with_context(|| format!("failed to load position \"{fen}\""))?;
    let position = game.position();

    println!("{}", position.pretty());
    println!();
    println!("fen:         {game}");
    println!("to move:     {}", position.side_to_move());
    println!("in check:    {}", position.in_check());
    println!("legal moves: {}", position.legal_moves().len());

    match game.status() {
        Status::InProgress => println!("status:      in progress"),
        Status::AwaitingPromotion(sq) => println!("status:      promotion pending on {sq}"),
        Status::Decided(result) => println!("status:      {result}"),
    }

    info!(status = ?game.status(), "done");
    Ok(())
}
