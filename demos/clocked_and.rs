//! Clocked AND-gate demo.
//!
//! Runs the classic sample topology — a clock on link 0 and two AND gates
//! over links {0, 1} driving link 2 — on the background driver thread while
//! the main thread polls status, the same shape as the original deployment's
//! one-second console loop.

use std::time::Duration;

use bitgrid::{Board, BoardConfig};

const SAMPLE: &str = r#"{
    "simulation": { "tick_interval_us": 50000 },
    "links": 3,
    "components": [
        { "type": "CLK", "CLK_Speed": 1, "inputs": [1], "outputs": [0] },
        { "type": "AND", "inputs": [0, 1], "outputs": [2] },
        { "type": "AND", "inputs": [0, 1], "outputs": [2] }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    bitgrid::init_logging("info");

    println!("==== Clocked AND demo ====");

    let config = BoardConfig::from_json(SAMPLE)?;
    let board = Board::new();
    board.init(&config)?;
    board.start()?;

    for _ in 0..6 {
        std::thread::sleep(Duration::from_millis(200));
        let status = board.status()?;
        let links: Vec<u8> = status.links.iter().map(|&level| level as u8).collect();
        println!("tick {:>4}  links {:?}", status.tick, links);
    }

    board.stop()?;

    println!("\nFinal status:\n{}", board.status()?.to_json()?);
    println!("\nStats:\n{}", serde_json::to_string_pretty(&board.export_stats())?);
    Ok(())
}
