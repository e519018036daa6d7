//! Console Game
//!
//! Drives a full game against the engine with a presenter that prints
//! instead of drawing and playing sound. The "player" answers three rounds
//! correctly and then presses a wrong pad.
//!
//! Key concepts:
//! - Presenter trait as the boundary to rendering and audio
//! - Seeded note generation for a reproducible game
//! - Waiting for playback to finish before answering
//!
//! Run with: cargo run --example console_game

use simon_engine::config::GameConfig;
use simon_engine::engine::GameEngine;
use simon_engine::env::{Presenter, RandomNotes, ScreenTransition};
use simon_engine::Judgment;
use std::time::Duration;

struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn play_tone(&self, pitch: f32) {
        println!("  [Tone] pitch x{pitch:.1}");
    }

    fn trigger_transition(&self, transition: ScreenTransition) {
        println!("  [Screen] {transition:?}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Console Game Example ===\n");

    let config = GameConfig::builder()
        .note_delay(Duration::from_millis(300))
        .input_delay(Duration::from_millis(150))
        .build()?;
    let engine = GameEngine::new(config, ConsolePresenter, RandomNotes::seeded(2024))?;

    engine.start();

    for _ in 0..3 {
        let snapshot = engine.wait_for_input().await;
        println!("Round {}: repeat {} notes", snapshot.round, snapshot.sequence_len);

        for note in engine.sequence() {
            let judgment = engine.submit_note(note.value())?;
            println!("  pressed {note} -> {judgment:?}");
        }
        println!();
    }

    engine.wait_for_input().await;
    let first = engine.sequence()[0].value();
    let wrong = (first + 1) % engine.config().note_count;
    println!("Pressing {wrong} instead of {first}...");

    if engine.submit_note(wrong)? == Judgment::Lost {
        println!("\n  Game over after reaching round {}", engine.best_round());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
