//! Traffic Light Automaton
//!
//! This example demonstrates a simple cyclic automaton.
//!
//! Key concepts:
//! - Declaring events with the fluent builder
//! - Default initial and accepting states
//! - Rejected transitions leave the state untouched
//! - Rendering the transition table
//!
//! Run with: RUST_LOG=trace cargo run --example traffic_light

use automaton::builder::AutomatonBuilder;
use automaton::core::Event;
use automaton::runtime::Automaton;
use automaton::state_enum;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

fn main() -> automaton::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Traffic Light Automaton ===\n");

    let light = AutomatonBuilder::new("TrafficLight")
        .default_initial_state(TrafficLight::Red)
        .default_accepting_states([TrafficLight::Red, TrafficLight::Green])
        .event("go", Event::new(TrafficLight::Red, TrafficLight::Green))
        .event("slowdown", Event::new(TrafficLight::Green, TrafficLight::Yellow))
        .event("stop", Event::new(TrafficLight::Yellow, TrafficLight::Red))
        .build()?;

    println!("{:<8}  {:<8}  {:<8}", "Source", "Dest", "Event");
    for row in light.transition_table() {
        println!(
            "{:<8}  {:<8}  {:<8}",
            format!("{:?}", row.source),
            format!("{:?}", row.dest),
            row.event
        );
    }
    println!();

    let mut crossroads = Automaton::new(&light)?;
    println!("Initial: {crossroads} (accepted: {})", crossroads.is_accepted());

    for event in ["go", "stop", "slowdown", "stop"] {
        match crossroads.event(event) {
            Ok(_) => println!("{event:<9} -> {crossroads} (accepted: {})", crossroads.is_accepted()),
            Err(err) => println!("{event:<9} rejected: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
