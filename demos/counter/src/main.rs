//! Presage Counter Demo
//!
//! Walks the optimistic pipeline end to end:
//! - An increment applied optimistically, then confirmed
//! - A decrement applied optimistically, then rejected and rolled back
//! - Overlapping in-flight actions settling out of order

use std::sync::Arc;
use std::time::Duration;

use presage_core::Message;
use presage_engine::ReconciliationEngine;
use presage_test::{
    counter_reducer, counter_store, CounterAction, CounterState, DelayedResolver, Outcome,
    ResolverConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Presage Optimistic Counter Demo ===\n");

    // 1. Driving the engine by hand
    println!("1. Manual reconciliation");

    let mut engine = ReconciliationEngine::new(
        counter_reducer as fn(CounterState, &CounterAction) -> CounterState,
    );
    let (message, handle) = Message::optimistic(CounterAction::Increment);
    let state = engine.reduce(CounterState::default(), message)?;
    println!("   optimistic:  count = {}", state.count);
    println!("   status:      {:?}", handle.status());

    handle.resolve_success();
    let state = engine.reduce(state, Message::from(handle.clone()))?;
    println!("   confirmed:   count = {} (unchanged)", state.count);
    println!("   status:      {:?}", handle.status());

    // 2. A store with a delayed resolver: the async shape
    println!("\n2. Store with delayed resolutions");

    let store = counter_store();
    let resolver = DelayedResolver::with_config(
        Arc::clone(&store),
        |action: &CounterAction| match action {
            CounterAction::Increment => Outcome::Confirm,
            CounterAction::Decrement => Outcome::Reject,
        },
        ResolverConfig {
            delay: Duration::from_millis(200),
        },
    );

    let optimistic = resolver.submit(CounterAction::Increment)?;
    println!("   after optimistic increment: count = {}", optimistic.count);
    println!("   in flight: {}", store.pending_len());

    tokio::time::sleep(Duration::from_millis(400)).await;
    println!(
        "   after confirmation:         count = {} (in flight: {})",
        store.state().count,
        store.pending_len()
    );

    // 3. Rejection rolls the prediction back
    println!("\n3. Rejected decrement");

    let optimistic = resolver.submit(CounterAction::Decrement)?;
    println!("   after optimistic decrement: count = {}", optimistic.count);

    tokio::time::sleep(Duration::from_millis(400)).await;
    println!(
        "   after rejection:            count = {} (rolled back)",
        store.state().count
    );

    // 4. Overlapping actions
    println!("\n4. Overlapping in-flight actions");

    resolver.submit(CounterAction::Increment)?;
    resolver.submit(CounterAction::Decrement)?;
    resolver.submit(CounterAction::Increment)?;
    println!("   optimistic projection:      count = {}", store.state().count);

    tokio::time::sleep(Duration::from_millis(400)).await;
    println!(
        "   after settlement:           count = {} (rejection excised)",
        store.state().count
    );

    Ok(())
}
