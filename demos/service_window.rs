//! Service Window Session
//!
//! This example demonstrates a service-counter session driven entirely by
//! pure state transitions: customers arrive, get served, and every command
//! can be undone because past states are retained, not reconstructed.
//!
//! Key concepts:
//! - Persistent state - every command returns a new value, old ones stay valid
//! - Snapshot undo - one O(1) state reference per command
//! - Read-only views - the shell renders projections, never core internals
//!
//! Run with: cargo run --example service_window

use chrono::{DateTime, Duration, TimeZone, Utc};
use ventanilla::view::ViewSnapshot;
use ventanilla::{metrics, UndoController};

fn clock(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap() + Duration::seconds(secs)
}

fn print_view(label: &str, view: &ViewSnapshot) {
    println!("{label}");
    if view.waiting.is_empty() {
        println!("  (nobody waiting)");
    } else {
        for customer in &view.waiting {
            println!("  {customer}");
        }
    }
    println!("  completed services: {}", view.completed_count);
    if let Some(wait) = view.estimated_next_wait {
        println!("  front of the queue has waited: {}s", wait.as_secs());
    }
    println!();
}

fn main() {
    println!("=== Service Window Example ===\n");

    let mut counter = UndoController::new();

    println!("Three customers arrive:");
    counter.enqueue_at("Ana", clock(0)).unwrap();
    counter.enqueue_at("Luis", clock(30)).unwrap();
    counter.enqueue_at("María", clock(45)).unwrap();
    print_view(
        "Queue after arrivals:",
        &ViewSnapshot::capture(counter.current(), clock(60)),
    );

    // Keep this moment around; it stays valid no matter what happens next.
    let before_serving = counter.current().clone();

    println!("Serving:");
    for served_at in [75, 150] {
        let applied = counter.serve_at(clock(served_at));
        if let Some(record) = &applied.served {
            println!(
                "  {} served after waiting {}s",
                record.customer().name(),
                record.wait().as_secs()
            );
        }
    }
    println!();

    print_view(
        "Queue after serving:",
        &ViewSnapshot::capture(counter.current(), clock(160)),
    );

    if let Some(average) = metrics::average_wait(counter.current()) {
        println!("Average wait so far: {}s\n", average.as_secs());
    }

    println!("Undo the last serve:");
    counter.undo();
    print_view(
        "Queue after undo:",
        &ViewSnapshot::capture(counter.current(), clock(170)),
    );

    // The snapshot taken before serving never changed.
    println!(
        "Snapshot from before serving still sees {} waiting and {} served",
        before_serving.queue().len(),
        before_serving.history().len()
    );

    println!("\nKey Takeaways:");
    println!("- Commands are pure: each one maps a state to a new state");
    println!("- Undo pops a retained snapshot, it never replays commands");
    println!("- Old state values stay intact and readable forever");

    println!("\n=== Example Complete ===");
}
