//! Demo emitters
//!
//! Background threads producing synthetic records so the viewer has a
//! concurrent, multi-producer stream to show without an external source.

use logstream_core::{Level, LogProducer, Record};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const MESSAGES: [(&str, Level); 6] = [
    ("heartbeat ok", Level::Debug),
    ("request served", Level::Info),
    ("cache refreshed", Level::Info),
    ("slow response from upstream", Level::Warning),
    ("retrying connection", Level::Warning),
    ("request failed", Level::Error),
];

/// Spawn one emitter thread delivering a small batch every `interval`
pub fn spawn_emitter(
    name: String,
    producer: LogProducer,
    interval: Duration,
    stop: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        log::info!("Demo emitter {} started", name);
        let mut sequence = 0usize;

        while !stop.load(Ordering::Relaxed) {
            let batch = next_batch(&name, sequence);
            sequence += batch.len();
            if !producer.deliver_batch(batch) {
                break;
            }
            thread::sleep(interval);
        }

        log::info!("Demo emitter {} stopped", name);
    })
}

/// Deterministic batch of one to three records
fn next_batch(name: &str, sequence: usize) -> Vec<Record> {
    let size = sequence % 3 + 1;
    (sequence..sequence + size)
        .map(|n| {
            let (message, level) = &MESSAGES[(n * 7 + name.len()) % MESSAGES.len()];
            Record::new(level.clone(), name, format!("#{} {}", n, message))
        })
        .collect()
}
