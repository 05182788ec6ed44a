//! Example: sensor readings emitted from worker threads (std, `threaded` feature).
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use log::info;
use rs_fixed_events::{callback, payload, EventManager, SharedEmitter};

const EV_SENSOR_TRIGGERED: u8 = 0x10;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let manager: EventManager = Arc::new(SharedEmitter::new(4, 4).expect("valid capacities"));
    let total = Arc::new(AtomicU64::new(0));

    let sum = Arc::clone(&total);
    manager
        .on(EV_SENSOR_TRIGGERED, callback(move |param| match payload::read::<u32>(param) {
            Ok(value) => {
                sum.fetch_add(u64::from(value), Ordering::SeqCst);
                0
            }
            Err(_) => 1,
        }))
        .expect("first listener fits");

    let workers: Vec<_> = (1..=4u32)
        .map(|sensor| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                let reading = sensor * 10;
                manager.emit(EV_SENSOR_TRIGGERED, payload::arg(&reading))
            })
        })
        .collect();

    for worker in workers {
        if let Err(err) = worker.join().expect("worker panicked") {
            info!("emit failed with code {}", err.code());
        }
    }
    info!("sum of readings: {}", total.load(Ordering::SeqCst));
}
