//! Example: one callback wired to a button-click event.
//!
//! The listener is registered five times; only the first succeeds and the
//! repeats report `ERROR ON 50`. Emitting the click then prints
//! `Receive: Test. Count 0.`
use std::sync::atomic::{AtomicU32, Ordering};

use rs_fixed_events::{callback, payload, Callback, EventEmitter, EventHandler, Payload};

const VALUE_SIZE: usize = 5;
const MAX_EVENTS: usize = 5;
const MAX_CALLBACKS: usize = 10;

// Event identifiers are small non-zero integers; naming them keeps call sites readable.
const EV_BUTTON_CLICKED: u8 = 0x01;

static COUNT: AtomicU32 = AtomicU32::new(0);

fn my_callback(param: Payload<'_>) -> i32 {
    if param.is_none() {
        println!("ERROR: No param, I need a param");
        return 1;
    }

    let mut value = [0u8; VALUE_SIZE + 1];
    match payload::read_str(&mut value, param, VALUE_SIZE) {
        Ok(text) => {
            println!("Receive: {}. Count {}. ", text, COUNT.fetch_add(1, Ordering::SeqCst));
            0
        }
        Err(err) => {
            println!("ERROR: {}", err);
            1
        }
    }
}

fn listen_to_event(ev: &mut EventEmitter, event: u8, cb: &Callback) {
    if let Err(err) = ev.on(event, cb.clone()) {
        println!("ERROR ON {}", err.code());
    }
}

fn trigger_event(ev: &mut EventEmitter, param: &[u8]) {
    if let Err(err) = ev.emit(EV_BUTTON_CLICKED, payload::arg_bytes(param)) {
        println!("ERROR EMIT {}", err.code());
    }
}

fn main() {
    env_logger::init();

    let mut ev = match EventEmitter::new(MAX_EVENTS, MAX_CALLBACKS) {
        Ok(ev) => ev,
        Err(err) => {
            eprintln!("cannot create emitter: {}", err);
            return;
        }
    };

    let cb = callback(my_callback);
    for _ in 0..MAX_EVENTS {
        listen_to_event(&mut ev, EV_BUTTON_CLICKED, &cb);
    }

    let mut param = [0u8; VALUE_SIZE + 1];
    param[..4].copy_from_slice(b"Test");
    trigger_event(&mut ev, &param);
}
