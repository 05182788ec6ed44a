
mod base {
    mod event_emitter;
    mod listener;
    mod slots;
}

#[cfg(feature = "threaded")]
mod threaded {
    mod shared_emitter;
}
