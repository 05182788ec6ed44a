use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use crate::{callback, EmitterConfig, EventError, EventHandler, EventManager, SharedEmitter};

const EV_1: u8 = 0x01;
const EV_2: u8 = 0x02;

#[test]
fn shared_emitter_mirrors_base_semantics() {
    let shared = SharedEmitter::new(2, 2).unwrap();
    let cb = callback(|_| 0);
    shared.on(EV_1, cb.clone()).unwrap();
    assert_eq!(shared.on(EV_1, cb.clone()), Err(EventError::CallbackAlreadyRegistered));
    assert_eq!(shared.emit(EV_1, None), Ok(()));
    assert_eq!(shared.off(EV_1, &cb), Ok(0));
    assert_eq!(shared.emit(EV_1, None), Err(EventError::EventHasNoListeners));
    assert_eq!(shared.listener_count(EV_1), Ok(0));

    shared.reset().unwrap();
    assert_eq!(shared.emit(EV_1, None), Err(EventError::UnknownEvent));
    assert_eq!(shared.config(), &EmitterConfig::new(2, 2));
}

#[test]
fn registrations_from_many_threads() {
    let manager: EventManager = Arc::new(SharedEmitter::new(1, 8).unwrap());
    let called = Arc::new(AtomicU64::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = Arc::clone(&manager);
            let called = Arc::clone(&called);
            thread::spawn(move || {
                manager.on(EV_1, callback(move |_| {
                    called.fetch_add(1, Ordering::SeqCst);
                    0
                }))
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(manager.listener_count(EV_1), Ok(8));
    assert_eq!(manager.on(EV_1, callback(|_| 0)), Err(EventError::CallbacksFull));
    manager.emit(EV_1, None).unwrap();
    assert_eq!(called.load(Ordering::SeqCst), 8);
}

#[test]
fn emissions_from_many_threads() {
    let manager: EventManager = Arc::new(SharedEmitter::default());
    let total = Arc::new(AtomicU64::new(0));
    let total_clone = Arc::clone(&total);
    manager
        .on(EV_2, callback(move |param| {
            total_clone.fetch_add(param.map_or(0, |bytes| bytes.len() as u64), Ordering::SeqCst);
            0
        }))
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for _ in 0..25 {
                    manager.emit(EV_2, Some(&b"ab"[..])).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(total.load(Ordering::SeqCst), 200);
}

#[test]
fn reentrant_calls_are_rejected() {
    let manager: EventManager = Arc::new(SharedEmitter::new(2, 2).unwrap());
    let nested = Arc::new(AtomicI32::new(0));

    let inner = Arc::clone(&manager);
    let nested_clone = Arc::clone(&nested);
    manager
        .on(EV_1, callback(move |_| {
            let result = inner.on(EV_2, callback(|_| 0));
            nested_clone.store(crate::status_of(&result), Ordering::SeqCst);
            assert_eq!(inner.reset(), Err(EventError::Reentrant));
            assert_eq!(inner.listener_count(EV_1), Err(EventError::Reentrant));
            0
        }))
        .unwrap();

    assert_eq!(manager.emit(EV_1, None), Ok(()));
    assert_eq!(nested.load(Ordering::SeqCst), EventError::Reentrant.code());
    assert_eq!(manager.listener_count(EV_2), Err(EventError::UnknownEvent));
    assert_eq!(manager.listener_count(EV_1), Ok(1));
}

#[test]
fn exclusive_access_without_locking() {
    let mut shared = SharedEmitter::default();
    shared.get_mut().on(EV_1, callback(|_| 3)).unwrap();
    assert_eq!(shared.emit(EV_1, None).unwrap_err().code(), 3);

    let mut emitter = shared.into_inner();
    emitter.reset_event(EV_1);
    assert_eq!(emitter.emit(EV_1, None), Err(EventError::EventHasNoListeners));
}
