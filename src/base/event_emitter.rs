extern crate alloc;
use alloc::{boxed::Box, vec::Vec};
use log::{debug, trace};

use crate::{
    Callback, EmitterConfig, EventError, EventHandler, EventId, Listener, Payload, SlotTable,
    NO_EVENT, STATUS_OK,
};

/// A fixed-capacity event emitter.
///
/// This struct implements the `EventHandler` trait on top of two parallel tables:
/// an event table of `event_capacity` identifiers and a `SlotTable` of
/// `event_capacity × callback_capacity` callback slots, where row `i` belongs to
/// event slot `i`.
///
/// # Implementation Notes
/// - Both tables are allocated once, at construction, and never grow.
/// - A new identifier takes the first unused event slot; identifiers never move.
/// - Removing a callback leaves a hole. Rows are never compacted, so slot indices
///   returned by `off` stay meaningful and emission order is registration order
///   minus the holes.
/// - Every mutating operation takes `&mut self`, so a callback can never reach the
///   emitter that is invoking it.
///
/// # Example
/// ```
/// use rs_fixed_events::{callback, payload, EventEmitter, EventHandler};
///
/// const EV_BUTTON_CLICKED: u8 = 0x01;
///
/// let mut emitter = EventEmitter::new(5, 10).unwrap();
/// emitter.on(EV_BUTTON_CLICKED, callback(|param| {
///     let mut value = [0u8; 5];
///     match payload::read_str(&mut value, param, 5) {
///         Ok("Test") => 0,
///         _ => 1,
///     }
/// })).unwrap();
///
/// assert!(emitter.emit(EV_BUTTON_CLICKED, payload::arg_bytes(b"Test")).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct EventEmitter {
    config: EmitterConfig,
    /// Registered identifiers by slot; `NO_EVENT` marks an unused slot.
    events: Box<[EventId]>,
    callbacks: SlotTable,
}

impl EventEmitter {
    /// Creates an emitter able to track `event_capacity` identifiers with up to
    /// `callback_capacity` callbacks each.
    ///
    /// # Returns
    /// * `Err(EventError::InvalidCapacity)` - If either capacity is zero.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::{EventEmitter, EventError};
    ///
    /// let emitter = EventEmitter::new(2, 3).unwrap();
    /// assert_eq!(emitter.event_capacity(), 2);
    /// assert_eq!(emitter.callback_capacity(), 3);
    /// assert_eq!(EventEmitter::new(0, 3).unwrap_err(), EventError::InvalidCapacity);
    /// ```
    pub fn new(event_capacity: usize, callback_capacity: usize) -> Result<Self, EventError> {
        Self::with_config(EmitterConfig::new(event_capacity, callback_capacity))
    }

    /// Creates an emitter from a validated [`EmitterConfig`].
    pub fn with_config(config: EmitterConfig) -> Result<Self, EventError> {
        config.validate()?;
        trace!(
            "allocating emitter: {} events x {} callbacks",
            config.event_capacity,
            config.callback_capacity
        );
        Self::build(config)
    }

    fn build(config: EmitterConfig) -> Result<Self, EventError> {
        let mut events = Vec::new();
        events
            .try_reserve_exact(config.event_capacity)
            .map_err(|_| EventError::InvalidCapacity)?;
        events.resize(config.event_capacity, NO_EVENT);
        Ok(Self {
            config,
            events: events.into_boxed_slice(),
            callbacks: SlotTable::new(config.event_capacity, config.callback_capacity)?,
        })
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Maximum number of distinct event identifiers.
    pub fn event_capacity(&self) -> usize {
        self.config.event_capacity
    }

    /// Maximum number of callbacks per event identifier.
    pub fn callback_capacity(&self) -> usize {
        self.config.callback_capacity
    }

    /// The identifier stored in event slot `row`, or `None` if the slot is unused
    /// or out of range.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::{callback, EventEmitter, EventHandler};
    ///
    /// let mut emitter = EventEmitter::default();
    /// emitter.on(0x02, callback(|_| 0)).unwrap();
    /// assert_eq!(emitter.event_at(0), Some(0x02));
    /// assert_eq!(emitter.event_at(1), None);
    /// ```
    pub fn event_at(&self, row: usize) -> Option<EventId> {
        self.events.get(row).copied().filter(|&id| id != NO_EVENT)
    }

    /// The callback stored at (`row`, `slot`), or `None` for a hole.
    pub fn callback_at(&self, row: usize, slot: usize) -> Option<&Callback> {
        self.callbacks.get(row, slot).map(Listener::callback)
    }

    /// Registered identifiers in slot order, including those whose rows are empty.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::{callback, EventEmitter, EventHandler};
    ///
    /// let mut emitter = EventEmitter::default();
    /// emitter.on(0x07, callback(|_| 0)).unwrap();
    /// emitter.on(0x03, callback(|_| 0)).unwrap();
    /// emitter.reset_event(0x07);
    /// assert_eq!(emitter.event_ids().collect::<Vec<_>>(), vec![0x07, 0x03]);
    /// ```
    pub fn event_ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.events.iter().copied().filter(|&id| id != NO_EVENT)
    }

    /// True when no identifier holds an event slot.
    pub fn is_empty(&self) -> bool {
        self.events.iter().all(|&id| id == NO_EVENT)
    }

    fn row_of(&self, event: EventId) -> Option<usize> {
        if event == NO_EVENT {
            return None;
        }
        self.events.iter().position(|&id| id == event)
    }
}

impl EventHandler for EventEmitter {
    /// Registers `callback` under `event`.
    ///
    /// # Returns
    /// * `Ok(())` - The callback took the first empty slot of the event's row.
    /// * `Err(EventError::ReservedEvent)` - `event` is `0`.
    /// * `Err(EventError::EventsFull)` - `event` is new and no event slot is unused.
    /// * `Err(EventError::CallbackAlreadyRegistered)` - This handle is already stored under `event`.
    /// * `Err(EventError::CallbacksFull)` - The event's row has no empty slot.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::{callback, EventEmitter, EventError, EventHandler};
    ///
    /// let mut emitter = EventEmitter::new(2, 2).unwrap();
    /// let cb = callback(|_| 0);
    /// emitter.on(0x01, cb.clone()).unwrap();
    /// assert_eq!(emitter.on(0x01, cb), Err(EventError::CallbackAlreadyRegistered));
    /// ```
    fn on(&mut self, event: EventId, callback: Callback) -> Result<(), EventError> {
        if event == NO_EVENT {
            return Err(EventError::ReservedEvent);
        }
        let (row, claimed) = match self.row_of(event) {
            Some(row) => (row, false),
            None => {
                let row = self
                    .events
                    .iter()
                    .position(|&id| id == NO_EVENT)
                    .ok_or(EventError::EventsFull)?;
                (row, true)
            }
        };

        if self.callbacks.find(row, &callback).is_some() {
            return Err(EventError::CallbackAlreadyRegistered);
        }
        let slot = self
            .callbacks
            .first_free(row)
            .ok_or(EventError::CallbacksFull)?;

        if claimed {
            self.events[row] = event;
            debug!("event {:#04x} claimed slot {}", event, row);
        }
        self.callbacks.set(row, slot, Listener::new(callback));
        trace!("event {:#04x}: callback registered in slot {}", event, slot);
        Ok(())
    }

    /// Empties the slot holding `callback` under `event`.
    ///
    /// The event keeps its slot even when its row becomes empty.
    ///
    /// # Returns
    /// * `Ok(slot)` - Index of the emptied slot. The first slot is `0`.
    /// * `Err(EventError::UnknownEventOnOff)` - `event` was never registered.
    /// * `Err(EventError::CallbackNotRegistered)` - `callback` is not stored under `event`.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::{callback, EventEmitter, EventError, EventHandler};
    ///
    /// let mut emitter = EventEmitter::default();
    /// let cb = callback(|_| 0);
    /// emitter.on(0x01, cb.clone()).unwrap();
    ///
    /// assert_eq!(emitter.off(0x01, &cb), Ok(0));
    /// assert_eq!(emitter.off(0x01, &cb), Err(EventError::CallbackNotRegistered));
    /// assert_eq!(emitter.event_at(0), Some(0x01));
    /// ```
    fn off(&mut self, event: EventId, callback: &Callback) -> Result<usize, EventError> {
        let row = self.row_of(event).ok_or(EventError::UnknownEventOnOff)?;
        let slot = self
            .callbacks
            .find(row, callback)
            .ok_or(EventError::CallbackNotRegistered)?;
        self.callbacks.take(row, slot);
        trace!("event {:#04x}: callback removed from slot {}", event, slot);
        Ok(slot)
    }

    /// Emits `event` synchronously, invoking each occupied slot in ascending order.
    ///
    /// The payload is passed to every callback unchanged and is never read by the
    /// emitter. Invocation stops at the first callback returning a non-zero status.
    ///
    /// # Returns
    /// * `Ok(())` - Every invoked callback returned `0`.
    /// * `Err(EventError::UnknownEvent)` - `event` was never registered.
    /// * `Err(EventError::EventHasNoListeners)` - `event` is registered but its row is empty.
    /// * `Err(EventError::CallbackFailed { slot, status })` - The callback in `slot` returned `status`.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::{callback, EventEmitter, EventError, EventHandler};
    ///
    /// let mut emitter = EventEmitter::default();
    /// emitter.on(0x02, callback(|_| 0x10)).unwrap();
    ///
    /// let err = emitter.emit(0x02, None).unwrap_err();
    /// assert_eq!(err, EventError::CallbackFailed { slot: 0, status: 0x10 });
    /// assert_eq!(err.code(), 0x10);
    /// ```
    fn emit(&mut self, event: EventId, payload: Payload<'_>) -> Result<(), EventError> {
        let row = self.row_of(event).ok_or(EventError::UnknownEvent)?;
        if self.callbacks.occupied(row) == 0 {
            return Err(EventError::EventHasNoListeners);
        }

        for (slot, listener) in self.callbacks.row(row).iter().enumerate() {
            let Some(listener) = listener else { continue };
            let status = listener.call(payload);
            if status != STATUS_OK {
                debug!(
                    "event {:#04x}: callback in slot {} failed with status {}",
                    event, slot, status
                );
                return Err(EventError::CallbackFailed { slot, status });
            }
        }
        trace!("event {:#04x} emitted", event);
        Ok(())
    }

    /// Returns every event and callback slot to unused, keeping both capacities.
    fn reset(&mut self) {
        self.events.iter_mut().for_each(|id| *id = NO_EVENT);
        self.callbacks.clear();
        debug!("emitter reset");
    }

    /// Empties every callback slot of `event`; the identifier keeps its event slot,
    /// so a later `emit` fails with `EventHasNoListeners` rather than `UnknownEvent`.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::{callback, EventEmitter, EventError, EventHandler};
    ///
    /// let mut emitter = EventEmitter::new(2, 2).unwrap();
    /// emitter.on(0x01, callback(|_| 0)).unwrap();
    /// emitter.reset_event(0x01);
    /// assert_eq!(emitter.emit(0x01, None), Err(EventError::EventHasNoListeners));
    /// ```
    fn reset_event(&mut self, event: EventId) {
        if let Some(row) = self.row_of(event) {
            self.callbacks.clear_row(row);
            debug!("event {:#04x}: all callbacks cleared", event);
        }
    }

    /// Returns the number of occupied callback slots for `event`.
    ///
    /// # Returns
    /// * `Ok(usize)` - The count, `0` after `reset_event` or removing every callback.
    /// * `Err(EventError::UnknownEvent)` - If the event was never registered.
    fn listener_count(&self, event: EventId) -> Result<usize, EventError> {
        self.row_of(event)
            .map(|row| self.callbacks.occupied(row))
            .ok_or(EventError::UnknownEvent)
    }
}

impl Default for EventEmitter {
    /// Creates an emitter with the default capacities of 5 events and 10 callbacks per event.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_fixed_events::EventEmitter;
    ///
    /// let emitter = EventEmitter::default();
    /// assert_eq!(emitter.event_capacity(), 5);
    /// assert_eq!(emitter.callback_capacity(), 10);
    /// ```
    ///
    /// # Panics
    /// Panics if the default tables cannot be allocated.
    fn default() -> Self {
        Self::with_config(EmitterConfig::default()).expect("default capacities are valid")
    }
}
