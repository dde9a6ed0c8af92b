//! Events are the only way UI code mutates application state: widgets queue
//! them while rendering and the app applies them at the start of the next
//! frame.

pub trait AppEvent {
    type App;
    fn apply(&self, app: &mut Self::App) -> Result<(), String>;
    /// Short description used for logging.
    fn describe(&self) -> &str;
}

pub type DynEvent<App> = Box<dyn AppEvent<App = App>>;

/// The EventQueue stores events that are processed each iteration
/// of the application GUI event loop.
pub struct EventQueue<App> {
    queue: Vec<DynEvent<App>>,
}

impl<App> EventQueue<App> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn queue_event(&mut self, event: DynEvent<App>) {
        self.queue.push(event);
    }

    pub fn discard_events(&mut self) {
        self.queue.clear();
    }

    /// Remove all queued events, oldest first.
    ///
    /// The queue lives inside the app it mutates, so events have to be taken
    /// out before they can be applied.
    pub fn take_events(&mut self) -> Vec<DynEvent<App>> {
        std::mem::take(&mut self.queue)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<App> Default for EventQueue<App> {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `events` in order and return how many succeeded. Failing events are
/// logged and do not stop the remaining ones.
pub fn apply_events<App>(events: Vec<DynEvent<App>>, app: &mut App) -> usize {
    let mut applied = 0;
    for event in events {
        log::debug!("applying event '{}'", event.describe());
        match event.apply(app) {
            Ok(()) => applied += 1,
            Err(err) => log::error!("event '{}' failed: {}", event.describe(), err),
        }
    }
    applied
}
