#![warn(clippy::all, rust_2018_idioms)]

pub mod event;
pub mod string_error;

#[cfg(test)]
mod tests {
    use crate::event::{apply_events, AppEvent, EventQueue};

    #[derive(Default)]
    struct Counter {
        log: Vec<u32>,
    }

    struct Push(u32);

    impl AppEvent for Push {
        type App = Counter;

        fn apply(&self, app: &mut Self::App) -> Result<(), String> {
            if self.0 == 0 {
                return Err("zero is not allowed".into());
            }
            app.log.push(self.0);
            Ok(())
        }

        fn describe(&self) -> &str {
            "push"
        }
    }

    #[test]
    fn test_events_applied_in_queue_order() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut queue = EventQueue::<Counter>::new();
        queue.queue_event(Box::new(Push(1)));
        queue.queue_event(Box::new(Push(0)));
        queue.queue_event(Box::new(Push(2)));
        assert_eq!(queue.len(), 3);

        let mut app = Counter::default();
        let applied = apply_events(queue.take_events(), &mut app);

        // the failing event is logged and skipped
        assert_eq!(applied, 2);
        assert_eq!(app.log, vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_discard_events() {
        let mut queue = EventQueue::<Counter>::new();
        queue.queue_event(Box::new(Push(7)));
        queue.discard_events();
        assert!(queue.take_events().is_empty());
    }
}
