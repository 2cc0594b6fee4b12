use crate::domain::model::Screen;
use crate::domain::primitive::{Parameter, SessionConfig};
use crate::interface_adapter::port::TerminalObserver;

/// Handle returned by `add`, used to remove an observer later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

/// Ordered list of observers. Notification walks the list in
/// registration order; removal never disturbs the order of the rest.
pub struct ObserverRegistry {
    entries: Vec<(ObserverId, Box<dyn TerminalObserver>)>,
    next_id: usize,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, observer: Box<dyn TerminalObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Removes the observer registered under `id`. Returns false when no
    /// such registration exists.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify_connect(&mut self, config: &SessionConfig) {
        for (_, observer) in &mut self.entries {
            observer.on_connect(config);
        }
    }

    pub fn notify_disconnect(&mut self) {
        for (_, observer) in &mut self.entries {
            observer.on_disconnect();
        }
    }

    pub fn notify_screen_updated(&mut self, screen: &Screen) {
        for (_, observer) in &mut self.entries {
            observer.on_screen_updated(screen);
        }
    }

    pub fn notify_command_issued(
        &mut self,
        command: &str,
        returned: Option<&str>,
        parameters: &[Parameter],
    ) {
        for (_, observer) in &mut self.entries {
            observer.on_command_issued(command, returned, parameters);
        }
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Appends a tag to a shared journal on every hook, so tests can
    /// assert cross-observer ordering.
    struct JournalObserver {
        tag: &'static str,
        journal: Arc<Mutex<Vec<String>>>,
    }

    impl TerminalObserver for JournalObserver {
        fn on_connect(&mut self, config: &SessionConfig) {
            self.journal
                .lock()
                .unwrap()
                .push(format!("{}:connect:{}", self.tag, config.host));
        }

        fn on_disconnect(&mut self) {
            self.journal
                .lock()
                .unwrap()
                .push(format!("{}:disconnect", self.tag));
        }

        fn on_screen_updated(&mut self, _screen: &Screen) {
            self.journal
                .lock()
                .unwrap()
                .push(format!("{}:screen", self.tag));
        }

        fn on_command_issued(
            &mut self,
            command: &str,
            returned: Option<&str>,
            parameters: &[Parameter],
        ) {
            let rendered: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
            self.journal.lock().unwrap().push(format!(
                "{}:command:{}:{}:{}",
                self.tag,
                command,
                returned.unwrap_or("-"),
                rendered.join(",")
            ));
        }
    }

    fn registry_with_two(journal: &Arc<Mutex<Vec<String>>>) -> ObserverRegistry {
        let mut registry = ObserverRegistry::new();
        registry.add(Box::new(JournalObserver {
            tag: "first",
            journal: journal.clone(),
        }));
        registry.add(Box::new(JournalObserver {
            tag: "second",
            journal: journal.clone(),
        }));
        registry
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = ObserverRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn notifications_run_in_registration_order() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = registry_with_two(&journal);

        registry.notify_disconnect();

        let entries = journal.lock().unwrap();
        assert_eq!(*entries, vec!["first:disconnect", "second:disconnect"]);
    }

    #[test]
    fn connect_notification_carries_the_config() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = registry_with_two(&journal);

        registry.notify_connect(&SessionConfig::new("mf.example.com"));

        let entries = journal.lock().unwrap();
        assert_eq!(entries[0], "first:connect:mf.example.com");
    }

    #[test]
    fn command_notification_carries_return_value_and_parameters() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = registry_with_two(&journal);

        registry.notify_command_issued("read", Some("JOHN"), &[Parameter::new("skip", 1)]);

        let entries = journal.lock().unwrap();
        assert_eq!(entries[0], "first:command:read:JOHN:skip=[1]");
    }

    #[test]
    fn removed_observer_is_no_longer_notified() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        let first = registry.add(Box::new(JournalObserver {
            tag: "first",
            journal: journal.clone(),
        }));
        registry.add(Box::new(JournalObserver {
            tag: "second",
            journal: journal.clone(),
        }));

        assert!(registry.remove(first));
        registry.notify_disconnect();

        let entries = journal.lock().unwrap();
        assert_eq!(*entries, vec!["second:disconnect"]);
    }

    #[test]
    fn removing_an_unknown_id_returns_false() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        let id = registry.add(Box::new(JournalObserver {
            tag: "only",
            journal: journal.clone(),
        }));

        assert!(registry.remove(id));
        assert!(!registry.remove(id));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        let first = registry.add(Box::new(JournalObserver {
            tag: "first",
            journal: journal.clone(),
        }));
        registry.remove(first);
        let second = registry.add(Box::new(JournalObserver {
            tag: "second",
            journal: journal.clone(),
        }));

        assert_ne!(first, second);
    }
}
