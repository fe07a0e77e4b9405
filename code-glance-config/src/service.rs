//! Live config ownership and change notification.
//!
//! The settings dialog edits a working copy of [`Config`] and commits it
//! through [`ConfigService::update`]; rendering code registers a listener
//! and re-reads whatever it caches (colors, widths) when notified.
//!
//! Everything here runs on the UI thread; the service is plain owned
//! state, not a lock.

use crate::config::Config;

/// Handle returned by [`ConfigService::on_change`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

type Listener = Box<dyn Fn(&Config)>;

/// Owns the authoritative [`Config`] and notifies listeners when it changes.
pub struct ConfigService {
    config: Config,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: usize,
}

impl ConfigService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Load the persisted config, falling back to defaults when loading fails.
    pub fn load() -> Self {
        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Falling back to default config: {e}");
                Config::default()
            }
        };
        Self::new(config)
    }

    /// The current authoritative config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the config and notify listeners.
    pub fn update(&mut self, config: Config) {
        self.config = config;
        self.notify_change();
    }

    /// Register a change listener. The listener is NOT invoked for the
    /// config state current at registration time.
    pub fn on_change(&mut self, listener: impl Fn(&Config) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Unknown ids are ignored.
    pub fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Invoke every registered listener with the current config.
    pub fn notify_change(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn update_notifies_listeners_with_new_config() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut service = ConfigService::new(Config::default());

        let seen_clone = Rc::clone(&seen);
        service.on_change(move |config| seen_clone.borrow_mut().push(config.width));

        let mut config = Config::default();
        config.width = 180;
        service.update(config);

        assert_eq!(*seen.borrow(), vec![180]);
        assert_eq!(service.config().width, 180);
    }

    #[test]
    fn removed_listener_is_not_invoked() {
        let calls = Rc::new(RefCell::new(0));
        let mut service = ConfigService::new(Config::default());

        let calls_clone = Rc::clone(&calls);
        let id = service.on_change(move |_| *calls_clone.borrow_mut() += 1);
        service.remove_listener(id);

        service.update(Config::default());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn listeners_are_independent() {
        let calls = Rc::new(RefCell::new(0));
        let mut service = ConfigService::new(Config::default());

        let first = Rc::clone(&calls);
        let id = service.on_change(move |_| *first.borrow_mut() += 1);
        let second = Rc::clone(&calls);
        service.on_change(move |_| *second.borrow_mut() += 10);

        service.remove_listener(id);
        service.notify_change();
        assert_eq!(*calls.borrow(), 10);
    }
}
