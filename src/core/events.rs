//! Observer registry used by components that broadcast state changes

/// Handle returned by [`Observers::add`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listeners for events of type `E`, notified synchronously in registration order
pub struct Observers<E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn FnMut(&E)>)>,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was not registered
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn notify(&mut self, event: &E) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers: Observers<u32> = Observers::new();

        let first = log.clone();
        observers.add(move |v| first.borrow_mut().push(format!("a{}", v)));
        let second = log.clone();
        observers.add(move |v| second.borrow_mut().push(format!("b{}", v)));

        observers.notify(&7);
        assert_eq!(*log.borrow(), vec!["a7", "b7"]);
    }

    #[test]
    fn test_remove_listener() {
        let count = Rc::new(RefCell::new(0));
        let mut observers: Observers<()> = Observers::new();

        let counter = count.clone();
        let id = observers.add(move |_| *counter.borrow_mut() += 1);
        observers.notify(&());
        assert!(observers.remove(id));
        assert!(!observers.remove(id));
        observers.notify(&());

        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }
}
