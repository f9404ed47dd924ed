use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub type PointerHandler = Box<dyn FnMut(f64, f64)>;

// `subscribe` keeps `handler` registered until the subscription is handed
// back to `unsubscribe`
pub trait PointerSource {
    type Subscription;
    type Error: Debug;

    fn subscribe(&self, handler: PointerHandler) -> Result<Self::Subscription, Self::Error>;
    fn unsubscribe(&self, subscription: Self::Subscription);
}

// Last known pointer position, readable by whatever binds to it
#[derive(Clone, Debug, Default)]
pub struct SharedPointer(Rc<Cell<PointerPosition>>);

impl SharedPointer {
    pub fn get(&self) -> PointerPosition {
        self.0.get()
    }

    pub fn on_pointer_move(&self, x: f64, y: f64) -> PointerPosition {
        let position = PointerPosition::new(x, y);
        self.0.set(position);
        position
    }
}

/// Subscription feeding a page-scoped [`SharedPointer`].
///
/// Created when the page mounts; dropping it releases the subscription, so
/// no signal can reach the pointer after teardown.
pub struct PointerTracker<S: PointerSource> {
    source: S,
    subscription: Option<S::Subscription>,
}

impl<S: PointerSource> PointerTracker<S> {
    pub fn mount(
        source: S,
        pointer: SharedPointer,
        mut on_move: impl FnMut(PointerPosition) + 'static,
    ) -> Result<Self, S::Error> {
        let handler: PointerHandler =
            Box::new(move |x: f64, y: f64| on_move(pointer.on_pointer_move(x, y)));
        let subscription = source.subscribe(handler)?;
        log::debug!("pointer tracker mounted");
        Ok(Self {
            source,
            subscription: Some(subscription),
        })
    }
}

impl<S: PointerSource> Drop for PointerTracker<S> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription);
            log::debug!("pointer tracker released");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{PointerHandler, PointerSource};

    #[derive(Clone, Default)]
    pub struct FakePointerSource {
        handlers: Rc<RefCell<Vec<(usize, PointerHandler)>>>,
        next_id: Rc<Cell<usize>>,
        refuse: bool,
    }

    #[derive(Debug)]
    pub struct Refused;

    impl FakePointerSource {
        pub fn refusing() -> Self {
            Self {
                refuse: true,
                ..Self::default()
            }
        }

        pub fn emit(&self, x: f64, y: f64) {
            for (_, handler) in self.handlers.borrow_mut().iter_mut() {
                handler(x, y);
            }
        }

        pub fn listener_count(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    impl PointerSource for FakePointerSource {
        type Subscription = usize;
        type Error = Refused;

        fn subscribe(&self, handler: PointerHandler) -> Result<usize, Refused> {
            if self.refuse {
                return Err(Refused);
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, handler));
            Ok(id)
        }

        fn unsubscribe(&self, subscription: usize) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != subscription);
        }
    }
}
