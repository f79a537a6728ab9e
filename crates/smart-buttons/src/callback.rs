//! Shared event callbacks stored in widget configuration.

use std::fmt;
use std::rc::Rc;

use smart_buttons_dom::Event;

/// A caller-supplied event callback.
///
/// Cloning shares the same closure. Two callbacks compare equal only when they
/// share it, which keeps configuration types comparable.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&mut Event)>);

impl Callback {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut Event) + 'static,
    {
        Self(Rc::new(callback))
    }

    pub fn call(&self, event: &mut Event) {
        (self.0)(event)
    }
}

impl<F> From<F> for Callback
where
    F: Fn(&mut Event) + 'static,
{
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}
