//! Navigator: the current route and its back-stack.
//!
//! The stack is an explicit `Vec<Route>` whose last element is the active
//! route. `navigate` and `pop_back_stack` are the only mutators, so history
//! behavior can be tested without a terminal.

use tracing::debug;

use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    /// Never empty. The first entry is the start route.
    stack: Vec<Route>,
}

impl Navigator {
    /// Create a navigator whose only entry is `start`.
    pub fn new(start: Route) -> Self {
        Navigator { stack: vec![start] }
    }

    /// The active route.
    pub fn current(&self) -> &Route {
        // The constructor seeds one entry and pop never removes the last one.
        &self.stack[self.stack.len() - 1]
    }

    /// Push `route` and make it current. Repeats are allowed.
    pub fn navigate(&mut self, route: Route) {
        debug!(route = %route, depth = self.stack.len() + 1, "navigate");
        self.stack.push(route);
    }

    /// Drop the current route and restore the previous one.
    ///
    /// Returns false and leaves the stack untouched when only the start
    /// route remains.
    pub fn pop_back_stack(&mut self) -> bool {
        if !self.can_go_back() {
            debug!(route = %self.current(), "pop ignored at root");
            return false;
        }
        self.stack.pop();
        debug!(route = %self.current(), depth = self.stack.len(), "pop");
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Number of routes on the stack, including the current one.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Routes from oldest to current.
    pub fn history(&self) -> &[Route] {
        &self.stack
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(Route::default())
    }
}
