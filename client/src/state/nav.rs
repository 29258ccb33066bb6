//! Navigation coordination between the route guard and the login page.
//!
//! DESIGN
//! ======
//! The guard remembers the deep link an anonymous viewer asked for, and the
//! login page raises `hold` while its submit is running so the guard keeps
//! the form on screen until the page navigates on its own.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Guarded path requested before the viewer was sent to login.
    pub return_to: Option<String>,
    /// Set by the login page while a submit is in flight or acknowledged.
    pub hold: bool,
}

impl NavState {
    pub fn remember(&mut self, path: String) {
        self.return_to = Some(path);
    }

    /// Consume the remembered path.
    pub fn take_return(&mut self) -> Option<String> {
        self.return_to.take()
    }
}
