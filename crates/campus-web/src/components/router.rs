/// Router adapter for the shell's [`Navigator`] seam

use std::rc::Rc;

use leptos_router::{use_navigate, NavigateOptions};
use tracing::debug;

use crate::shell::Navigator;

/// Wraps leptos_router's imperative navigation. Must be created under a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        debug!(path, "navigating");
        (self.navigate)(path, NavigateOptions::default());
    }
}
