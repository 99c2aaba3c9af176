/// Session management for the web interface
///
/// The [`SessionProvider`] trait is what the shell depends on. [`AuthProvider`]
/// wires the browser implementation into the component tree as a
/// [`SessionHandle`], which the composition root hands to the shell explicitly.

mod browser;
mod provider;
mod storage;

use std::rc::Rc;

use leptos::*;

pub use browser::BrowserSessionProvider;
pub use provider::SessionProvider;

use crate::api::ApiClient;
use crate::types::Session;

/// Cloneable handle to the active session provider.
#[derive(Clone)]
pub struct SessionHandle {
    provider: Rc<dyn SessionProvider>,
    ready: Signal<bool>,
}

impl SessionHandle {
    /// `ready` turns true once the provider knows whether a session exists.
    pub fn new(provider: Rc<dyn SessionProvider>, ready: Signal<bool>) -> Self {
        Self { provider, ready }
    }

    pub fn provider(&self) -> Rc<dyn SessionProvider> {
        self.provider.clone()
    }

    pub fn current(&self) -> Option<Session> {
        self.provider.session()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current().is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

/// Authentication provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let provider = Rc::new(BrowserSessionProvider::new(ApiClient::new()));
    let ready = provider.restored();

    // Effects only run in the browser, where localStorage exists
    create_effect({
        let provider = provider.clone();
        move |_| provider.restore()
    });

    provide_context(SessionHandle::new(provider, ready));

    children()
}

/// Hook to access the session handle
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionHandle must be provided by AuthProvider")
}
