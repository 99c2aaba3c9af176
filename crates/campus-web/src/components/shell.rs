/// Shell component that wraps every authenticated page
///
/// Owns the drawer state for its lifetime (a remount starts `Closed`), reads the
/// current path from the router, and routes selection and sign-out through the
/// effects in [`crate::shell`].

use leptos::*;
use leptos_router::*;
use tracing::debug;

use crate::auth::SessionHandle;
use crate::components::{header::MobileTopBar, router::RouterNavigator, sidebar::Sidebar, viewport::use_viewport};
use crate::shell::{
    derive_display_identity, overlay_visible, select_destination, sign_out, NavDestination,
    PanelEvent, PanelState,
};

#[component]
pub fn Shell(
    /// Session the shell displays and signs out of.
    session: SessionHandle,
    children: Children,
) -> impl IntoView {
    let (panel, set_panel) = create_signal(PanelState::default());
    let viewport = use_viewport();
    let location = use_location();
    let navigator = RouterNavigator::from_router();

    let send = move |event: PanelEvent| {
        set_panel.update(|state| {
            let next = state.apply(event);
            debug!(?event, from = ?*state, to = ?next, "panel transition");
            *state = next;
        });
    };

    let on_select = Callback::new({
        let navigator = navigator.clone();
        move |destination: NavDestination| {
            // Read first: navigating can re-render readers of `panel`
            let next = select_destination(&navigator, panel.get_untracked(), &destination);
            set_panel.set(next);
        }
    });

    let identity = Signal::derive({
        let session = session.clone();
        move || derive_display_identity(&session.current().unwrap_or_default())
    });

    let sign_out_action = create_action(move |_: &()| {
        let provider = session.provider();
        let navigator = navigator.clone();
        async move { sign_out(provider.as_ref(), &navigator).await }
    });

    view! {
        <div class="min-h-screen bg-background">
            <Show when=move || overlay_visible(panel.get(), viewport.get())>
                <div
                    class="fixed inset-0 bg-foreground/20 z-40 lg:hidden"
                    on:click=move |_| send(PanelEvent::CloseRequested)
                ></div>
            </Show>

            <Sidebar
                panel=panel
                current_path=location.pathname
                identity=identity
                signing_out=sign_out_action.pending()
                on_close=Callback::new(move |_| send(PanelEvent::CloseRequested))
                on_select=on_select
                on_sign_out=Callback::new(move |_| sign_out_action.dispatch(()))
            />

            <div class="lg:pl-64">
                <MobileTopBar on_menu=Callback::new(move |_| send(PanelEvent::OpenRequested))/>

                <main class="animate-fade-in">{children()}</main>
            </div>
        </div>
    }
}
