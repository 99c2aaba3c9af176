/// Sidebar navigation component
///
/// Brand block, destination list with the active entry highlighted, and the
/// signed-in user section with the sign-out control. Slides in as a drawer on
/// narrow viewports and stays pinned on wide ones.

use leptos::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::*;
use crate::config::BRANDING;
use crate::shell::{
    destination_entries, nav_item_class, panel_class, DisplayIdentity, NavDestination, NavEntry,
    PanelState, DESTINATIONS,
};

#[component]
pub fn Sidebar(
    #[prop(into)]
    panel: Signal<PanelState>,
    #[prop(into)]
    current_path: Signal<String>,
    #[prop(into)]
    identity: Signal<DisplayIdentity>,
    #[prop(into)]
    signing_out: Signal<bool>,
    on_close: Callback<()>,
    on_select: Callback<NavDestination>,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    view! {
        <aside class=move || panel_class(panel.get())>
            <div class="flex flex-col h-full">
                <div class="flex items-center gap-3 px-4 py-5 border-b border-sidebar-border">
                    <div class="flex items-center justify-center w-12 h-12 rounded-lg bg-sidebar-primary/20">
                        <img
                            src=BRANDING.logo_src
                            alt=BRANDING.logo_alt
                            class="h-10 w-10 object-contain"
                        />
                    </div>

                    <div class="flex-1">
                        <h2 class="text-sm font-semibold text-sidebar-foreground">
                            {BRANDING.institution_name}
                        </h2>
                        <p class="text-xs text-sidebar-foreground/60">
                            {BRANDING.subtitle}
                        </p>
                    </div>

                    <button
                        type="button"
                        class="lg:hidden text-sidebar-foreground"
                        aria-label="Close navigation"
                        on:click=move |_| on_close.call(())
                    >
                        <CloseIcon class="h-5 w-5"/>
                    </button>
                </div>

                <nav class="flex-1 px-3 py-4 space-y-1 overflow-y-auto">
                    {move || {
                        destination_entries(DESTINATIONS, &current_path.get())
                            .into_iter()
                            .map(|entry| view! { <NavItem entry=entry on_select=on_select/> })
                            .collect_view()
                    }}
                </nav>

                <UserSection identity=identity signing_out=signing_out on_sign_out=on_sign_out/>
            </div>
        </aside>
    }
}

#[component]
fn NavItem(entry: NavEntry, on_select: Callback<NavDestination>) -> impl IntoView {
    let destination = entry.destination;

    view! {
        <a
            href=destination.path
            class=nav_item_class(entry.active)
            aria-current=entry.active.then_some("page")
            on:click=move |ev: ev::MouseEvent| {
                // Let the browser handle open-in-new-tab gestures
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
                    return;
                }
                ev.prevent_default();
                on_select.call(destination);
            }
        >
            <NavIconView icon=destination.icon class="h-5 w-5"/>
            <span>{destination.label}</span>
        </a>
    }
}

#[component]
fn UserSection(
    #[prop(into)]
    identity: Signal<DisplayIdentity>,
    #[prop(into)]
    signing_out: Signal<bool>,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="p-3 border-t border-sidebar-border">
            <div class="flex items-center gap-3 px-3 py-2 mb-2">
                <div class="flex items-center justify-center w-8 h-8 rounded-full bg-sidebar-accent">
                    <UsersIcon class="h-4 w-4 text-sidebar-foreground"/>
                </div>

                <div class="flex-1 min-w-0">
                    <p class="text-sm font-medium text-sidebar-foreground truncate">
                        {move || identity.with(|i| i.identity.clone())}
                    </p>
                    <div class="flex items-center gap-1">
                        <ShieldIcon class="h-3 w-3 text-sidebar-primary"/>
                        <p class="text-xs text-sidebar-foreground/60 capitalize">
                            {move || identity.with(|i| i.role.clone())}
                        </p>
                    </div>
                </div>
            </div>

            <Button
                variant=ButtonVariant::Ghost
                class="w-full justify-start text-sidebar-foreground/70 hover:text-sidebar-foreground hover:bg-sidebar-accent"
                disabled=signing_out
                on_click=Callback::new(move |_| on_sign_out.call(()))
            >
                <LogOutIcon class="h-4 w-4 mr-2"/>
                "Sign Out"
            </Button>
        </div>
    }
}
