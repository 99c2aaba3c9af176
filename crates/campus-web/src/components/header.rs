/// Mobile top bar
///
/// Shown below the `lg` breakpoint only: the menu control that opens the drawer
/// and a compact brand mark.

use leptos::*;

use crate::components::icons::MenuIcon;
use crate::config::BRANDING;

#[component]
pub fn MobileTopBar(
    /// Fired when the menu control is activated.
    on_menu: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-30 bg-background border-b border-border lg:hidden">
            <div class="flex items-center justify-between px-4 py-3">
                <button
                    type="button"
                    class="text-foreground"
                    aria-label="Open navigation"
                    on:click=move |_| on_menu.call(())
                >
                    <MenuIcon class="h-6 w-6"/>
                </button>

                <div class="flex items-center gap-2">
                    <img
                        src=BRANDING.logo_src
                        alt="logo"
                        class="h-8 w-8 object-contain rounded-full"
                    />
                    <span class="font-semibold">{BRANDING.short_name}</span>
                </div>

                // Balances the menu button so the brand stays centred
                <div class="w-6"></div>
            </div>
        </header>
    }
}
