/// 404 Not Found page
///
/// Rendered inside the shell for unknown paths; no destination is highlighted.

use leptos::*;
use leptos_router::*;

use crate::config::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-foreground">"404"</h1>
                <p class="mt-4 text-xl text-foreground/70">"Page not found"</p>
                <div class="mt-8">
                    <A
                        href=HOME_PATH
                        class="inline-flex items-center px-4 py-2 text-sm font-medium rounded-md bg-sidebar-primary text-sidebar-primary-foreground"
                    >
                        "Go to Dashboard"
                    </A>
                </div>
            </div>
        </div>
    }
}
