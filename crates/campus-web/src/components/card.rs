/// Card component for page bodies

use leptos::*;

#[component]
pub fn Card(
    #[prop(optional)]
    title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-border p-6">
            {title.map(|title| view! {
                <h3 class="text-sm font-semibold text-foreground mb-4">{title}</h3>
            })}
            {children()}
        </div>
    }
}
