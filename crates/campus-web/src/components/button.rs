/// Button component with the two variants the shell uses

use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-sidebar-primary text-sidebar-primary-foreground hover:opacity-90",
            ButtonVariant::Ghost => "bg-transparent",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(into, optional)]
    class: String,
    #[prop(optional)]
    button_type: Option<&'static str>,
    #[prop(into, optional)]
    disabled: MaybeSignal<bool>,
    #[prop(optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=format!(
                "inline-flex items-center px-4 py-2 text-sm font-medium rounded-md transition-colors disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                variant.class(),
                class,
            )
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
