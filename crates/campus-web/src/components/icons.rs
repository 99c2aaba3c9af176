/// Inline SVG icons (lucide outlines)

use leptos::*;

use crate::shell::NavIcon;

#[component]
fn Outline(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn DashboardIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <rect x="3" y="3" width="7" height="9" rx="1"/>
            <rect x="14" y="3" width="7" height="5" rx="1"/>
            <rect x="14" y="12" width="7" height="9" rx="1"/>
            <rect x="3" y="16" width="7" height="5" rx="1"/>
        </Outline>
    }
}

#[component]
pub fn UsersIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        </Outline>
    }
}

#[component]
pub fn BookOpenIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/>
            <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>
        </Outline>
    }
}

#[component]
pub fn ClipboardListIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <rect x="8" y="2" width="8" height="4" rx="1"/>
            <path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"/>
            <path d="M12 11h4"/>
            <path d="M12 16h4"/>
            <path d="M8 11h.01"/>
            <path d="M8 16h.01"/>
        </Outline>
    }
}

#[component]
pub fn LogOutIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <polyline points="16 17 21 12 16 7"/>
            <line x1="21" y1="12" x2="9" y2="12"/>
        </Outline>
    }
}

#[component]
pub fn MenuIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <line x1="4" y1="6" x2="20" y2="6"/>
            <line x1="4" y1="12" x2="20" y2="12"/>
            <line x1="4" y1="18" x2="20" y2="18"/>
        </Outline>
    }
}

#[component]
pub fn CloseIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        </Outline>
    }
}

#[component]
pub fn ShieldIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>
        </Outline>
    }
}

#[component]
pub fn AlertIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=class>
            <circle cx="12" cy="12" r="10"/>
            <line x1="12" y1="8" x2="12" y2="12"/>
            <line x1="12" y1="16" x2="12.01" y2="16"/>
        </Outline>
    }
}

#[component]
pub fn LoadingIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Outline class=format!("animate-spin {}", class)>
            <path d="M21 12a9 9 0 1 1-6.219-8.56"/>
        </Outline>
    }
}

/// Icon for a sidebar destination.
#[component]
pub fn NavIconView(icon: NavIcon, #[prop(into, optional)] class: String) -> impl IntoView {
    match icon {
        NavIcon::Dashboard => view! { <DashboardIcon class=class/> }.into_view(),
        NavIcon::Students => view! { <UsersIcon class=class/> }.into_view(),
        NavIcon::Courses => view! { <BookOpenIcon class=class/> }.into_view(),
        NavIcon::Enrollments => view! { <ClipboardListIcon class=class/> }.into_view(),
    }
}
