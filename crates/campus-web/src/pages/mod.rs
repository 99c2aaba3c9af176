/// Page components for the campus web interface
///
/// The sign-in screen plus the pages rendered inside the shell's content slot.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod not_found;
pub mod students;

use leptos::*;

/// Title block shared by the destination pages.
#[component]
fn PageHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-foreground">{title}</h1>
            <p class="mt-1 text-sm text-foreground/60">{description}</p>
        </div>
    }
}
