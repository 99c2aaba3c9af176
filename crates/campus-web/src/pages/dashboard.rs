/// Dashboard page
///
/// Landing page after sign-in.

use leptos::*;

use super::PageHeader;
use crate::auth::use_session;
use crate::components::card::Card;
use crate::shell::derive_display_identity;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        let display = derive_display_identity(&session.current().unwrap_or_default());
        format!("Signed in as {} ({})", display.identity, display.role)
    };

    view! {
        <div class="p-6 space-y-6">
            <PageHeader title="Dashboard" description="Overview of students, courses and enrollments"/>

            <Card title="Welcome">
                <p class="text-sm text-foreground/70">{greeting}</p>
            </Card>
        </div>
    }
}
