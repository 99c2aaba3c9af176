/// Enrollments page

use leptos::*;

use super::PageHeader;
use crate::components::card::Card;

#[component]
pub fn EnrollmentsPage() -> impl IntoView {
    view! {
        <div class="p-6 space-y-6">
            <PageHeader title="Enrollments" description="Manage course enrollments"/>

            <Card>
                <p class="text-center text-sm text-foreground/60">
                    "No enrollments to show yet."
                </p>
            </Card>
        </div>
    }
}
