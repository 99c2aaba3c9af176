/// Students page

use leptos::*;

use super::PageHeader;
use crate::components::card::Card;

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! {
        <div class="p-6 space-y-6">
            <PageHeader title="Students" description="Manage student records"/>

            <Card>
                <p class="text-center text-sm text-foreground/60">
                    "No students to show yet."
                </p>
            </Card>
        </div>
    }
}
