/// Courses page

use leptos::*;

use super::PageHeader;
use crate::components::card::Card;

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <div class="p-6 space-y-6">
            <PageHeader title="Courses" description="Manage the course catalogue"/>

            <Card>
                <p class="text-center text-sm text-foreground/60">
                    "No courses to show yet."
                </p>
            </Card>
        </div>
    }
}
