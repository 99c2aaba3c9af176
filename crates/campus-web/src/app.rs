/// Main application component and routing
///
/// Defines the root App component with routing and the session provider, and
/// gates the shell behind a signed-in session.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::auth::{use_session, AuthProvider};
use crate::components::shell::Shell;
use crate::config::{AUTH_PATH, BRANDING};
use crate::pages::{
    auth::AuthPage,
    courses::CoursesPage,
    dashboard::DashboardPage,
    enrollments::EnrollmentsPage,
    not_found::NotFoundPage,
    students::StudentsPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-web.css"/>
        <Title text=BRANDING.institution_name/>
        <Meta name="description" content="College management system"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <AuthProvider>
                <Routes>
                    <Route path=AUTH_PATH view=AuthPage/>

                    <Route path="/" view=ProtectedLayout>
                        <Route path="" view=DashboardPage/>
                        <Route path="dashboard" view=DashboardPage/>
                        <Route path="students" view=StudentsPage/>
                        <Route path="courses" view=CoursesPage/>
                        <Route path="enrollments" view=EnrollmentsPage/>
                        <Route path="*any" view=NotFoundPage/>
                    </Route>
                </Routes>
            </AuthProvider>
        </Router>
    }
}

/// Renders the shell around the matched page once a session is known to exist.
///
/// The signed-in check is untracked: signing out from inside the shell must not
/// tear it down before the shell's own redirect to the auth screen.
#[component]
fn ProtectedLayout() -> impl IntoView {
    let session = use_session();

    move || {
        if !session.is_ready() {
            return view! {
                <div class="min-h-screen flex items-center justify-center text-sm text-foreground/60">
                    "Loading..."
                </div>
            }
            .into_view();
        }

        if untrack(|| session.is_signed_in()) {
            view! {
                <Shell session=session.clone()>
                    <Outlet/>
                </Shell>
            }
            .into_view()
        } else {
            view! { <Redirect path=AUTH_PATH/> }.into_view()
        }
    }
}
