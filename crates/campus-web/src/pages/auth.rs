/// Authentication page
///
/// Email/password sign-in. Every sign-out lands here.

use leptos::*;
use leptos_router::*;

use crate::auth::use_session;
use crate::components::button::Button;
use crate::components::icons::*;
use crate::config::{BRANDING, HOME_PATH};
use crate::types::Credentials;

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal::<Option<String>>(None);

    // Skip the form if a restored session is already present
    create_effect({
        let session = session.clone();
        let navigate = navigate.clone();
        move |_| {
            if session.is_ready() && untrack(|| session.is_signed_in()) {
                navigate(HOME_PATH, Default::default());
            }
        }
    });

    let sign_in = create_action(move |credentials: &Credentials| {
        let provider = session.provider();
        let credentials = credentials.clone();
        async move { provider.sign_in(credentials).await.map_err(|e| e.to_string()) }
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        sign_in.dispatch(Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    create_effect(move |_| {
        if let Some(result) = sign_in.value().get() {
            match result {
                Ok(_) => navigate(HOME_PATH, Default::default()),
                Err(error) => set_error_message.set(Some(error)),
            }
        }
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-background py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <div class="flex justify-center">
                        <img src=BRANDING.logo_src alt=BRANDING.logo_alt class="h-16 w-16 object-contain"/>
                    </div>
                    <h2 class="mt-6 text-3xl font-extrabold text-foreground">
                        {BRANDING.institution_name}
                    </h2>
                    <p class="mt-2 text-sm text-foreground/60">
                        {BRANDING.subtitle}
                    </p>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm font-medium text-foreground">
                                "Email"
                            </label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                autocomplete="username"
                                class="mt-1 block w-full px-3 py-2 border border-border rounded-md shadow-sm focus:outline-none focus:ring-sidebar-primary"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label for="password" class="block text-sm font-medium text-foreground">
                                "Password"
                            </label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                autocomplete="current-password"
                                class="mt-1 block w-full px-3 py-2 border border-border rounded-md shadow-sm focus:outline-none focus:ring-sidebar-primary"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <div class="flex gap-3 bg-red-50 border border-red-200 rounded-md p-4">
                            <AlertIcon class="h-5 w-5 text-red-600"/>
                            <div class="text-sm text-red-700">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </div>
                    </Show>

                    <Button
                        class="w-full justify-center"
                        button_type="submit"
                        disabled=sign_in.pending()
                    >
                        <Show
                            when=move || sign_in.pending().get()
                            fallback=|| view! { "Sign in" }
                        >
                            <span class="flex items-center gap-2">
                                <LoadingIcon class="h-4 w-4"/>
                                "Signing in..."
                            </span>
                        </Show>
                    </Button>
                </form>
            </div>
        </div>
    }
}
