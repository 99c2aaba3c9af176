/// Campus Web Admin Server
///
/// Axum-based server that serves the Leptos web application with SSR support.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use campus_web::app::*;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::{services::ServeDir, trace::TraceLayer};
    use tracing::info;

    campus_web::logging::init_server();

    // Settings come from [package.metadata.leptos], overridable via LEPTOS_* env vars
    let conf = get_configuration(None)
        .await
        .context("failed to load leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback_service(ServeDir::new(&*leptos_options.site_root))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "campus web listening");

    axum::serve(listener, app.into_make_service())
        .await
        .context("server terminated")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydrate entry point
}
