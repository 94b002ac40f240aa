mod auth;

use axum::{http::HeaderMap, routing::post, Form, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower_http::compression::CompressionLayer;
use tower_sessions::{cookie::SameSite, MemoryStore, Session, SessionManagerLayer};
use voting_app::AppContext;
use voting_ui::App;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax);

    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/auth/google", post({
            let ctx = app_context.clone();
            move |session: Session, headers: HeaderMap, Form(form): Form<auth::GoogleCallback>| {
                let ctx = ctx.clone();
                async move { auth::google_callback(ctx, session, headers, form).await }
            }
        }))
        .route("/auth/logout", post({
            let ctx = app_context.clone();
            move |session: Session| {
                let ctx = ctx.clone();
                async move { auth::logout(ctx, session).await }
            }
        }))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(session_layer)
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

const SHELL_CSS: &str = r#"
    :root {
        --bg: #f6f7fb;
        --card: #ffffff;
        --border: #e3e6ef;
        --text: #2b2d42;
        --muted: #8d93a8;
        --primary: #3f51b5;
        --accent: #7b61ff;
        --success: #2e8b57;
        --danger: #c0392b;
        --danger-soft: #fdecea;
        --warn: #f0a500;
    }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); }
    a { color: var(--primary); }
    .container { max-width: 860px; margin: 0 auto; padding: 1rem 1.25rem; }

    .nav { display: flex; justify-content: space-between; align-items: center; padding: 0.6rem 1.25rem; background: var(--card); border-bottom: 1px solid var(--border); }
    .nav__brand { font-weight: 700; font-size: 1.15rem; color: var(--accent); text-decoration: none; }
    .nav__user { display: flex; align-items: center; gap: 0.6rem; }
    .nav__name { font-weight: 600; }
    .nav__badge { font-size: 0.75rem; padding: 0 0.35rem; border-radius: 3px; background: var(--warn); color: var(--card); }
    .nav__logout-button { padding: 0.2rem 0.7rem; border: 1px solid var(--border); border-radius: 4px; background: none; color: var(--muted); cursor: pointer; }

    .panel, .auth { margin: 1.5rem 0; padding: 1.5rem; background: var(--card); border: 1px solid var(--border); border-radius: 10px; }
    .panel__title, .auth__title { margin-bottom: 1rem; text-align: center; font-size: 1.5rem; color: var(--accent); }
    .panel__subtitle { margin: 1.25rem 0 0.6rem; font-size: 1.15rem; color: var(--primary); }
    .auth__hint, .auth__switch { margin-top: 1rem; text-align: center; color: var(--muted); }
    .g_id_signin { display: flex; justify-content: center; margin: 1.25rem 0; }

    .signup-form, .candidate-form { display: flex; flex-direction: column; gap: 0.6rem; }
    .signup-form__input, .candidate-form__input { padding: 0.6rem 0.8rem; font-size: 1rem; border: 1px solid var(--border); border-radius: 6px; background: var(--bg); color: var(--text); }
    .signup-form__input:focus, .candidate-form__input:focus { outline: 2px solid var(--primary); }
    .signup-form__button, .candidate-form__button, .ballot__button, .admin__reset { padding: 0.6rem 1.2rem; border: none; border-radius: 6px; font-weight: 600; color: var(--card); background: var(--primary); cursor: pointer; }
    .admin__reset { margin-top: 0.75rem; background: var(--danger); }
    button:disabled { opacity: 0.5; cursor: not-allowed; }

    .ballot { display: grid; grid-template-columns: repeat(auto-fill, minmax(190px, 1fr)); gap: 0.75rem; list-style: none; }
    .ballot__card { padding: 1rem; text-align: center; border: 1px solid var(--border); border-radius: 8px; background: var(--bg); }
    .ballot__image { width: 88px; height: 88px; border-radius: 50%; object-fit: cover; }
    .ballot__name { font-size: 1.1rem; font-weight: 700; color: var(--accent); }
    .ballot__party, .ballot__age { margin-bottom: 0.4rem; color: var(--muted); }
    .ballot__voted { text-align: center; font-weight: 600; color: var(--success); }

    .tally__list { display: flex; flex-direction: column; gap: 0.8rem; list-style: none; }
    .tally__label { font-weight: 600; }
    .tally__track { height: 0.9rem; margin: 0.2rem 0; overflow: hidden; border-radius: 6px; background: var(--border); }
    .tally__bar { height: 100%; background: var(--accent); }
    .tally__percentage, .tally__total, .tally__empty, .roster__empty, .ballot__empty { font-size: 0.9rem; color: var(--muted); }
    .tally__total { margin-top: 0.8rem; }
    .roster { list-style: none; }
    .roster__item { padding: 0.25rem 0; font-size: 0.9rem; border-bottom: 1px solid var(--border); }
    .roster__item--voted { color: var(--success); }

    .notice { display: flex; align-items: center; gap: 0.6rem; margin-bottom: 1rem; padding: 0.6rem 0.9rem; border-radius: 6px; color: var(--card); }
    .notice--success { background: var(--success); }
    .notice--error { background: var(--danger); }

    .loading { padding: 2rem; text-align: center; }
    .loading__spinner { display: inline-block; width: 36px; height: 36px; border: 3px solid var(--border); border-top-color: var(--primary); border-radius: 50%; animation: turn 0.8s linear infinite; }
    @keyframes turn { to { transform: rotate(1turn); } }
    .loading__text { margin-top: 0.6rem; color: var(--muted); }

    .error { margin: 1rem 0; padding: 1rem; border-left: 4px solid var(--danger); border-radius: 4px; background: var(--danger-soft); }
    .error__title { margin-bottom: 0.3rem; font-weight: 700; color: var(--danger); }
    .error__retry { margin-top: 0.75rem; padding: 0.4rem 0.9rem; border: none; border-radius: 4px; color: var(--card); background: var(--danger); cursor: pointer; }
"#;

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🗳</text></svg>"/>
                <style>{SHELL_CSS}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_css_styles_rendered_classes() {
        for class in [
            ".tally__bar",
            ".tally__empty",
            ".roster__item--voted",
            ".notice--error",
            ".ballot__button",
            ".error__retry",
            ".loading__spinner",
        ] {
            assert!(SHELL_CSS.contains(class), "missing {class}");
        }
    }
}
