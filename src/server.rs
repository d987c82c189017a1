//! Local HTTP host for the dashboard.
//!
//! One axum router serves the rendered page. Each browser gets an opaque
//! session cookie; per-session state lives in the shared [`SessionStore`]
//! behind a lock because the runtime is multi-threaded, but a given session
//! is only ever touched by the request currently rendering it.

use crate::config::Config;
use crate::error::ServeError;
use crate::page::{self, Page, PageConfig};
use crate::state::{generate_session_id, SessionState, SessionStore};
use crate::theme::Theme;
use crate::widgets;
use axum::extract::{Query, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Fixed local bind address.
pub const BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
/// Fixed dashboard port.
pub const PORT: u16 = 8501;

/// Name of the session identity cookie.
const SESSION_COOKIE: &str = "bivista_sid";

/// Shared state handed to every request handler.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub page_config: PageConfig,
    pub sessions: RwLock<SessionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<AppState> {
        Arc::new(AppState {
            config,
            page_config: PageConfig::default(),
            sessions: RwLock::new(SessionStore::new()),
        })
    }
}

/// Build the dashboard router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(render_dashboard))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}

/// Serve the dashboard on the fixed local endpoint until Ctrl-C.
pub async fn serve(state: Arc<AppState>) -> Result<(), ServeError> {
    let addr = SocketAddr::new(BIND_ADDR, PORT);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "dashboard listening");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    // Interrupt is a clean exit, not a fault.
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown requested");
}

/// `GET /` — render the full page for the caller's session.
async fn render_dashboard(
    State(app): State<Arc<AppState>>,
    Query(params): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let (session_id, new_session) = match session_id_from_headers(&headers) {
        Some(id) => (id, false),
        None => (generate_session_id(), true),
    };

    let html = {
        let Ok(mut sessions) = app.sessions.write() else {
            return (
                HeaderMap::new(),
                Html("<p>session store unavailable</p>".to_string()),
            );
        };
        let state = ensure_session(&mut sessions, &session_id, &app.config);
        if let Some(theme) = params.get("theme") {
            state.selected_theme = Theme::from_name(theme);
            debug!(session = %session_id, theme = state.selected_theme.name(), "theme switched");
        }

        let mut body = Page::new();
        body.push(page::header_section(state));
        let config_errors = app.config.validate();
        if !config_errors.is_empty() {
            body.push(widgets::info_box(
                &config_errors.join("; "),
                widgets::BoxKind::Warning,
                Some("Configuration Issues Detected"),
            ));
        }
        body.push(widgets::status_messages(state));
        if state.data_loaded {
            body.push(page::overview_section(state));
            body.push(page::analysis_section(state));
            body.push(page::dashboard_section(state));
        } else {
            body.push(page::welcome_section(state));
        }
        body.push("<div class=\"footer\">Built with BI Assistant</div>");
        body.render(&app.page_config, state.selected_theme)
    };

    let mut response_headers = HeaderMap::new();
    if new_session {
        let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = cookie.parse() {
            response_headers.insert(SET_COOKIE, value);
        }
    }
    (response_headers, Html(html))
}

/// Look up a session, creating it with configured defaults when absent.
///
/// Creation is detected at the store, not from cookie presence: a cookie
/// minted before a server restart still names a session the fresh store has
/// never seen, and that session must pick up the configured defaults too.
fn ensure_session<'a>(
    sessions: &'a mut SessionStore,
    session_id: &str,
    config: &Config,
) -> &'a mut SessionState {
    let created = sessions.get(session_id).is_none();
    let state = sessions.initialize(session_id);
    if created {
        state.selected_theme = Theme::from_name(&config.display.theme);
        state.ai_enabled = config.ai_enabled();
    }
    state
}

/// Extract the session id from the request's cookie header, if present.
fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}
