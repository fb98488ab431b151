use crate::{
    authentication::{validate_page_access, UserDirectory},
    configuration::ApplicationSettings,
    routes::{dashboard, health_check, log_out, login, login_form, not_found, payroll},
    Configuration,
};
#[cfg(all(not(feature = "redis-session-rustls"), feature = "cookie-session"))]
use actix_session::storage::CookieSessionStore;
#[cfg(feature = "redis-session-rustls")]
use actix_session::storage::RedisSessionStore;
use actix_session::SessionMiddleware;
use actix_web::{
    cookie::Key, middleware::from_fn, web, App, HttpResponse, HttpServer, Route,
};
use anyhow::{bail, Context as _};
use ems_shared::{
    const_config::path::{
        PATH_HEALTH_CHECK, PATH_PAGES_SCOPE, PATH_PAGE_DASHBOARD, PATH_PAGE_LOGIN,
        PATH_PAGE_LOGIN_SUBMIT, PATH_PAGE_LOGOUT, PATH_PAGE_PAYROLL, PATH_VERSION,
        PathSpec,
    },
    gate::AccessGate,
    telemetry,
};
use secrecy::ExposeSecret as _;
use std::{
    net::{SocketAddr, TcpListener},
    str::FromStr,
};
use tracing::{info, instrument};
use tracing_actix_web::TracingLogger;

/// Initializes Tracing
pub fn initialize_tracing<Sink, D, N>(
    subscriber_name: N,
    default_env_filter_directive: D,
    sink: Sink,
) where
    Sink: for<'b> tracing_subscriber::fmt::MakeWriter<'b> + Send + Sync + 'static,
    D: AsRef<str>,
    N: Into<String>,
{
    let subscriber =
        telemetry::get_subscriber(subscriber_name.into(), default_env_filter_directive, sink);
    telemetry::init_subscriber(subscriber).expect("failed to initialize the subscriber");
}

/// Validated pieces needed to build the server
pub struct ApiServerBuilder {
    gate: AccessGate,
    user_directory: UserDirectory,
    configuration: Configuration,
    pkg_version: &'static str,
}

pub struct RunnableApiServer(actix_web::dev::Server);

impl ApiServerBuilder {
    /// Fails if the configuration cannot be used (bad base path, short secret
    /// or invalid user accounts)
    pub fn new(configuration: Configuration, pkg_version: &'static str) -> anyhow::Result<Self> {
        let base_path = &configuration.application.base_path;
        if !base_path.is_empty() && !base_path.starts_with('/') {
            bail!("base path must be empty or start with '/' but found {base_path:?}");
        }
        let gate = AccessGate::new(base_path);
        let user_directory = UserDirectory::from_accounts(&configuration.users)
            .context("failed to load user directory")?;
        if user_directory.is_empty() {
            tracing::warn!("no users configured, nobody will be able to log in");
        }
        info!(
            base_path = gate.base_path(),
            users = user_directory.len(),
            "API Server configuration validated"
        );
        Ok(Self {
            gate,
            user_directory,
            configuration,
            pkg_version,
        })
    }

    #[instrument(err(Debug), skip_all)]
    pub async fn build_runnable_api_server(
        self,
        addr: SocketAddr,
    ) -> anyhow::Result<(RunnableApiServer, u16)> {
        let Self {
            gate,
            user_directory,
            configuration,
            pkg_version,
        } = self;
        let secret_key = Key::try_from(
            configuration
                .application
                .hmac_secret
                .expose_secret()
                .as_bytes(),
        )
        .context("hmac secret is too short to use for signing cookies")?;
        let cookie_secure = configuration.application.cookie_secure;
        let base_path = gate.base_path().to_string();
        let gate = web::Data::new(gate);
        let user_directory = web::Data::new(user_directory);

        #[cfg(feature = "redis-session-rustls")]
        let session_store = {
            let redis_store =
                RedisSessionStore::new(configuration.redis_uri.expose_secret().to_string())
                    .await
                    .context("failed to connect to Redis")?;
            info!(
                session_store = "RedisSessionStore",
                "Successfully connected to Redis"
            );
            redis_store
        };

        let listener = TcpListener::bind(addr)
            .with_context(|| format!("failed to bind to address: {}", addr))?;
        let port = listener
            .local_addr()
            .context("failed to get local address of listener")?
            .port();
        info!(?port, "Port assigned to the server is {port}");

        let server = HttpServer::new(move || {
            #[cfg(all(not(feature = "redis-session-rustls"), feature = "cookie-session"))]
            let session_store = {
                info!(
                    // This info is repeated for each thread but less bad than duplicating the cfg
                    session_store = "CookieSessionStore",
                    "Using Cookie Only Session Storage"
                );
                CookieSessionStore::default()
            };

            #[cfg(feature = "redis-session-rustls")]
            let session_store = session_store.clone(); // When using redis we need to clone

            let session_middleware = SessionMiddleware::builder(session_store, secret_key.clone())
                .cookie_secure(cookie_secure)
                .build();

            App::new()
                .wrap(session_middleware)
                .wrap(TracingLogger::default())
                // Registered before the base path scope so an empty base path
                // does not shadow them
                .route(PATH_HEALTH_CHECK.path, web::get().to(health_check))
                .route(
                    PATH_VERSION.path,
                    web::get().to(move || async move {
                        HttpResponse::Ok().body(pkg_version.to_string())
                    }),
                )
                .service(
                    web::scope(&base_path).service(
                        web::scope(PATH_PAGES_SCOPE)
                            .wrap(from_fn(validate_page_access))
                            .route(
                                PATH_PAGE_LOGIN.scoped_path(),
                                page_method(&PATH_PAGE_LOGIN).to(login_form),
                            )
                            .route(
                                PATH_PAGE_LOGIN_SUBMIT.scoped_path(),
                                page_method(&PATH_PAGE_LOGIN_SUBMIT).to(login),
                            )
                            .route(
                                PATH_PAGE_LOGOUT.scoped_path(),
                                page_method(&PATH_PAGE_LOGOUT).to(log_out),
                            )
                            .route(
                                PATH_PAGE_DASHBOARD.scoped_path(),
                                page_method(&PATH_PAGE_DASHBOARD).to(dashboard),
                            )
                            .route(
                                PATH_PAGE_PAYROLL.scoped_path(),
                                page_method(&PATH_PAGE_PAYROLL).to(payroll),
                            ),
                    ),
                )
                .app_data(gate.clone())
                .app_data(user_directory.clone())
                .default_service(web::route().to(not_found))
        })
        .listen(listener)
        .context("Failed to bind HTTP Server to listener")?
        .run();
        info!(
            version = pkg_version,
            "API Server prepared to be run at version {}", pkg_version
        );
        Ok((RunnableApiServer(server), port))
    }
}

impl RunnableApiServer {
    pub async fn run(self) -> anyhow::Result<()> {
        self.0.await.context("api server crashed")
    }
}

fn page_method(spec: &PathSpec) -> Route {
    web::method(spec.method.clone())
}

pub fn get_socket_address(app_config: &ApplicationSettings) -> anyhow::Result<SocketAddr> {
    let address = format!("{}:{}", app_config.host, app_config.port);
    info!("Socket address to parse is: {address}");
    let result = SocketAddr::from_str(&address)
        .with_context(|| format!("failed to parse address: {address}"))?;
    Ok(result)
}
