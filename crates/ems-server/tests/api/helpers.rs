use argon2::{password_hash::SaltString, PasswordHasher};
use ems_server::{
    authentication::argon2_settings, get_configuration, get_socket_address, ApiServerBuilder,
    Configuration, UserAccount,
};
use ems_shared::{
    telemetry::{self, get_subscriber, init_subscriber},
    uac::{Role, UserId},
};
use reqwest::{header::LOCATION, redirect, Client, Response, StatusCode};
use secrecy::SecretString;
use std::{fmt::Debug, ops::Deref, sync::LazyLock};
use uuid::Uuid;

// Ensure that the `tracing` stack is only initialised once
pub static TRACING: LazyLock<String> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let log_file_name = format!("server_tests{}", Uuid::new_v4());
        let (file, path) = telemetry::create_trace_file(&log_file_name).unwrap();
        let subscriber = get_subscriber(subscriber_name, default_filter_level, file);
        init_subscriber(subscriber).unwrap();
        format!("Traces for tests being written to: {path:?}")
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
        "Traces set to std::io::sink".to_string()
    }
});

pub struct TestApp {
    pub address: String,
    pub base_path: String,
    pub admin: TestUser,
    pub manager: TestUser,
    pub employee: TestUser,
    pub api_client: Client,
}

impl Debug for TestApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestApp")
            .field("address", &self.address)
            .field("base_path", &self.base_path)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub user_id: String,
    pub display_name: String,
    pub password: String,
    pub role: Role,
}

impl TestUser {
    pub fn generate(role: Role) -> Self {
        let prefix = role.as_ref().to_lowercase();
        let remaining_length = UserId::MAX_LENGTH - prefix.len() - 1;
        let user_id = format!("{prefix}-{}", &Uuid::new_v4().to_string()[..remaining_length]);
        Self {
            // Includes markup so tests can check it is escaped when shown
            display_name: format!("{role} <O'Tester>"),
            user_id,
            password: Uuid::new_v4().to_string(),
            role,
        }
    }

    /// Builds the user directory entry, hashing with the production parameters
    pub fn account(&self) -> UserAccount {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let password_hash = argon2_settings()
            .hash_password(self.password.as_bytes(), &salt)
            .unwrap()
            .to_string();
        UserAccount {
            user_id: self.user_id.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
            password_hash: SecretString::from(password_hash),
        }
    }

    pub fn escaped_display_name(&self) -> String {
        format!("{} &lt;O&#039;Tester&gt;", self.role)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Starts a server on a random port with a user of each role. `customize` can
/// change the configuration before the server is built
pub async fn spawn_app_with(customize: impl FnOnce(&mut Configuration)) -> TestApp {
    start_tracing();
    let admin = TestUser::generate(Role::Admin);
    let manager = TestUser::generate(Role::Manager);
    let employee = TestUser::generate(Role::Employee);

    let mut configuration = get_configuration().expect("failed to read configuration");
    // Use a random OS port
    configuration.application.port = 0;
    configuration.application.host = "127.0.0.1".to_string();
    configuration.application.cookie_secure = false;
    configuration.users = vec![admin.account(), manager.account(), employee.account()];
    customize(&mut configuration);

    let base_path = configuration
        .application
        .base_path
        .trim_end_matches('/')
        .to_string();
    let addr = get_socket_address(&configuration.application)
        .expect("failed to get socket address");
    let server_builder = ApiServerBuilder::new(configuration, env!("CARGO_PKG_VERSION"))
        .expect("failed to build application");
    let (api_server, port) = server_builder
        .build_runnable_api_server(addr)
        .await
        .expect("failed to finalize application");
    // Not awaited, the server is dropped when the test's runtime shuts down
    let _ = tokio::spawn(api_server.run());

    let api_client = Client::builder()
        .redirect(redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address: format!("http://localhost:{port}"),
        base_path,
        admin,
        manager,
        employee,
        api_client,
    }
}

fn start_tracing() {
    // Accessing TRACING also forces the LazyLock to initialize
    let logging_msg = TRACING.deref();
    println!("{logging_msg}");
}

impl TestApp {
    /// Path (without host) of a page given its path relative to the base path
    pub fn page_path(&self, relative_path: &str) -> String {
        format!("{}{relative_path}", self.base_path)
    }

    pub fn login_location(&self) -> String {
        self.page_path("/pages/login")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.api_client
            .get(format!("{}{path}", self.address))
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn get_page(&self, relative_path: &str) -> Response {
        self.get(&self.page_path(relative_path)).await
    }

    pub async fn post_login(&self, user_id: &str, password: &str) -> Response {
        self.api_client
            .post(format!("{}{}", self.address, self.login_location()))
            .form(&[("user_id", user_id), ("password", password)])
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn login(&self, user: &TestUser) -> Response {
        self.post_login(&user.user_id, &user.password).await
    }

    pub async fn login_assert(&self, user: &TestUser) {
        let response = self.login(user).await;
        assert_is_redirect_to(&response, &self.page_path("/pages/dashboard"));
    }

    pub async fn logout(&self) -> Response {
        self.get_page("/pages/logout").await
    }
}

#[track_caller]
pub fn assert_is_redirect_to(response: &Response, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .expect("redirect without location")
            .to_str()
            .unwrap(),
        location
    );
}
