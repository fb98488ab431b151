use crate::helpers::{assert_is_redirect_to, spawn_app_with};
use reqwest::StatusCode;

#[tokio::test]
async fn empty_base_path_mounts_pages_at_root() {
    // Arrange
    let app = spawn_app_with(|c| c.application.base_path = String::new()).await;

    // Act
    let response = app.get("/pages/payroll").await;

    // Assert
    assert_is_redirect_to(&response, "/pages/login");

    // Act - health check is still reachable
    let response = app.get("/health_check").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn custom_base_path_is_used_for_redirects() {
    // Arrange
    let app = spawn_app_with(|c| c.application.base_path = "/hr/".to_string()).await;

    // Act
    let response = app.get("/hr/pages/dashboard").await;

    // Assert
    assert_is_redirect_to(&response, "/hr/pages/login");

    // Act - login redirects inside the base path too
    app.login_assert(&app.admin).await;
    let response = app.get("/hr/pages/payroll").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn pages_are_not_served_outside_base_path() {
    // Arrange
    let app = spawn_app_with(|c| c.application.base_path = "/hr".to_string()).await;

    // Act
    let response = app.get("/pages/dashboard").await;

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
