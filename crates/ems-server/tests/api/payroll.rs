use crate::helpers::spawn_app;
use reqwest::{header::LOCATION, StatusCode};

#[tokio::test]
async fn employee_is_denied_and_sees_no_page_content() {
    // Arrange
    let app = spawn_app().await;
    app.login_assert(&app.employee).await;

    // Act
    let response = app.get_page("/pages/payroll").await;

    // Assert
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(
        response.headers().get(LOCATION).is_none(),
        "a denial must not relocate"
    );
    assert_eq!(response.text().await.unwrap(), "Access denied.");
}

#[tokio::test]
async fn admin_sees_payroll() {
    // Arrange
    let app = spawn_app().await;
    app.login_assert(&app.admin).await;

    // Act
    let response = app.get_page("/pages/payroll").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Payroll (Kwacha)"));
    assert!(body.contains("K 250,000.00"));
    assert!(body.contains("K 8,200.00"));
    assert!(body.contains("K 35,000.00"));
}

#[tokio::test]
async fn manager_sees_payroll() {
    // Arrange
    let app = spawn_app().await;
    app.login_assert(&app.manager).await;

    // Act
    let response = app.get_page("/pages/payroll").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("K 250,000.00"));
}

#[tokio::test]
async fn employee_denial_does_not_end_the_session() {
    // Arrange
    let app = spawn_app().await;
    app.login_assert(&app.employee).await;

    // Act
    let denied = app.get_page("/pages/payroll").await;
    let dashboard = app.get_page("/pages/dashboard").await;

    // Assert
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    assert_eq!(dashboard.status(), StatusCode::OK);
}
