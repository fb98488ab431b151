use crate::helpers::{assert_is_redirect_to, spawn_app};
use reqwest::{header::LOCATION, StatusCode};
use rstest::rstest;

#[rstest]
#[case::dashboard("/pages/dashboard")]
#[case::payroll("/pages/payroll")]
#[case::logout("/pages/logout")]
#[tokio::test]
async fn anonymous_requests_are_redirected_to_login(#[case] page: &str) {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_page(page).await;

    // Assert
    assert_is_redirect_to(&response, &app.login_location());
    assert!(
        response.text().await.unwrap().is_empty(),
        "no page content should be sent with the redirect"
    );
}

#[tokio::test]
async fn login_page_is_open() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_page("/pages/login").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"name="user_id""#));
    assert!(body.contains(&format!(r#"action="{}""#, app.login_location())));
}

#[tokio::test]
async fn tampered_session_cookie_is_treated_as_logged_out() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .api_client
        .get(format!("{}{}", app.address, app.page_path("/pages/payroll")))
        .header("Cookie", "id=not-a-signed-session")
        .send()
        .await
        .unwrap();

    // Assert
    assert_is_redirect_to(&response, &app.login_location());
}

#[tokio::test]
async fn page_without_access_entry_is_refused() {
    // Arrange
    let app = spawn_app().await;
    app.login_assert(&app.admin).await;

    // Act
    let response = app.get_page("/pages/employees").await;

    // Assert
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.headers().get(LOCATION).is_none());
}

#[tokio::test]
async fn unknown_path_outside_pages_is_not_found() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/does_not_exist").await;

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().contains("/does_not_exist"));
}

#[rstest]
#[case::admin("admin")]
#[case::manager("manager")]
#[case::employee("employee")]
#[tokio::test]
async fn every_role_can_see_dashboard(#[case] which: &str) {
    // Arrange
    let app = spawn_app().await;
    let user = match which {
        "admin" => &app.admin,
        "manager" => &app.manager,
        _ => &app.employee,
    };
    app.login_assert(user).await;

    // Act
    let response = app.get_page("/pages/dashboard").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(&user.escaped_display_name()), "{body}");
    assert!(!body.contains("<O'Tester>"), "display name must be escaped");
}
