use crate::helpers::spawn_app;
use reqwest::StatusCode;

#[tokio::test]
async fn health_check_works() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/health_check").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.content_length(), Some(0));
}

#[tokio::test]
async fn version_is_reported() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/version").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), env!("CARGO_PKG_VERSION"));
}
