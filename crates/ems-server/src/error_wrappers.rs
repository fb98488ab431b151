use actix_web::http::StatusCode;

/// Wraps any error as a 500 without leaking the detail to the client beyond
/// its display text
pub fn e500<T>(e: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    actix_web::error::InternalError::new(e, StatusCode::INTERNAL_SERVER_ERROR).into()
}
