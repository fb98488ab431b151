#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid User or Password")]
    InvalidUserOrPassword,
    #[error("Unexpected Error")]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum GateError {
    #[error("unable to find the access required for this path '{0}'")]
    PathNotFound(String),
}

pub mod conversions {
    use super::*;
    use actix_web::http::StatusCode;

    impl actix_web::error::ResponseError for GateError {
        fn status_code(&self) -> StatusCode {
            match self {
                GateError::PathNotFound(_) => StatusCode::SERVICE_UNAVAILABLE,
            }
        }
    }

    impl actix_web::error::ResponseError for AuthError {
        fn status_code(&self) -> StatusCode {
            match self {
                AuthError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                AuthError::InvalidUserOrPassword => StatusCode::UNAUTHORIZED,
            }
        }
    }
}
