use actix_session::{Session, SessionExt, SessionInsertError};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use ems_shared::session::UserSessionInfo;
use std::future::{ready, Ready};
use tracing::warn;

/// The login session of a request
///
/// Everything the application keeps in the session is a single
/// [`UserSessionInfo`] under the `user_info` key. It is written only by the
/// login route and cleared by logout. Reading it never fails: the store may be
/// shared (eg. Redis), so whatever is found is checked by
/// [`UserSessionInfo::from_stored`]. Data without a usable user id reads as
/// logged out.
pub struct TypedSession(Session);

impl TypedSession {
    const USER_INFO_KEY: &'static str = "user_info";

    /// Changes the session key, done on login to prevent session fixation
    pub fn renew(&self) {
        self.0.renew();
    }

    pub fn insert_user_info(&self, user_info: UserSessionInfo) -> Result<(), SessionInsertError> {
        self.0.insert(Self::USER_INFO_KEY, user_info)
    }

    /// `None` means nobody is logged in on this session
    pub fn get_user_info(&self) -> Option<UserSessionInfo> {
        match self.0.get::<serde_json::Value>(Self::USER_INFO_KEY) {
            Ok(stored) => stored.and_then(|x| UserSessionInfo::from_stored(&x)),
            Err(e) => {
                warn!(?e, "unreadable user info in session, treating as logged out");
                None
            }
        }
    }

    pub fn log_out(self) {
        self.0.purge()
    }
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
