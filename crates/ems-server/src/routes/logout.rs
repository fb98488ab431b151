use super::see_other;
use crate::session_state::TypedSession;
use actix_web::{web, HttpResponse};
use ems_shared::{gate::AccessGate, session::UserSessionInfo};
use tracing::info;

/// Only reachable with a session (the gate redirects otherwise)
#[tracing::instrument(skip_all, fields(user_id = %user_info.user_id))]
pub async fn log_out(
    session: TypedSession,
    user_info: web::ReqData<UserSessionInfo>,
    gate: web::Data<AccessGate>,
) -> HttpResponse {
    session.log_out();
    info!("logged out");
    see_other(gate.login_location())
}
