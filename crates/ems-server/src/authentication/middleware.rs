use crate::error_wrappers::e500;
use crate::session_state::TypedSession;
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::{self, ContentType},
    middleware::Next,
    web, FromRequest, HttpMessage, HttpResponse,
};
use anyhow::anyhow;
use ems_shared::{
    gate::{AccessGate, AccessOutcome},
    uac::{get_required_access, GateError},
};
use tracing::{info, warn};

/// Runs every request for a page through the [`AccessGate`] before the page
/// handler is called. The handler is only called if the gate says to
/// continue, otherwise the gate's redirect or denial is sent and nothing else
///
/// Pages without an entry in the access table are refused (See
/// [`ems_shared::uac::get_required_access`])
#[tracing::instrument(skip(next), fields(user_id = tracing::field::Empty))]
pub async fn validate_page_access<B: MessageBody>(
    mut req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    let gate = req
        .app_data::<web::Data<AccessGate>>()
        .cloned()
        .ok_or_else(|| e500(anyhow!("access gate missing from app data")))?;

    let page_path = gate.page_path(req.path()).to_string();
    let Some(access) = get_required_access(&page_path) else {
        warn!(?page_path, "no access entry for page");
        return Err(GateError::PathNotFound(page_path).into());
    };

    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;
    let user_info = session.get_user_info();
    if let Some(user_info) = user_info.as_ref() {
        tracing::Span::current().record("user_id", tracing::field::display(&user_info.user_id));
    }

    let outcome = gate.check(access, user_info.as_ref());
    match terminal_response(&outcome) {
        None => {
            if let Some(user_info) = user_info {
                req.extensions_mut().insert(user_info);
            }
            next.call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        }
        Some(response) => {
            info!(?outcome, "request stopped at the access gate");
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

/// The response that ends the request for a failed check, `None` if the
/// request should continue to the page
pub fn terminal_response(outcome: &AccessOutcome) -> Option<HttpResponse> {
    match outcome {
        AccessOutcome::Continue => None,
        AccessOutcome::Redirect { location } => Some(
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location.as_str()))
                .finish(),
        ),
        AccessOutcome::Fatal { message } => Some(
            HttpResponse::Forbidden()
                .content_type(ContentType::plaintext())
                .body(*message),
        ),
    }
}
