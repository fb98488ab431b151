use super::{html_page, see_other};
use crate::{
    authentication::{validate_credentials, Credentials, UserDirectory},
    session_state::TypedSession,
    templates::render_page,
};
use actix_web::{http::header::ContentType, web, HttpResponse};
use anyhow::Context;
use ems_shared::{
    const_config::path::{PATH_PAGE_DASHBOARD, PATH_PAGE_LOGIN_SUBMIT},
    escape_html,
    gate::{is_authenticated, AccessGate},
    req_args::LoginReqArgs,
    uac::AuthError,
};

/// Shows the login form, users that are already logged in are sent to the
/// dashboard instead
#[tracing::instrument(skip_all)]
pub async fn login_form(
    session: TypedSession,
    gate: web::Data<AccessGate>,
) -> actix_web::Result<HttpResponse> {
    if is_authenticated(session.get_user_info().as_ref()) {
        return Ok(see_other(&gate.page_location(PATH_PAGE_DASHBOARD.path)));
    }
    Ok(html_page(login_page(&gate, None)))
}

/// Creates a login session from the submitted form
///
/// - A successful login renews the session and redirects to the dashboard
/// - Wrong user id or password shows the form again with a 401
/// - The session itself is never read here, only replaced
#[tracing::instrument(
    err(Debug),
    skip(req_args, directory, session, gate),
    fields(user_id=tracing::field::Empty)
)]
pub async fn login(
    web::Form(req_args): web::Form<LoginReqArgs>,
    directory: web::Data<UserDirectory>,
    gate: web::Data<AccessGate>,
    session: TypedSession,
) -> Result<HttpResponse, AuthError> {
    let credentials = Credentials {
        user_id: req_args.user_id,
        password: req_args.password,
    };
    tracing::Span::current().record("user_id", tracing::field::display(&credentials.user_id));

    match validate_credentials(credentials, &directory).await {
        Ok(user_info) => {
            session.renew();
            session
                .insert_user_info(user_info)
                .context("session update failed")?;
            Ok(see_other(&gate.page_location(PATH_PAGE_DASHBOARD.path)))
        }
        Err(e @ AuthError::InvalidUserOrPassword) => {
            tracing::info!("login rejected");
            Ok(HttpResponse::Unauthorized()
                .content_type(ContentType::html())
                .body(login_page(&gate, Some(&e.to_string()))))
        }
        Err(e) => Err(e),
    }
}

fn login_page(gate: &AccessGate, error_msg: Option<&str>) -> String {
    let error = error_msg
        .map(|x| format!("<p class=\"error\">{}</p>\n", escape_html(x)))
        .unwrap_or_default();
    let content = format!(
        r#"<h2>Log in</h2>
{error}<form method="post" action="{}">
    <label>User ID <input type="text" name="user_id" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Log in</button>
</form>"#,
        escape_html(&gate.page_location(PATH_PAGE_LOGIN_SUBMIT.path))
    );
    render_page("Log in", gate, None, &content)
}
