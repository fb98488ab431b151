use super::html_page;
use crate::templates::render_page;
use actix_web::{web, HttpResponse};
use ems_shared::{escape_html, format_date, gate::AccessGate, session::UserSessionInfo};

#[tracing::instrument(skip_all, fields(user_id = %user_info.user_id))]
pub async fn dashboard(
    user_info: web::ReqData<UserSessionInfo>,
    gate: web::Data<AccessGate>,
) -> HttpResponse {
    let today = chrono::Local::now().date_naive().to_string();
    let content = format!(
        r#"<h2>Welcome, {}</h2>
<p>You are signed in as <strong>{}</strong> with the {} role.</p>
<p>Today is {}.</p>"#,
        escape_html(&user_info.display_name),
        escape_html(&user_info.user_id),
        escape_html(user_info.role_label()),
        format_date(Some(today.as_str())),
    );
    html_page(render_page(
        "Dashboard",
        &gate,
        Some(&*user_info),
        &content,
    ))
}
