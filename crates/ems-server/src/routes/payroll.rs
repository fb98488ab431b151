use super::html_page;
use crate::templates::render_page;
use actix_web::{web, HttpResponse};
use ems_shared::{
    const_config::payroll::{PAYROLL_AVERAGE_PER_EMPLOYEE, PAYROLL_BONUSES, PAYROLL_MONTH_TOTAL},
    escape_html, format_currency,
    gate::AccessGate,
    session::UserSessionInfo,
};

/// Payroll summary in Kwacha. Restricted to Admin and Manager by the access
/// table so this only runs for those roles
#[tracing::instrument(skip_all, fields(user_id = %user_info.user_id))]
pub async fn payroll(
    user_info: web::ReqData<UserSessionInfo>,
    gate: web::Data<AccessGate>,
) -> HttpResponse {
    let cards = [
        ("This month total", PAYROLL_MONTH_TOTAL),
        ("Average per employee", PAYROLL_AVERAGE_PER_EMPLOYEE),
        ("Bonuses", PAYROLL_BONUSES),
    ]
    .iter()
    .map(|(label, amount)| {
        format!(
            "    <div class=\"card\">\n        <p class=\"label\">{}</p>\n        <p class=\"amount\">{}</p>\n    </div>",
            escape_html(label),
            escape_html(&format_currency(*amount))
        )
    })
    .collect::<Vec<_>>()
    .join("\n");
    let content = format!(
        r#"<h2>Payroll (Kwacha)</h2>
<p>Review payroll totals in Kwacha for your workforce.</p>
<div class="cards">
{cards}
</div>
<p>All amounts on this page are shown in Kwacha (K).</p>"#
    );
    html_page(render_page("Payroll", &gate, Some(&*user_info), &content))
}
