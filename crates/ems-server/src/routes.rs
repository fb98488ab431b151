mod dashboard;
mod health_check;
mod login;
mod logout;
mod payroll;

use actix_web::{
    http::header::{self, ContentType},
    web, HttpRequest, HttpResponse,
};
pub use dashboard::dashboard;
use ems_shared::{escape_html, gate::AccessGate};
pub use health_check::health_check;
pub use login::{login, login_form};
pub use logout::log_out;
pub use payroll::payroll;

use crate::templates::render_page;

fn html_page(html: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html)
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[tracing::instrument(skip(gate))]
pub async fn not_found(req: HttpRequest, gate: web::Data<AccessGate>) -> HttpResponse {
    tracing::warn!("Failed to match route");
    let content = format!(
        "<h2>Not Found</h2>\n<p>404 - {} to '{}' Not found</p>",
        req.method(),
        escape_html(req.path())
    );
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(render_page("Not Found", &gate, None, &content))
}
