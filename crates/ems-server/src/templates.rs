//! Page layout shared by every rendered page. Anything dynamic must go
//! through [`escape_html`] before it is placed in the markup

use ems_shared::{
    const_config::{
        path::{PATH_PAGE_DASHBOARD, PATH_PAGE_LOGOUT, PATH_PAGE_PAYROLL},
        payroll::PAYROLL_ALLOWED_ROLES,
    },
    escape_html,
    gate::{has_role, AccessGate},
    session::UserSessionInfo,
};

pub const APP_TITLE: &str = "Employee Management";

pub fn render_page(
    title: &str,
    gate: &AccessGate,
    user_info: Option<&UserSessionInfo>,
    content: &str,
) -> String {
    let title = escape_html(title);
    let nav = render_nav(gate, user_info);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | {APP_TITLE}</title>
</head>
<body>
<header>
    <strong>{APP_TITLE}</strong>
{nav}</header>
<main>
{content}
</main>
</body>
</html>
"#
    )
}

fn render_nav(gate: &AccessGate, user_info: Option<&UserSessionInfo>) -> String {
    let Some(user_info) = user_info else {
        return String::new();
    };
    let mut links = vec![nav_link(gate, PATH_PAGE_DASHBOARD.path, "Dashboard")];
    if has_role(Some(user_info), PAYROLL_ALLOWED_ROLES) {
        links.push(nav_link(gate, PATH_PAGE_PAYROLL.path, "Payroll"));
    }
    links.push(nav_link(gate, PATH_PAGE_LOGOUT.path, "Log out"));
    format!(
        "    <nav>{}</nav>\n    <p class=\"user\">{} ({})</p>\n",
        links.join(" "),
        escape_html(&user_info.display_name),
        escape_html(user_info.role_label())
    )
}

fn nav_link(gate: &AccessGate, relative_path: &str, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(&gate.page_location(relative_path)),
        escape_html(text)
    )
}
