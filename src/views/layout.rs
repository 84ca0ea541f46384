use maud::{DOCTYPE, Markup, html};

use crate::db::seed::DEFAULT_PAGES;
use crate::error::FieldError;

const CSS: &str = r#"
*{box-sizing:border-box}body{margin:0;font-family:system-ui,sans-serif;color:#1f2937;background:#f9fafb}
a{color:#047857}header.site,aside.sidebar{background:#065f46;color:#fff}
header.site{padding:1rem 2rem;display:flex;justify-content:space-between;align-items:center}
header.site a{color:#fff;margin-left:1rem;text-decoration:none}
main{max-width:64rem;margin:0 auto;padding:2rem}
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1rem}
.card{background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;padding:1.25rem}
.card img.logo{max-height:3rem}
.meta{color:#6b7280;font-size:.9rem}
.admin{display:flex;min-height:100vh}aside.sidebar{width:15rem;padding:1.5rem}
aside.sidebar a{display:block;color:#fff;padding:.5rem 0;text-decoration:none}
aside.sidebar a.current{font-weight:700}
.admin main{flex:1;max-width:none}
form.stacked label{display:block;margin-top:1rem;font-weight:600}
form.stacked input[type=text],form.stacked input[type=url],form.stacked input[type=password],
form.stacked input[type=datetime-local],form.stacked textarea{width:100%;padding:.5rem;border:1px solid #d1d5db;border-radius:.375rem}
.field-error{color:#b91c1c;font-size:.85rem}.alert{background:#fee2e2;color:#991b1b;padding:.75rem;border-radius:.375rem}
.badge{padding:.125rem .5rem;border-radius:999px;font-size:.8rem}.badge.published{background:#d1fae5}.badge.draft{background:#e5e7eb}
table{width:100%;border-collapse:collapse;background:#fff}td,th{padding:.5rem;border-bottom:1px solid #e5e7eb;text-align:left}
button{cursor:pointer}form.inline{display:inline}
.pagination{margin-top:1rem;display:flex;gap:1rem}
footer.site{text-align:center;color:#6b7280;padding:2rem}
"#;

fn document(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Portal BKK SMK" }
                style { (maud::PreEscaped(CSS)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Public page chrome: header navigation to the home page and default static pages.
pub fn public_document(title: &str, current_path: &str, content: Markup) -> Markup {
    let body = html! {
        header.site {
            a href="/" { strong { "Portal BKK SMK" } }
            nav {
                a href="/" class=[(current_path == "/").then_some("current")] { "Beranda" }
                @for page in DEFAULT_PAGES {
                    @let href = format!("/{}", page.slug);
                    a href=(href) class=[(current_path == href).then_some("current")] {
                        (nav_label(page.slug, page.judul))
                    }
                }
            }
        }
        main { (content) }
        footer.site {
            p { "Bursa Kerja Khusus SMK" }
            p { a href="/admin/login" { "Masuk Admin" } }
        }
    };
    document(title, None, body)
}

fn nav_label<'a>(slug: &str, judul: &'a str) -> &'a str {
    match slug {
        "visi-misi" => "Visi Misi",
        "tracer-study" => "Tracer Study",
        _ => judul,
    }
}

const SIDEBAR: &[(&str, &str)] = &[
    ("Dashboard", "/admin/dashboard"),
    ("Lowongan Kerja", "/admin/dashboard/loker"),
    ("Halaman Statis", "/admin/dashboard/halaman"),
];

/// Admin chrome: sidebar, signed-in user and logout button.
pub fn admin_document(title: &str, current_path: &str, username: &str, content: Markup) -> Markup {
    let body = html! {
        div.admin {
            aside.sidebar {
                h2 { "Admin BKK" }
                nav {
                    @for (label, href) in SIDEBAR {
                        @let current = current_path == *href
                            || (*href != "/admin/dashboard" && current_path.starts_with(&format!("{href}/")));
                        a href=(href) class=[current.then_some("current")] { (label) }
                    }
                }
                p.meta { "Masuk sebagai " strong { (username) } }
                form method="post" action="/admin/logout" {
                    button type="submit" { "Keluar" }
                }
            }
            main {
                h1 { (title) }
                (content)
            }
        }
    };
    document(title, Some("admin-body"), body)
}

/// Bare document for the login screen.
pub fn plain_document(title: &str, content: Markup) -> Markup {
    document(title, Some("plain"), html! { main { (content) } })
}

/// Inline messages for one form field.
pub fn field_errors(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @for error in errors.iter().filter(|e| e.field == field) {
            p.field-error { (error.message) }
        }
    }
}
