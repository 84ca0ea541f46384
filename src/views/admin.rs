use maud::{Markup, html};

use crate::db::{DbHalaman, DbLoker, PublishFilter};
use crate::error::FieldError;
use crate::types::halaman::UpdateHalaman;
use crate::types::loker::LokerForm;
use crate::views::format::{long_date, long_datetime};
use crate::views::layout::{admin_document, field_errors, plain_document};

pub fn login(username: &str, error: Option<&str>, errors: &[FieldError]) -> Markup {
    let content = html! {
        div.card style="max-width:24rem;margin:4rem auto" {
            h1 { "Login Admin" }
            p.meta { "Portal BKK SMK" }
            @if let Some(error) = error {
                p.alert { (error) }
            }
            form.stacked method="post" action="/admin/login" {
                label for="username" { "Username" }
                input id="username" type="text" name="username" value=(username) autocomplete="username";
                (field_errors(errors, "username"))
                label for="password" { "Password" }
                input id="password" type="password" name="password" autocomplete="current-password";
                (field_errors(errors, "password"))
                p { button type="submit" { "Masuk" } }
            }
        }
    };
    plain_document("Login Admin", content)
}

pub struct DashboardStats {
    pub total_loker: i64,
    pub published_loker: i64,
    pub total_halaman: i64,
}

pub fn dashboard(username: &str, stats: &DashboardStats) -> Markup {
    let cards = [
        ("Total Lowongan Kerja", stats.total_loker),
        ("Lowongan Dipublikasi", stats.published_loker),
        ("Halaman Statis", stats.total_halaman),
    ];
    let content = html! {
        section {
            h2 { "Selamat Datang, " (username) "!" }
            p.meta { "Kelola konten Portal BKK SMK dari dashboard ini." }
        }
        section {
            h3 { "Statistik" }
            div.cards {
                @for (name, value) in cards {
                    div.card {
                        p.meta { (name) }
                        p style="font-size:2rem;margin:0" { (value) }
                    }
                }
            }
        }
        section {
            h3 { "Aksi Cepat" }
            div.cards {
                a.card href="/admin/dashboard/loker/create" {
                    strong { "Buat Lowongan Kerja" }
                    p.meta { "Tambahkan lowongan kerja baru" }
                }
                a.card href="/admin/dashboard/halaman" {
                    strong { "Edit Halaman Statis" }
                    p.meta { "Kelola konten halaman statis" }
                }
            }
        }
        section {
            h3 { "Informasi" }
            ul {
                li { "Gunakan menu navigasi di sebelah kiri untuk mengakses fitur-fitur admin." }
                li { "Lowongan kerja yang dipublikasi akan tampil di halaman publik portal." }
                li { "Pastikan untuk mengisi semua informasi dengan lengkap dan akurat." }
            }
        }
    };
    admin_document("Dashboard", "/admin/dashboard", username, content)
}

pub struct LokerListView<'a> {
    pub items: &'a [DbLoker],
    pub total: i64,
    pub filter: PublishFilter,
    pub page: i64,
    pub total_pages: i64,
}

fn status_param(filter: PublishFilter) -> &'static str {
    match filter {
        PublishFilter::All => "semua",
        PublishFilter::Published => "published",
        PublishFilter::Draft => "draft",
    }
}

pub fn loker_list(username: &str, view: &LokerListView<'_>) -> Markup {
    let filters = [
        (PublishFilter::All, "Semua"),
        (PublishFilter::Published, "Dipublikasi"),
        (PublishFilter::Draft, "Draft"),
    ];
    let status = status_param(view.filter);
    let content = html! {
        p { a href="/admin/dashboard/loker/create" { "+ Buat Lowongan Kerja" } }
        nav {
            @for (filter, label) in filters {
                @if filter == view.filter {
                    strong { (label) }
                } @else {
                    a href={ "/admin/dashboard/loker?status=" (status_param(filter)) } { (label) }
                }
                " "
            }
            span.meta { "(" (view.total) " lowongan)" }
        }
        @if view.items.is_empty() {
            p.meta { "Belum ada lowongan kerja." }
        } @else {
            table {
                thead {
                    tr {
                        th { "Judul" }
                        th { "Perusahaan" }
                        th { "Batas Waktu" }
                        th { "Status" }
                        th { "Aksi" }
                    }
                }
                tbody {
                    @for loker in view.items {
                        tr {
                            td { (loker.judul) }
                            td { (loker.nama_perusahaan) }
                            td { (long_date(&loker.batas_waktu)) }
                            td {
                                @if loker.is_published {
                                    span.badge.published { "Dipublikasi" }
                                } @else {
                                    span.badge.draft { "Draft" }
                                }
                            }
                            td {
                                a href={ "/admin/dashboard/loker/" (loker.id) "/edit" } { "Edit" }
                                " "
                                form.inline method="post" action={ "/admin/dashboard/loker/" (loker.id) "/publish" } {
                                    button type="submit" {
                                        @if loker.is_published { "Jadikan Draft" } @else { "Publikasikan" }
                                    }
                                }
                                " "
                                form.inline method="post" action={ "/admin/dashboard/loker/" (loker.id) "/delete" }
                                    onsubmit="return confirm('Hapus lowongan ini?')" {
                                    button type="submit" { "Hapus" }
                                }
                            }
                        }
                    }
                }
            }
            @if view.total_pages > 1 {
                nav.pagination {
                    @if view.page > 1 {
                        a href={ "/admin/dashboard/loker?status=" (status) "&page=" (view.page - 1) } { "← Sebelumnya" }
                    }
                    span { "Halaman " (view.page) " dari " (view.total_pages) }
                    @if view.page < view.total_pages {
                        a href={ "/admin/dashboard/loker?status=" (status) "&page=" (view.page + 1) } { "Berikutnya →" }
                    }
                }
            }
        }
    };
    admin_document("Lowongan Kerja", "/admin/dashboard/loker", username, content)
}

/// Create (`id == None`) or edit form with inline per-field errors.
pub fn loker_form(
    username: &str,
    id: Option<i64>,
    form: &LokerForm,
    errors: &[FieldError],
    alert: Option<&str>,
) -> Markup {
    let (title, action) = match id {
        Some(id) => ("Edit Lowongan Kerja", format!("/admin/dashboard/loker/{id}/edit")),
        None => ("Buat Lowongan Kerja", "/admin/dashboard/loker/create".to_string()),
    };
    let content = html! {
        @if let Some(alert) = alert {
            p.alert { (alert) }
        }
        form.stacked method="post" action=(action) {
            label for="judul" { "Judul Lowongan" }
            input id="judul" type="text" name="judul" value=(form.judul);
            (field_errors(errors, "judul"))

            label for="namaPerusahaan" { "Nama Perusahaan" }
            input id="namaPerusahaan" type="text" name="namaPerusahaan" value=(form.nama_perusahaan);
            (field_errors(errors, "namaPerusahaan"))

            label for="logoPerusahaan" { "URL Logo Perusahaan (opsional)" }
            input id="logoPerusahaan" type="url" name="logoPerusahaan" value=(form.logo_perusahaan);
            (field_errors(errors, "logoPerusahaan"))

            label for="lokasi" { "Lokasi" }
            input id="lokasi" type="text" name="lokasi" value=(form.lokasi);
            (field_errors(errors, "lokasi"))

            label for="deskripsi" { "Deskripsi Pekerjaan" }
            textarea id="deskripsi" name="deskripsi" rows="6" { (form.deskripsi) }
            (field_errors(errors, "deskripsi"))

            label for="kualifikasi" { "Kualifikasi" }
            textarea id="kualifikasi" name="kualifikasi" rows="5" { (form.kualifikasi) }
            (field_errors(errors, "kualifikasi"))

            label for="caraMelamar" { "Cara Melamar" }
            textarea id="caraMelamar" name="caraMelamar" rows="4" { (form.cara_melamar) }
            (field_errors(errors, "caraMelamar"))

            label for="batasWaktu" { "Batas Waktu (UTC)" }
            input id="batasWaktu" type="datetime-local" name="batasWaktu" value=(form.batas_waktu);
            (field_errors(errors, "batasWaktu"))

            label {
                input type="checkbox" name="isPublished" checked[form.published()];
                " Publikasikan sekarang"
            }
            (field_errors(errors, "isPublished"))

            p {
                button type="submit" { "Simpan" }
                " "
                a href="/admin/dashboard/loker" { "Batal" }
            }
        }
    };
    admin_document(title, "/admin/dashboard/loker", username, content)
}

pub fn halaman_list(username: &str, pages: &[DbHalaman]) -> Markup {
    let content = html! {
        table {
            thead {
                tr {
                    th { "Judul" }
                    th { "Slug" }
                    th { "Terakhir Diperbarui" }
                    th { "Aksi" }
                }
            }
            tbody {
                @for page in pages {
                    tr {
                        td { (page.judul) }
                        td { code { "/" (page.slug) } }
                        td { (long_datetime(&page.updated_at)) }
                        td {
                            a href={ "/admin/dashboard/halaman/" (page.slug) "/edit" } { "Edit" }
                            " "
                            a href={ "/" (page.slug) } target="_blank" { "Lihat" }
                        }
                    }
                }
            }
        }
    };
    admin_document("Halaman Statis", "/admin/dashboard/halaman", username, content)
}

pub fn halaman_form(
    username: &str,
    slug: &str,
    form: &UpdateHalaman,
    errors: &[FieldError],
    alert: Option<&str>,
) -> Markup {
    let content = html! {
        p.meta { "Slug: " code { "/" (slug) } }
        @if let Some(alert) = alert {
            p.alert { (alert) }
        }
        form.stacked method="post" action={ "/admin/dashboard/halaman/" (slug) "/edit" } {
            label for="judul" { "Judul" }
            input id="judul" type="text" name="judul" value=(form.judul);
            (field_errors(errors, "judul"))

            label for="konten" { "Konten (HTML)" }
            textarea id="konten" name="konten" rows="16" { (form.konten) }
            (field_errors(errors, "konten"))

            p {
                button type="submit" { "Simpan" }
                " "
                a href="/admin/dashboard/halaman" { "Batal" }
            }
        }
    };
    admin_document("Edit Halaman", "/admin/dashboard/halaman", username, content)
}
