use maud::{Markup, PreEscaped, html};

use crate::db::{DbHalaman, DbLoker};
use crate::views::format::{excerpt, long_date, long_datetime};
use crate::views::layout::public_document;

pub struct Pager {
    pub page: i64,
    pub total_pages: i64,
}

pub fn home(postings: &[DbLoker], pager: &Pager) -> Markup {
    let content = html! {
        section {
            h1 { "Portal BKK SMK" }
            p { "Selamat datang di Portal Bursa Kerja Khusus SMK" }
        }
        section {
            h2 { "Lowongan Kerja Terbaru" }
            @if postings.is_empty() {
                p.meta { "Belum ada lowongan kerja yang dipublikasikan." }
            } @else {
                div.cards {
                    @for loker in postings {
                        (loker_card(loker))
                    }
                }
                (pagination(pager))
            }
        }
    };
    public_document("Beranda", "/", content)
}

fn loker_card(loker: &DbLoker) -> Markup {
    html! {
        article.card {
            @if let Some(logo) = &loker.logo_perusahaan {
                img.logo src=(logo) alt={ "Logo " (loker.nama_perusahaan) };
            }
            h3 { (loker.judul) }
            p.meta { (loker.nama_perusahaan) }
            p { (excerpt(&loker.deskripsi, 150)) }
            p.meta {
                span { "📍 " (loker.lokasi) }
                " · "
                span { "⏰ Batas: " (long_date(&loker.batas_waktu)) }
            }
            a href={ "/loker/" (loker.id) } { "Lihat Detail" }
        }
    }
}

fn pagination(pager: &Pager) -> Markup {
    html! {
        @if pager.total_pages > 1 {
            nav.pagination {
                @if pager.page > 1 {
                    a href={ "/?page=" (pager.page - 1) } { "← Sebelumnya" }
                }
                span { "Halaman " (pager.page) " dari " (pager.total_pages) }
                @if pager.page < pager.total_pages {
                    a href={ "/?page=" (pager.page + 1) } { "Berikutnya →" }
                }
            }
        }
    }
}

pub fn loker_detail(loker: &DbLoker) -> Markup {
    let content = html! {
        p { a href="/" { "← Kembali ke daftar lowongan" } }
        article.card {
            @if let Some(logo) = &loker.logo_perusahaan {
                img.logo src=(logo) alt={ "Logo " (loker.nama_perusahaan) };
            }
            h1 { (loker.judul) }
            p.meta { (loker.nama_perusahaan) " · " (loker.lokasi) }
            p.meta { "Batas: " (long_date(&loker.batas_waktu)) }
            h2 { "Deskripsi Pekerjaan" }
            p style="white-space:pre-line" { (loker.deskripsi) }
            h2 { "Kualifikasi" }
            p style="white-space:pre-line" { (loker.kualifikasi) }
            h2 { "Cara Melamar" }
            p style="white-space:pre-line" { (loker.cara_melamar) }
            p.meta { "Lowongan ini dipublikasikan pada " (long_datetime(&loker.created_at)) }
        }
    };
    public_document(&loker.judul, "/loker", content)
}

/// Static page. Content is admin-authored HTML and rendered unescaped.
pub fn halaman(page: &DbHalaman) -> Markup {
    let content = html! {
        article.card {
            h1 { (page.judul) }
            div.content { (PreEscaped(&page.konten)) }
            p.meta { "Terakhir diperbarui: " (long_date(&page.updated_at)) }
        }
    };
    public_document(&page.judul, &format!("/{}", page.slug), content)
}

pub fn not_found(title: &str, message: &str) -> Markup {
    let content = html! {
        article.card {
            h1 { (title) }
            p { (message) }
            a href="/" { "Kembali ke Beranda" }
        }
    };
    public_document(title, "", content)
}
