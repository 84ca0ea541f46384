pub mod admin;
pub mod api;
pub mod auth;
pub mod public;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::PortalError;
use crate::views;

/// Error of an HTML page handler; rendered as a page rather than the JSON envelope.
#[derive(Debug)]
pub struct PageError(pub PortalError);

impl From<PortalError> for PageError {
    fn from(err: PortalError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let err = if self.0.code() == crate::error::INTERNAL_ERROR {
            self.0.logged("page request")
        } else {
            self.0
        };
        let status = err.status();
        let markup = match status {
            StatusCode::NOT_FOUND => views::public::not_found(
                "Halaman Tidak Ditemukan",
                "Maaf, halaman yang Anda cari tidak tersedia.",
            ),
            s if s.is_server_error() => views::public::not_found(
                "Terjadi Kesalahan",
                "Terjadi kesalahan server. Silakan coba lagi nanti.",
            ),
            _ => views::public::not_found("Permintaan Tidak Valid", "Permintaan tidak dapat diproses."),
        };
        (status, Html(markup.into_string())).into_response()
    }
}
