use serde::Deserialize;
use validator::Validate;

use crate::types::loker::max_200;

/// Body of `PUT /api/admin/halaman/{slug}`. The slug itself is immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateHalaman {
    #[validate(
        length(min = 3, message = "Judul minimal 3 karakter"),
        custom(function = "max_200", message = "Judul maksimal 200 karakter")
    )]
    pub judul: String,

    #[validate(length(min = 10, message = "Konten minimal 10 karakter"))]
    pub konten: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_rejected() {
        let payload = UpdateHalaman {
            judul: "Profil BKK".into(),
            konten: "pendek".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("konten"));
        assert!(!errors.field_errors().contains_key("judul"));
    }

    #[test]
    fn title_bounds() {
        let short = UpdateHalaman {
            judul: "ab".into(),
            konten: "Konten yang cukup panjang".into(),
        };
        assert!(short.validate().is_err());
        let ok = UpdateHalaman {
            judul: "abc".into(),
            ..short
        };
        assert!(ok.validate().is_ok());
    }
}
