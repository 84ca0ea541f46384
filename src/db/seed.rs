//! Startup seeding: the configured admin account and the default static pages.
//! Existing rows are left untouched.

use tracing::info;

use crate::auth::hash_password;
use crate::config::SeedConfig;
use crate::db::sqlite::PortalStorage;
use crate::error::PortalError;

pub struct DefaultPage {
    pub slug: &'static str,
    pub judul: &'static str,
    pub konten: &'static str,
}

pub const DEFAULT_PAGES: &[DefaultPage] = &[
    DefaultPage {
        slug: "profil-bkk",
        judul: "Profil BKK",
        konten: r#"<h2>Tentang BKK SMK</h2>
<p>Bursa Kerja Khusus (BKK) adalah sebuah lembaga yang dibentuk di Sekolah Menengah Kejuruan Negeri dan Swasta, sebagai unit pelaksana yang memberikan pelayanan dan informasi lowongan kerja, pelaksana pemasaran, penyaluran dan penempatan tenaga kerja, merupakan mitra Dinas Pendidikan dan Pelatihan Kerja.</p>

<h3>Fungsi BKK</h3>
<ul>
  <li>Sebagai wadah dalam mempertemukan tamatan dengan pencari kerja</li>
  <li>Memberikan layanan kepada tamatan sesuai dengan tugas dan fungsi masing-masing seksi</li>
  <li>Sebagai wadah dalam pelatihan tamatan yang belum terserap di dunia kerja</li>
</ul>"#,
    },
    DefaultPage {
        slug: "visi-misi",
        judul: "Visi dan Misi",
        konten: r#"<h2>Visi BKK</h2>
<p>Menjadi lembaga penyalur tenaga kerja yang profesional dan terpercaya dalam memfasilitasi lulusan SMK untuk mendapatkan pekerjaan yang layak.</p>

<h2>Misi BKK</h2>
<ol>
  <li>Menjalin kerjasama dengan dunia usaha dan dunia industri (DUDI)</li>
  <li>Memberikan informasi lowongan kerja yang akurat dan terpercaya</li>
  <li>Memfasilitasi proses rekrutmen antara lulusan dan perusahaan</li>
  <li>Melakukan pendampingan dan bimbingan karir bagi siswa dan alumni</li>
  <li>Meningkatkan kompetensi lulusan melalui pelatihan dan sertifikasi</li>
</ol>"#,
    },
    DefaultPage {
        slug: "tracer-study",
        judul: "Info Tracer Study",
        konten: r#"<h2>Tracer Study Alumni</h2>
<p>Tracer Study adalah studi pelacakan terhadap alumni untuk mengetahui outcome pendidikan dalam bentuk transisi dari dunia pendidikan tinggi ke dunia kerja, situasi kerja terakhir, dan aplikasi kompetensi di dunia kerja.</p>

<h3>Tujuan Tracer Study</h3>
<ul>
  <li>Mengetahui outcome pendidikan berupa informasi tentang profil kompetensi dan karir lulusan</li>
  <li>Mendapatkan masukan untuk penyempurnaan dan penjaminan kualitas pendidikan</li>
  <li>Membangun jejaring dengan alumni dan stakeholder</li>
</ul>

<h3>Data Alumni Terkini</h3>
<p>Untuk informasi lebih lanjut mengenai data tracer study dan statistik ketenagakerjaan alumni, silakan hubungi admin BKK.</p>"#,
    },
];

pub async fn seed(storage: &PortalStorage, cfg: &SeedConfig) -> Result<(), PortalError> {
    if storage
        .find_admin_by_username(&cfg.admin_username)
        .await?
        .is_none()
    {
        let hash = hash_password(&cfg.admin_password)?;
        storage
            .upsert_admin(&cfg.admin_username, &cfg.admin_email, &hash)
            .await?;
        info!(username = %cfg.admin_username, "seeded admin account");
    }

    for page in DEFAULT_PAGES {
        if storage
            .insert_halaman_if_missing(page.slug, page.judul, page.konten)
            .await?
        {
            info!(slug = page.slug, "seeded static page");
        }
    }
    Ok(())
}
