//! Built-in defaults
//!
//! Both tools run without any arguments; these are the paths they use then.

/// Output location of the generated chime, relative to the app project root
pub const DEFAULT_CHIME_PATH: &str = "android/app/src/main/res/raw/promo_chime.wav";

/// Course handouts dumped by `pdf-dump` when no paths are given
pub const DEFAULT_PDF_PATHS: [&str; 2] = [
    r"d:\Kuliah\Prak Mobile\wida-collection\Pemrograman Mobile - Modul 5 - P1 - Location-Aware.pdf",
    r"d:\Kuliah\Prak Mobile\wida-collection\Pemrograman Mobile - Modul 5 - P2 - Location-Aware.pdf",
];
