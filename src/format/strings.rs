//! Fixed Indonesian display strings.

/// Placeholder while chapter metadata is still loading.
pub const LOADING: &str = "Memuat...";

/// Shown while a chapter's translation is being fetched.
pub const LOADING_TRANSLATION: &str = "Memuat terjemahan...";

/// The translation lookup succeeded but returned nothing for the verse.
pub const TRANSLATION_NOT_FOUND: &str = "Terjemahan tidak ditemukan.";

/// The translation lookup for the verse failed.
pub const TRANSLATION_FAILED: &str = "Gagal memuat terjemahan.";

/// No translation entry exists for the verse at render time.
pub const TRANSLATION_UNAVAILABLE: &str = "Terjemahan tidak tersedia.";

pub const MEANING_UNAVAILABLE: &str = "Tidak tersedia";
pub const PLACE_UNKNOWN: &str = "Tidak diketahui";

pub const OTHER_RECITERS: &str = "Pilih Qori yang anda inginkan";

pub const PREVIOUS_JUZ: &str = "Juz Sebelumnya";
pub const NEXT_JUZ: &str = "Juz Selanjutnya";

pub const SELECT_RECITER: &str = "Silakan pilih qori terlebih dahulu.";

// Transport failures, as shown to the reader.
pub const REQUEST_TIMED_OUT: &str =
    "Permintaan melebihi batas waktu. Server Quran mungkin sedang lambat.";
pub const CONNECTION_FAILED: &str =
    "Gagal terhubung. Periksa koneksi internet Anda lalu coba lagi.";
pub const UNEXPECTED_RESPONSE: &str = "Format respons dari server tidak dikenali.";
pub const NETWORK_ERROR: &str = "Terjadi kesalahan jaringan. Silakan coba lagi nanti.";
