// SPDX-License-Identifier: MPL-2.0
//! Pure render helpers shared by every page and modal.
//!
//! Money follows the Dominican convention (`RD$`, `,` for thousands, `.` for
//! decimals). Dates travel as `DD/MM/YYYY` on the wire but HTML-style date
//! inputs use `YYYY-MM-DD`, hence the two converters.

use chrono::{DateTime, Local, NaiveDateTime};
use std::path::Path;

const CURRENCY_PREFIX: &str = "RD$";
const EMPTY: &str = "-";

/// Formats an amount as `RD$1,234.5` with at most two decimals.
///
/// Missing or non-finite amounts render as `RD$0`.
#[must_use]
pub fn format_currency(amount: Option<f64>) -> String {
    match amount.filter(|a| a.is_finite()) {
        Some(value) => format!("{CURRENCY_PREFIX}{}", format_decimal(value, 2)),
        None => format!("{CURRENCY_PREFIX}0"),
    }
}

/// Groups thousands and keeps up to `max_decimals` fraction digits, dropping
/// trailing zeros.
#[must_use]
pub fn format_decimal(value: f64, max_decimals: u32) -> String {
    let scale = 10_i64.pow(max_decimals);
    let scaled = (value * scale as f64).round() as i64;
    let negative = scaled < 0;
    let scaled = scaled.unsigned_abs();
    let scale = scale.unsigned_abs();

    let integer = group_thousands(scaled / scale);
    let mut fraction = format!("{:0width$}", scaled % scale, width = max_decimals as usize);
    while fraction.ends_with('0') {
        fraction.pop();
    }

    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    }
}

/// Integer with thousands separators (`12,500`).
#[must_use]
pub fn format_count(value: f64) -> String {
    format_decimal(value.round(), 0)
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

/// Percentage with one decimal (`25.0%`).
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Visual family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Secondary,
}

/// A status rendered as a coloured pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

/// Maps a production or payment status to its badge.
///
/// Unknown statuses keep their text with the neutral tone.
#[must_use]
pub fn status_badge(status: &str) -> Badge {
    let tone = match status {
        "Recibido" | "Entregado" => Tone::Success,
        "En Camino" => Tone::Info,
        "Listo para Envío" | "Pendiente" | "Parcial" => Tone::Warning,
        "En Producción" => Tone::Primary,
        "Bloqueado - Sin Dirección" | "Bloqueado" | "Cancelado" | "Reembolsado" => Tone::Danger,
        _ => Tone::Secondary,
    };
    Badge {
        label: status.to_string(),
        tone,
    }
}

/// Text or `-` when missing or blank.
#[must_use]
pub fn or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(EMPTY)
        .to_string()
}

/// Displays a date field. `DD/MM/YYYY` and free text are kept as-is, ISO
/// dates are turned into `DD/MM/YYYY`, and missing values become `-`.
#[must_use]
pub fn format_date(value: Option<&str>) -> String {
    let Some(date) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return EMPTY.to_string();
    };
    if date.contains('/') {
        return date.to_string();
    }
    let day_part = date.get(..10).unwrap_or(date);
    match iso_to_ddmm(day_part) {
        converted if converted.is_empty() => date.to_string(),
        converted => converted,
    }
}

/// `DD/MM/YYYY` to `YYYY-MM-DD`; anything else yields an empty string.
#[must_use]
pub fn ddmm_to_iso(value: &str) -> String {
    let parts: Vec<&str> = value.trim().split('/').collect();
    match parts.as_slice() {
        [day, month, year] if !day.is_empty() && !month.is_empty() && !year.is_empty() => {
            format!("{year}-{month}-{day}")
        }
        _ => String::new(),
    }
}

/// `YYYY-MM-DD` to `DD/MM/YYYY`; anything else yields an empty string.
#[must_use]
pub fn iso_to_ddmm(value: &str) -> String {
    let parts: Vec<&str> = value.trim().split('-').collect();
    match parts.as_slice() {
        [year, month, day] if !day.is_empty() && !month.is_empty() && !year.is_empty() => {
            format!("{day}/{month}/{year}")
        }
        _ => String::new(),
    }
}

/// Formats a backend timestamp as `dd/mm/yyyy hh:mm` in local time.
///
/// Timestamps without an offset are shown as given. Unparseable input
/// yields an empty string.
#[must_use]
pub fn format_timestamp(value: Option<&str>) -> String {
    const OUTPUT: &str = "%d/%m/%Y %H:%M";

    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return String::new();
    };

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return with_offset.with_timezone(&Local).format(OUTPUT).to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(raw, pattern).ok())
        .map(|naive| naive.format(OUTPUT).to_string())
        .unwrap_or_default()
}

/// Human-readable size (`512 B`, `1.5 KB`, `2.0 MB`). Missing or zero is empty.
#[must_use]
pub fn format_file_size(bytes: Option<f64>) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    match bytes.filter(|b| *b > 0.0) {
        None => String::new(),
        Some(b) if b < KIB => format!("{} B", b as u64),
        Some(b) if b < MIB => format!("{:.1} KB", b / KIB),
        Some(b) => format!("{:.1} MB", b / MIB),
    }
}

/// Coarse file category used to label attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Pdf,
    Text,
    Other,
}

impl FileKind {
    #[must_use]
    pub fn from_mime(mime: Option<&str>) -> Self {
        let Some(mime) = mime else {
            return Self::Other;
        };
        if mime.contains("image") {
            Self::Image
        } else if mime.contains("video") {
            Self::Video
        } else if mime.contains("audio") {
            Self::Audio
        } else if mime.contains("pdf") {
            Self::Pdf
        } else if mime.contains("text") {
            Self::Text
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Imagen",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Pdf => "PDF",
            Self::Text => "Texto",
            Self::Other => "Archivo",
        }
    }
}

/// Content type sent with an uploaded file, from its extension.
#[must_use]
pub fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_trims_decimals() {
        assert_eq!(format_currency(Some(1500.0)), "RD$1,500");
        assert_eq!(format_currency(Some(1234567.5)), "RD$1,234,567.5");
        assert_eq!(format_currency(Some(99.999)), "RD$100");
        assert_eq!(format_currency(Some(0.25)), "RD$0.25");
        assert_eq!(format_currency(Some(-2500.0)), "RD$-2,500");
    }

    #[test]
    fn missing_or_nan_currency_is_zero() {
        assert_eq!(format_currency(None), "RD$0");
        assert_eq!(format_currency(Some(f64::NAN)), "RD$0");
        assert_eq!(format_currency(Some(0.0)), "RD$0");
    }

    #[test]
    fn badges_follow_status_table() {
        assert_eq!(status_badge("En Producción").tone, Tone::Primary);
        assert_eq!(status_badge("Entregado").tone, Tone::Success);
        assert_eq!(status_badge("En Camino").tone, Tone::Info);
        assert_eq!(status_badge("Parcial").tone, Tone::Warning);
        assert_eq!(status_badge("Reembolsado").tone, Tone::Danger);
        let unknown = status_badge("Archivado");
        assert_eq!(unknown.tone, Tone::Secondary);
        assert_eq!(unknown.label, "Archivado");
    }

    #[test]
    fn date_converters_handle_both_directions_and_garbage() {
        assert_eq!(ddmm_to_iso("05/03/2024"), "2024-03-05");
        assert_eq!(iso_to_ddmm("2024-03-05"), "05/03/2024");
        assert_eq!(ddmm_to_iso(""), "");
        assert_eq!(ddmm_to_iso("Pendiente"), "");
        assert_eq!(iso_to_ddmm("2024-03"), "");
    }

    #[test]
    fn format_date_keeps_ddmm_and_converts_iso() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(Some("05/03/2024")), "05/03/2024");
        assert_eq!(format_date(Some("2024-03-05")), "05/03/2024");
        assert_eq!(format_date(Some("Pendiente")), "Pendiente");
    }

    #[test]
    fn naive_timestamp_is_formatted_verbatim() {
        assert_eq!(
            format_timestamp(Some("2024-03-05T14:07:00.123")),
            "05/03/2024 14:07"
        );
        assert_eq!(format_timestamp(Some("yesterday")), "");
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(Some(512.0)), "512 B");
        assert_eq!(format_file_size(Some(1536.0)), "1.5 KB");
        assert_eq!(format_file_size(Some(2.0 * 1024.0 * 1024.0)), "2.0 MB");
        assert_eq!(format_file_size(None), "");
    }

    #[test]
    fn file_kind_from_mime() {
        assert_eq!(FileKind::from_mime(Some("image/png")), FileKind::Image);
        assert_eq!(FileKind::from_mime(Some("application/pdf")), FileKind::Pdf);
        assert_eq!(FileKind::from_mime(Some("text/csv")), FileKind::Text);
        assert_eq!(FileKind::from_mime(None), FileKind::Other);
        assert_eq!(FileKind::from_mime(Some("application/zip")).label(), "Archivo");
    }

    #[test]
    fn guess_mime_is_case_insensitive() {
        assert_eq!(guess_mime(Path::new("/tmp/FOTO.JPG")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("factura.pdf")), "application/pdf");
        assert_eq!(guess_mime(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn counts_and_percentages() {
        assert_eq!(format_count(12500.0), "12,500");
        assert_eq!(format_percent(25.0), "25.0%");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("Ana")), "Ana");
    }
}
