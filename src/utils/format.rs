// ============================================================================
// FORMAT - Formateo de tamaños y fechas para las vistas
// ============================================================================

use chrono::DateTime;

/// Codificar un valor para query string (percent-encoding RFC 3986,
/// caracteres no reservados se dejan tal cual)
pub fn url_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}

/// Formatear bytes como tamaño legible (B / KB / MB / GB)
pub fn format_file_size(size: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = size as f64;
    if size >= GB {
        format!("{:.2} GB", size / GB)
    } else if size >= MB {
        format!("{:.2} MB", size / MB)
    } else if size >= KB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{} B", size as u64)
    }
}

/// Formatear una fecha RFC 3339 del backend como "dd/mm/yyyy HH:MM";
/// si no se puede parsear, se muestra el string original
pub fn format_upload_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encode_reserved_chars() {
        assert_eq!(url_encode("informe anual"), "informe%20anual");
        assert_eq!(url_encode("uploadDate,desc"), "uploadDate%2Cdesc");
        assert_eq!(url_encode("a+b&c=d"), "a%2Bb%26c%3Dd");
        assert_eq!(url_encode("simple-name_1.pdf"), "simple-name_1.pdf");
    }

    #[test]
    fn url_encode_non_ascii() {
        // UTF-8 multi-byte: cada byte se codifica por separado
        assert_eq!(url_encode("café"), "caf%C3%A9");
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn upload_date_formats() {
        assert_eq!(format_upload_date("2025-03-01T10:30:00Z"), "01/03/2025 10:30");
        // Fallback: string no parseable se devuelve tal cual
        assert_eq!(format_upload_date("ayer"), "ayer");
    }
}
