//! Presentation helpers shared by rendering shells.

use crate::models::Id;

/// Placeholder for values that are missing or unresolvable.
pub const EM_DASH: &str = "—";

/// Broad classification of a document's file, derived from its MIME type
/// or extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Word,
    Spreadsheet,
    Image,
    Other,
}

impl FileKind {
    /// Classify by case-insensitive substring, so both MIME types
    /// (`application/pdf`) and bare extensions (`PDF`) resolve.
    pub fn from_mime_or_ext(value: &str) -> Self {
        let lower = value.to_lowercase();
        if lower.contains("pdf") {
            Self::Pdf
        } else if lower.contains("word") || lower.contains("docx") {
            Self::Word
        } else if lower.contains("sheet") || lower.contains("xlsx") {
            Self::Spreadsheet
        } else if lower.contains("image") {
            Self::Image
        } else {
            Self::Other
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Pdf => "📕",
            Self::Word => "📘",
            Self::Spreadsheet => "📊",
            Self::Image => "🖼️",
            Self::Other => "📄",
        }
    }
}

/// Human-readable byte count: 1024-based, at most two decimals with
/// trailing zeros trimmed, capped at GB.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rendered = format!("{value:.2}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Badge color name for a role, used by shells that color-code the
/// signed-in user's role.
pub fn role_badge(role: &str) -> &'static str {
    match role {
        "admin" => "red",
        "manager" => "blue",
        "employee" => "green",
        _ => "gray",
    }
}

/// Well-known department display names. Departments outside the seeded
/// set resolve to `None` and shells fall back to the raw record.
pub fn department_display_name(id: &Id) -> Option<&'static str> {
    match id.as_str() {
        "1" => Some("Human Resource (HR)"),
        "2" => Some("Finance"),
        "3" => Some("Information Technology (IT)"),
        "4" => Some("Marketing"),
        "5" => Some("Operations"),
        _ => None,
    }
}
