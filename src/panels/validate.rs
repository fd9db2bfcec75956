// ABOUTME: Field-specific validation rules for every dashboard panel

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{personality_by_key, Cue, Personality};

/// Display-name length ceiling.
pub const MAX_NAME_LENGTH: usize = 50;

/// Upload size ceiling for logo files.
pub const MAX_LOGO_BYTES: u64 = 2 * 1024 * 1024;

/// Maximum personas a store may enable.
pub const MAX_PERSONALITIES: usize = 3;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#([0-9A-Fa-f]{3}){1,2}$").unwrap();
}

/// Store display name: non-empty, at most 50 characters.
pub fn store_name(value: &String) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Store name cannot be empty".to_string());
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("Store name cannot exceed {MAX_NAME_LENGTH} characters"));
    }
    Ok(())
}

/// `#`-prefixed 3- or 6-digit hex color.
pub fn theme_color(value: &String) -> Result<(), String> {
    if HEX_COLOR.is_match(value) {
        Ok(())
    } else {
        Err("Enter a valid hex color, e.g. #FF6B00".to_string())
    }
}

/// Cue: both parts non-empty after trim.
pub fn cue(value: &Cue) -> Result<(), String> {
    if value.title.trim().is_empty() || value.value.trim().is_empty() {
        return Err("Both a title and a message are required".to_string());
    }
    Ok(())
}

/// Every cue in the list must itself be valid.
pub fn cue_list(values: &Vec<Cue>) -> Result<(), String> {
    values.iter().try_for_each(cue)
}

/// Loader text: non-empty after trim.
pub fn loader_text(value: &String) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Loader text cannot be empty".to_string());
    }
    Ok(())
}

pub fn loader_list(values: &Vec<String>) -> Result<(), String> {
    values.iter().try_for_each(loader_text)
}

/// Personality selection: drawn from the catalog, between one and three
/// entries at save time.
pub fn personality_set(values: &Vec<Personality>) -> Result<(), String> {
    if values.is_empty() {
        return Err("At least one personality must be selected".to_string());
    }
    if values.len() > MAX_PERSONALITIES {
        return Err(format!("Maximum of {MAX_PERSONALITIES} personalities allowed"));
    }
    for p in values {
        if personality_by_key(&p.name).is_none() {
            return Err(format!("Unknown personality: {}", p.name));
        }
    }
    Ok(())
}

/// Local logo file staged for upload: accepted image type, at most 2 MiB.
/// Only the extension-derived type is checked; the URL produced by the
/// upload endpoint is never validated.
pub fn logo_file(path: &Path) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg" | "png" | "gif" | "svg" | "webp") => {}
        _ => {
            return Err("Please choose an image file (JPEG, PNG, GIF, SVG, or WebP)".to_string());
        }
    }

    let size = std::fs::metadata(path)
        .map_err(|e| format!("Could not read {}: {e}", path.display()))?
        .len();
    if size > MAX_LOGO_BYTES {
        return Err("File size must be less than 2MB".to_string());
    }
    Ok(())
}
