use std::path::Path;

/// Read a text file, stripping a UTF-8 BOM and tolerating non-UTF-8 bytes.
///
/// Maven logs captured on Windows occasionally carry a BOM or stray
/// platform-encoded bytes; those are replaced rather than rejected.
pub fn read_text_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(content.strip_prefix('\u{feff}').unwrap_or(&content).to_string())
}

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
