use chrono::{DateTime, Local};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable size with two decimals. TB is the largest unit; anything
/// bigger is still reported in TB.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", SIZE_UNITS[unit])
}

/// ctime-style, e.g. `Mon Oct  5 14:03:09 2026`. Missing timestamps render empty.
pub fn format_timestamp(ts: Option<&DateTime<Local>>) -> String {
    ts.map(|t| t.format("%a %b %e %H:%M:%S %Y").to_string())
        .unwrap_or_default()
}

/// Split a `;`-separated path list, dropping empty segments.
pub fn split_path_list(s: &str) -> Vec<String> {
    s.split(';')
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// If user loads a hash file (text) allow common formats:
/// - single hex line
/// - "filename <hash>"
/// - "hash  filename" (sha256sum output)
///
/// The token is returned as written; no case folding.
pub fn parse_first_hash_from_text(s: &str) -> Option<String> {
    for line in s.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [only] => return Some((*only).to_string()),
            _ => {}
        }
        if let Some(tok) = tokens.iter().find(|t| looks_like_digest(t)) {
            return Some((*tok).to_string());
        }
    }
    None
}

fn looks_like_digest(tok: &str) -> bool {
    tok.len() >= 16 && tok.chars().all(|c| c.is_ascii_hexdigit())
}
