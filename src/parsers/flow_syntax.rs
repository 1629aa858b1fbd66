//! Flow-only syntax handling
//!
//! Flow files are parsed with the TypeScript+JSX grammar. Constructs that
//! grammar rejects are overwritten with spaces first, so every byte offset
//! in a diagnostic still points at the original text. Whatever survives
//! that and still fails to parse is scanned lexically for import targets.

use regex::Regex;
use std::sync::OnceLock;

/// Keywords that only Flow accepts in these positions
///
/// - `import typeof X from` and `import { typeof X } from`
/// - `declare export ...`
/// - `opaque type T: Super = ...` (the keyword and the supertype)
fn keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\b(?:import\s*(?:\{[^}]*?)?(?P<typeof>typeof)\s|(?P<declare>declare)\s+export\b|(?P<opaque>opaque)\s+type\s+[A-Za-z_$][\w$]*(?:\s*<[^>]*>)?(?P<supertype>\s*:[^=;]*)?)",
        )
        .expect("hardcoded pattern is valid")
    })
}

fn import_target_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:\bfrom\s*|\bimport\s*|\b(?:require|import)\s*\(\s*)['"]([^'"\n]+)['"]"#)
            .expect("hardcoded pattern is valid")
    })
}

/// Blank out Flow-only constructs, keeping the text the same length
///
/// Strings and comments are left alone.
pub fn strip_flow_syntax(source: &str) -> String {
    let mask = code_mask(source);
    let in_code = |pos: usize| mask.get(pos).copied().unwrap_or(false);
    let mut bytes = source.as_bytes().to_vec();

    // `{| ... |}` exact object types become plain object types
    for i in 0..bytes.len().saturating_sub(1) {
        if !in_code(i) || !in_code(i + 1) {
            continue;
        }
        match (bytes[i], bytes[i + 1]) {
            (b'{', b'|') => bytes[i + 1] = b' ',
            (b'|', b'}') => bytes[i] = b' ',
            _ => {}
        }
    }

    for caps in keyword_regex().captures_iter(source) {
        for name in ["typeof", "declare", "opaque", "supertype"] {
            if let Some(m) = caps.name(name) {
                if in_code(m.start()) {
                    bytes[m.range()].fill(b' ');
                }
            }
        }
    }

    // Whole characters are replaced, so the bytes stay valid UTF-8
    String::from_utf8(bytes).unwrap_or_else(|_| source.to_string())
}

/// Import targets found without a syntax tree, in document order
///
/// Covers `from '...'`, `import '...'`, `import('...')` and `require('...')`
/// outside strings and comments.
pub fn scan_import_targets(source: &str) -> Vec<String> {
    let mask = code_mask(source);

    import_target_regex()
        .captures_iter(source)
        .filter(|caps| caps.get(0).is_some_and(|m| mask.get(m.start()).copied().unwrap_or(false)))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// `true` for every byte outside string literals and comments
fn code_mask(source: &str) -> Vec<bool> {
    let bytes = source.as_bytes();
    let mut mask = vec![true; bytes.len()];
    let mut i = 0;

    while i < bytes.len() {
        let end = match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'/')) => find_from(bytes, i, b"\n").unwrap_or(bytes.len()),
            (b'/', Some(b'*')) => find_from(bytes, i + 2, b"*/").map_or(bytes.len(), |end| end + 2),
            (quote @ (b'\'' | b'"' | b'`'), _) => string_end(bytes, i, quote),
            _ => {
                i += 1;
                continue;
            }
        };

        mask[i..end].fill(false);
        i = end;
    }

    mask
}

fn find_from(bytes: &[u8], start: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(start..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + start)
}

/// Index just past the closing quote; plain strings also stop at a newline
fn string_end(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut j = start + 1;

    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b if b == quote => return j + 1,
            b'\n' if quote != b'`' => return j + 1,
            _ => j += 1,
        }
    }

    bytes.len()
}
