//! Markup helpers: escaping and Outlook conditional comments.
//!
//! Outlook desktop renders HTML with a word-processor engine that honours
//! `<!--[if mso]>` blocks; every other client treats those blocks as comments
//! and renders the `<!--[if !mso]><!-->` fallback instead. Components that need
//! different markup per engine emit both blocks side by side with [`dual`].

/// Escape text content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (double-quoted).
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wrap markup so only the legacy (mso) engine renders it.
pub fn mso(inner: &str) -> String {
    format!("<!--[if mso]>{inner}<![endif]-->")
}

/// Wrap markup so every engine except mso renders it.
pub fn not_mso(inner: &str) -> String {
    format!("<!--[if !mso]><!-->{inner}<!--<![endif]-->")
}

/// Emit two mutually exclusive fragments: `legacy` for mso, `modern` for the
/// rest.
pub fn dual(legacy: &str, modern: &str) -> String {
    let mut out = mso(legacy);
    out.push_str(&not_mso(modern));
    out
}

/// Format `name="value"` with the value escaped.
pub fn attr(name: &str, value: &str) -> String {
    format!("{name}=\"{}\"", escape_attr(value))
}
