//! Field normalizers for contact and identity fields.
//!
//! These are leaves of the dependency graph: pure string transforms with
//! no I/O, consumed by every save path that writes the corresponding
//! field. All of them are idempotent.

/// Normalize a phone number to `+` followed by digits only.
///
/// Strips spaces, hyphens, parentheses, dots and any other separator.
/// Returns `None` when the input contains no digits at all.
///
/// # Examples
///
/// ```
/// use maktab_core::normalize::normalize_phone;
///
/// assert_eq!(normalize_phone(" +998-90-123-45-67 ").as_deref(), Some("+998901234567"));
/// assert_eq!(normalize_phone("90 123 45 67").as_deref(), Some("+901234567"));
/// assert_eq!(normalize_phone("call me"), None);
/// ```
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("+{digits}"))
}

/// Normalize a website URL: trim and default the scheme to `https://`.
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_website(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Known social network URL prefixes stripped from handles.
const SOCIAL_PREFIXES: &[&str] = &[
    "https://www.instagram.com/",
    "https://instagram.com/",
    "https://www.facebook.com/",
    "https://facebook.com/",
    "https://t.me/",
    "http://t.me/",
    "t.me/",
    "instagram.com/",
    "facebook.com/",
];

/// Normalize a social-media handle: strip known URL prefixes and a
/// leading `@`, keep the bare handle.
///
/// Returns `None` for empty input.
pub fn normalize_social_handle(raw: &str) -> Option<String> {
    let mut handle = raw.trim();
    for prefix in SOCIAL_PREFIXES {
        if let Some(rest) = handle.strip_prefix(prefix) {
            handle = rest;
            break;
        }
    }
    let handle = handle.trim_start_matches('@').trim_end_matches('/');
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_string())
    }
}

/// Generate a URL slug from a display name.
///
/// Lowercases, converts any run of non-alphanumeric characters into a
/// single hyphen, and trims leading/trailing hyphens. Idempotent:
/// `generate_slug(generate_slug(x)) == generate_slug(x)`.
///
/// # Examples
///
/// ```
/// use maktab_core::normalize::generate_slug;
///
/// assert_eq!(generate_slug("Cambridge School"), "cambridge-school");
/// assert_eq!(generate_slug("  A++ Academy  "), "a-academy");
/// ```
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // suppress leading hyphen
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Resolve a slug collision by appending `-2`, `-3`, ... to the base
/// until a free value is found.
///
/// Returns `base` unchanged when it is not present in `existing`.
pub fn generate_unique_slug(base: &str, existing: &[String]) -> String {
    if !existing.iter().any(|s| s == base) {
        return base.to_string();
    }
    let mut n: u32 = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !existing.iter().any(|s| s == &candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_strips_separators() {
        assert_eq!(
            normalize_phone(" +998-90-123-45-67 ").as_deref(),
            Some("+998901234567")
        );
    }

    #[test]
    fn phone_without_plus_gets_one() {
        assert_eq!(normalize_phone("90 123 45 67").as_deref(), Some("+901234567"));
    }

    #[test]
    fn phone_without_digits_is_none() {
        assert_eq!(normalize_phone(""), None);
        assert_eq!(normalize_phone("call me maybe"), None);
    }

    #[test]
    fn phone_is_idempotent() {
        let once = normalize_phone("+998 (90) 123-45-67").unwrap();
        let twice = normalize_phone(&once).unwrap();
        assert_eq!(once, twice);
        assert!(once.starts_with('+'));
    }

    #[test]
    fn website_defaults_scheme() {
        assert_eq!(
            normalize_website("example.uz").as_deref(),
            Some("https://example.uz")
        );
        assert_eq!(
            normalize_website("http://example.uz").as_deref(),
            Some("http://example.uz")
        );
        assert_eq!(normalize_website("   "), None);
    }

    #[test]
    fn social_handle_strips_url_and_at() {
        assert_eq!(
            normalize_social_handle("https://instagram.com/maktab_uz").as_deref(),
            Some("maktab_uz")
        );
        assert_eq!(
            normalize_social_handle("@maktab_uz").as_deref(),
            Some("maktab_uz")
        );
        assert_eq!(
            normalize_social_handle("t.me/maktab_uz/").as_deref(),
            Some("maktab_uz")
        );
        assert_eq!(normalize_social_handle("  "), None);
    }

    #[test]
    fn slug_basic() {
        assert_eq!(generate_slug("Cambridge School"), "cambridge-school");
        assert_eq!(generate_slug("  A++ Academy  "), "a-academy");
        assert_eq!(generate_slug("---"), "");
    }

    #[test]
    fn slug_is_idempotent() {
        let once = generate_slug("Ta'lim & Tarbiya #1");
        assert_eq!(generate_slug(&once), once);
    }

    #[test]
    fn unique_slug_returns_base_when_free() {
        assert_eq!(generate_unique_slug("cambridge-school", &[]), "cambridge-school");
    }

    #[test]
    fn unique_slug_appends_first_free_suffix() {
        let existing = vec![
            "cambridge-school".to_string(),
            "cambridge-school-2".to_string(),
        ];
        assert_eq!(
            generate_unique_slug("cambridge-school", &existing),
            "cambridge-school-3"
        );
    }

    #[test]
    fn unique_slug_never_collides() {
        let existing: Vec<String> =
            (2..=9).map(|n| format!("s-{n}")).chain(["s".to_string()]).collect();
        let slug = generate_unique_slug("s", &existing);
        assert!(!existing.contains(&slug));
        assert_eq!(slug, "s-10");
    }
}
