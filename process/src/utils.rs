use regex::Regex;

/// Collapse a free-form sheet cell into a clean display name.
pub fn sanitize_name(input: &str) -> String {
    let clean = Regex::new(r"[^A-Za-z0-9&.\- ]").unwrap();
    let s = clean.replace_all(input, "").into_owned();

    let collapse = Regex::new(r" +").unwrap();
    collapse.replace_all(s.trim(), " ").into_owned()
}

/// Lowercase a domain cell and strip any scheme, `www.` prefix or path.
pub fn sanitize_domain(input: &str) -> String {
    let scheme = Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap();
    let stripped = scheme.replace(input.trim(), "");
    let stripped = stripped.trim_start_matches("www.");

    let host = stripped.split(['/', '?', '#']).next().unwrap_or(stripped);

    host.to_lowercase()
}

/// Normalize the comma-separated alias list: lowercase, trimmed, deduped,
/// always led by the organization name.
pub fn sanitize_search_terms(name: &str, input: &str) -> String {
    let mut aliases: Vec<String> = Vec::new();

    for alias in std::iter::once(name).chain(input.split(',')) {
        let alias = sanitize_name(alias).to_lowercase();

        if !alias.is_empty() && !aliases.contains(&alias) {
            aliases.push(alias);
        }
    }

    aliases.join(", ")
}
