// Text normalization and syntactic domain extraction. Both functions are
// pure and total: any string in, no failures, no I/O, and in particular no
// network access - URLs are never resolved or fetched.

use url::Url;

/// Lowercase the text, collapse whitespace runs to single spaces, and trim.
/// Same input always yields the same output.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extract the hostnames of URL-like substrings in the text, lowercased, in
/// order of first appearance. Duplicates are dropped: only membership tests
/// consume the list, so repeats carry no signal.
///
/// Handles schemed URLs (`https://evil.example/x`) and scheme-less tokens
/// (`www.foo.com`, `bit.ly/xyz`) alike.
pub fn extract_domains(raw: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut domains = Vec::new();

    for token in raw.split_whitespace() {
        let token = token.trim_matches(|c: char| {
            matches!(c, '(' | ')' | '[' | ']' | '<' | '>' | '"' | '\'' | ',' | '.' | ';' | '!' | '?')
        });

        if !token.contains('.') {
            continue;
        }

        if let Some(host) = parse_host(token)
            && seen.insert(host.clone())
        {
            domains.push(host);
        }
    }

    domains
}

/// Parse a token as a URL, trying to add http:// if needed.
fn parse_host(token: &str) -> Option<String> {
    let parsed = Url::parse(token)
        .ok()
        .filter(|u| u.has_host())
        .or_else(|| Url::parse(&format!("http://{}", token)).ok())?;

    let host = parsed.host_str()?.to_lowercase();
    looks_like_hostname(&host).then_some(host)
}

/// Cheap filter to keep dotted non-hosts ("e.g.", "3.5") out of the list:
/// the last label must look like a TLD.
fn looks_like_hostname(host: &str) -> bool {
    match host.rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}
