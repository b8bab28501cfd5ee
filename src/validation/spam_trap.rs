/// Substrings that mark an address as a trap wherever they appear.
const TRAP_KEYWORDS: &[&str] = &["abuse", "spam", "trap", "admin", "postmaster"];

/// Fixed list of suspicious local-part patterns: role-account prefixes,
/// disposable-provider names, filler runs, and keyboard walks. Matched as
/// literal substrings of the local part; the list is intentionally not a
/// general heuristic.
const SUSPICIOUS_LOCAL_PATTERNS: &[&str] = &[
    // Disposable providers
    "mailinator.com",
    "guerrillamail.com",
    "10minutemail.com",
    "dispostable.com",
    // Role accounts
    "admin@",
    "contact@",
    "abuse@",
    "postmaster@",
    "info@",
    "noreply@",
    "support@",
    "newsletter@",
    "marketing@",
    "sales@",
    "service@",
    "customerservice@",
    // Filler runs
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa@",
    "11111111111111111111111111111111111111111111111@",
    // Keyboard walks
    "xyzyxzxzxxyxxyzyxyxzyzxxyxyxyxyx@",
    "qazxswedcvfrtgbnhytgbvfredcxswqaz@",
];

/// Domains of disposable email services; matched exactly against the domain
/// part of the address.
const DISPOSABLE_DOMAINS: &[&str] = &[
    "mailinator.com",
    "guerrillamail.com",
    "10minutemail.com",
    "dispostable.com",
];

/// Returns the portion of the address before the first `@`, or the whole
/// string when no `@` is present.
pub fn local_part(email: &str) -> &str {
    email.split_once('@').map(|(local, _)| local).unwrap_or(email)
}

/// Returns the portion of the address after the last `@`, or the whole
/// string when no `@` is present.
pub fn domain_part(email: &str) -> &str {
    email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or(email)
}

/// Applies the pure spam-trap screens in order, short-circuiting on the
/// first hit:
/// 1. trap keywords anywhere in the full address,
/// 2. suspicious patterns in the local part,
/// 3. disposable-provider domains.
///
/// Domain reputation (the MX-record fallback) is a pipeline concern and is
/// not checked here.
///
/// # Arguments
/// * `email` - A string slice containing the email address to screen
///
/// # Returns
/// `true` if any heuristic matches, `false` otherwise
pub fn matches_trap_heuristics(email: &str) -> bool {
    // 1. Trap keywords in the full address
    if TRAP_KEYWORDS.iter().any(|keyword| email.contains(keyword)) {
        return true;
    }

    // 2. Suspicious local parts
    let local = local_part(email);
    if SUSPICIOUS_LOCAL_PATTERNS
        .iter()
        .any(|pattern| local.contains(pattern))
    {
        return true;
    }

    // 3. Disposable providers
    DISPOSABLE_DOMAINS.contains(&domain_part(email))
}
