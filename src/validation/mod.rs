/// Resolves a domain's MX records and classifies every failure mode into a
/// non-fatal outcome the cleaning pipeline can consume.
///
/// The `MxResolve` trait is the seam for injecting a fake resolver in tests;
/// `SystemMxResolver` is the real implementation on top of trust-dns.
pub mod dnsmx;

/// Heuristic spam-trap screens: trap keywords, suspicious local parts, and
/// disposable-provider domains. Pure string matching against fixed lists.
pub mod spam_trap;

/// Validates an email address against a deliberately permissive syntactic
/// pattern.
///
/// # Examples
/// ```
/// use email_list_cleaner::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub mod syntax;
