use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::models::CleaningReport;
use crate::validation::dnsmx::{MxResolve, MxStatus};
use crate::validation::spam_trap;
use crate::validation::syntax;

/// Removes repeated entries from a list of addresses.
///
/// Exact string equality only: addresses are not normalized, so `A@x.com`
/// and `a@x.com` stay distinct.
pub fn dedupe(emails: Vec<String>) -> HashSet<String> {
    emails.into_iter().collect()
}

/// Runs candidate addresses through the cleaning pipeline: syntax check,
/// spam-trap screening, activity check, then deduplication.
///
/// Processing is sequential and blocking; one instance is meant to be used
/// from a single thread. MX lookups are memoized per domain for the duration
/// of one `clean` call, so a list with many addresses on the same domain
/// resolves it once.
pub struct EmailListCleaner<R: MxResolve> {
    resolver: R,
    mx_cache: RefCell<HashMap<String, MxStatus>>,
}

impl<R: MxResolve> EmailListCleaner<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            mx_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Classifies an address as a likely spam trap.
    ///
    /// The pure heuristics (trap keywords, suspicious local parts,
    /// disposable domains) run first and short-circuit; only when they all
    /// pass does the domain's MX status get consulted — a domain without
    /// resolvable MX records is treated as poor reputation and classified
    /// as a trap.
    pub fn is_spam_trap(&self, email: &str) -> bool {
        if spam_trap::matches_trap_heuristics(email) {
            return true;
        }

        !self.domain_lookup(spam_trap::domain_part(email)).has_records()
    }

    /// True iff the address's domain can currently receive mail, i.e. its
    /// MX lookup answers with at least one record.
    ///
    /// In the pipeline this runs after spam-trap screening, which already
    /// rejects every no-MX domain; with stable DNS this check cannot fail
    /// for an address that reaches it. The ordering is intentional and kept.
    pub fn is_active(&self, email: &str) -> bool {
        self.domain_lookup(spam_trap::domain_part(email)).has_records()
    }

    /// Cleans an input list and reports the survivors plus counters.
    ///
    /// Per address, in order: invalid syntax, spam trap, inactive — first
    /// hit counts and drops it. Survivors are deduplicated at the end;
    /// `cleaned_count` is the deduplicated size.
    pub fn clean(&self, emails: &[String]) -> CleaningReport {
        // Lookups are memoized per run; invocations stay independent.
        self.mx_cache.borrow_mut().clear();

        let mut kept = Vec::new();
        let mut invalid_count = 0;
        let mut inactive_count = 0;
        let mut spam_trap_count = 0;

        for email in emails {
            // 1. Syntax check
            if !syntax::is_valid_email(email) {
                invalid_count += 1;
                continue;
            }

            // 2. Spam-trap screening (heuristics, then MX reputation)
            if self.is_spam_trap(email) {
                spam_trap_count += 1;
                continue;
            }

            // 3. Activity check
            if self.is_active(email) {
                kept.push(email.clone());
            } else {
                inactive_count += 1;
            }
        }

        CleaningReport::new(dedupe(kept), invalid_count, inactive_count, spam_trap_count)
    }

    fn domain_lookup(&self, domain: &str) -> MxStatus {
        if let Some(status) = self.mx_cache.borrow().get(domain) {
            return status.clone();
        }

        let status = self.resolver.resolve_mx(domain);
        self.mx_cache
            .borrow_mut()
            .insert(domain.to_string(), status.clone());
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::dnsmx::{MockMxResolve, MxLookupError, MxRecord};
    use mockall::predicate::eq;

    fn records() -> MxStatus {
        MxStatus::Records(vec![MxRecord::new(10, "mx.example.com.")])
    }

    fn owned(emails: &[&str]) -> Vec<String> {
        emails.iter().map(|email| email.to_string()).collect()
    }

    #[test]
    fn end_to_end_mixed_list() {
        let mut resolver = MockMxResolve::new();
        // Only good.com reaches DNS; the invalid address and the disposable
        // domain are dropped before any lookup.
        resolver
            .expect_resolve_mx()
            .with(eq("good.com"))
            .times(1)
            .returning(|_| records());

        let cleaner = EmailListCleaner::new(resolver);
        let report = cleaner.clean(&owned(&[
            "a@good.com",
            "a@good.com",
            "not-an-email",
            "x@mailinator.com",
        ]));

        assert_eq!(report.cleaned, vec!["a@good.com"]);
        assert_eq!(report.cleaned_count, 1);
        assert_eq!(report.invalid_count, 1);
        assert_eq!(report.inactive_count, 0);
        assert_eq!(report.spam_trap_count, 1);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let cleaner = EmailListCleaner::new(MockMxResolve::new());
        let report = cleaner.clean(&[]);

        assert!(report.cleaned.is_empty());
        assert_eq!(report.cleaned_count, 0);
        assert_eq!(report.invalid_count, 0);
        assert_eq!(report.inactive_count, 0);
        assert_eq!(report.spam_trap_count, 0);
    }

    #[test]
    fn heuristic_traps_never_touch_dns() {
        let mut resolver = MockMxResolve::new();
        resolver.expect_resolve_mx().never();

        let cleaner = EmailListCleaner::new(resolver);
        assert!(cleaner.is_spam_trap("admin@anywhere.com"));
        assert!(cleaner.is_spam_trap("abuse@anywhere.com"));
        assert!(cleaner.is_spam_trap("x@mailinator.com"));
    }

    #[test]
    fn dns_timeout_counts_as_spam_trap_not_inactive() {
        let mut resolver = MockMxResolve::new();
        resolver
            .expect_resolve_mx()
            .with(eq("slow.example"))
            .times(1)
            .returning(|_| MxStatus::Failed(MxLookupError::Timeout));

        let cleaner = EmailListCleaner::new(resolver);
        let report = cleaner.clean(&owned(&["user@slow.example"]));

        assert_eq!(report.spam_trap_count, 1);
        assert_eq!(report.inactive_count, 0);
        assert!(report.cleaned.is_empty());
    }

    #[test]
    fn no_mx_domain_is_counted_as_spam_trap_not_inactive() {
        // Known quirk, kept on purpose: spam-trap screening consults MX
        // status first, so a no-MX domain never reaches the activity check
        // and inactive_count stays untouched.
        let mut resolver = MockMxResolve::new();
        resolver
            .expect_resolve_mx()
            .with(eq("dead.example"))
            .times(1)
            .returning(|_| MxStatus::NoRecords);

        let cleaner = EmailListCleaner::new(resolver);
        let report = cleaner.clean(&owned(&["user@dead.example"]));

        assert_eq!(report.spam_trap_count, 1);
        assert_eq!(report.inactive_count, 0);
    }

    #[test]
    fn is_active_is_false_without_mx_records() {
        // The pipeline can't normally observe this (see the test above),
        // but the checker itself answers false for a no-MX domain.
        let mut resolver = MockMxResolve::new();
        resolver
            .expect_resolve_mx()
            .returning(|_| MxStatus::NoRecords);

        let cleaner = EmailListCleaner::new(resolver);
        assert!(!cleaner.is_active("user@dead.example"));
    }

    #[test]
    fn repeated_domains_resolve_once_per_run() {
        let mut resolver = MockMxResolve::new();
        resolver
            .expect_resolve_mx()
            .with(eq("shared.example"))
            .times(1)
            .returning(|_| records());

        let cleaner = EmailListCleaner::new(resolver);
        let report = cleaner.clean(&owned(&[
            "a@shared.example",
            "b@shared.example",
            "c@shared.example",
        ]));

        assert_eq!(report.cleaned_count, 3);
    }

    #[test]
    fn cache_is_cleared_between_runs() {
        let mut resolver = MockMxResolve::new();
        resolver
            .expect_resolve_mx()
            .with(eq("good.com"))
            .times(2)
            .returning(|_| records());

        let cleaner = EmailListCleaner::new(resolver);
        cleaner.clean(&owned(&["a@good.com"]));
        cleaner.clean(&owned(&["a@good.com"]));
    }

    #[test]
    fn dedupe_is_case_sensitive_and_idempotent() {
        let first = dedupe(owned(&["A@x.com", "a@x.com", "a@x.com"]));
        assert_eq!(first.len(), 2);

        let second = dedupe(first.iter().cloned().collect());
        assert_eq!(second, first);
    }

    #[test]
    fn dedupe_never_grows_the_list() {
        let input = owned(&["a@x.com", "b@y.com", "a@x.com"]);
        let len = input.len();
        assert!(dedupe(input).len() <= len);
    }

    #[test]
    fn survivors_with_repeats_appear_once() {
        let mut resolver = MockMxResolve::new();
        resolver
            .expect_resolve_mx()
            .with(eq("good.com"))
            .times(1)
            .returning(|_| records());

        let cleaner = EmailListCleaner::new(resolver);
        let report = cleaner.clean(&owned(&["a@good.com", "a@good.com", "a@good.com"]));

        assert_eq!(report.cleaned, vec!["a@good.com"]);
        assert_eq!(report.cleaned_count, 1);
    }
}
