//! Property-based tests for the registration ledger and the submit guard.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use sketchmentor_core::{
    Identity, MemoryStore, RegistrationLedger, SubmissionStatus, WaitlistFlow,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate plausible email addresses
fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9._+-]{1,20}@[a-z0-9-]{1,12}\\.[a-z]{2,6}")
        .expect("valid regex")
}

/// Arbitrary (possibly odd) strings a provider might report as email
fn any_email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{1,60}").expect("valid regex")
}

fn ledger() -> RegistrationLedger {
    RegistrationLedger::new(Arc::new(MemoryStore::new()), "registeredEmails")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Anything recorded is reported as registered
    #[test]
    fn record_then_is_registered(email in any_email_strategy()) {
        let ledger = ledger();
        ledger.record(&email).unwrap();
        prop_assert!(ledger.is_registered(&email));
    }

    /// Recording repeatedly keeps exactly one occurrence per email
    #[test]
    fn ledger_never_holds_duplicates(
        emails in prop::collection::vec(email_strategy(), 1..30),
        repeats in 1usize..4,
    ) {
        let ledger = ledger();
        for _ in 0..repeats {
            for email in &emails {
                ledger.record(email).unwrap();
            }
        }

        let entries = ledger.entries().unwrap();
        let unique: HashSet<&String> = emails.iter().collect();
        prop_assert_eq!(entries.len(), unique.len());

        let stored: HashSet<&String> = entries.iter().collect();
        prop_assert_eq!(stored, unique);
    }

    /// Ledger order is first-registration order
    #[test]
    fn ledger_preserves_first_insertion_order(
        emails in prop::collection::vec(email_strategy(), 1..20),
    ) {
        let ledger = ledger();
        let mut expected: Vec<String> = Vec::new();
        for email in &emails {
            ledger.record(email).unwrap();
            if !expected.contains(email) {
                expected.push(email.clone());
            }
        }
        prop_assert_eq!(ledger.entries().unwrap(), expected);
    }

    /// An email never recorded is never reported as registered
    #[test]
    fn unrecorded_email_is_not_registered(
        recorded in prop::collection::vec(email_strategy(), 0..10),
        other in email_strategy(),
    ) {
        prop_assume!(!recorded.contains(&other));
        let ledger = ledger();
        for email in &recorded {
            ledger.record(email).unwrap();
        }
        prop_assert!(!ledger.is_registered(&other));
    }

    /// Repeated submits after the first never create more pending work
    #[test]
    fn only_first_submit_passes_guard(email in email_strategy(), extra in 1usize..10) {
        let mut flow = WaitlistFlow::new(ledger());
        flow.identity_changed(Some(Identity::from_email(email)));
        flow.open_modal();

        prop_assert!(flow.begin_submit().is_some());
        for _ in 0..extra {
            prop_assert!(flow.begin_submit().is_none());
            prop_assert_eq!(flow.status(), SubmissionStatus::Submitting);
        }
    }
}
