//! Usage classification against the reference key set.
//!
//! Call sites usually supply only the portion of a key relative to a
//! namespace bound elsewhere in the file (`useTranslations('Common')` plus
//! `t('btn')` resolving to `Common.btn`). The namespace binding itself is
//! never parsed, so a candidate is accepted when any known key ends with it
//! as a dot-delimited tail. The heuristic under-reports on purpose: the
//! suspicious list feeds a human triage queue, where noise costs more than
//! the occasional wrongly-accepted key.

use crate::{keyset::KeySet, scanner::Usage};

/// Classification of a single call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Verified,
    Suspicious,
}

/// Outcome of reconciling the scanned usages against the key set.
#[derive(Debug)]
pub struct AuditSummary {
    pub key_count: usize,
    pub usage_count: usize,
    pub verified_count: usize,
    /// Suspicious usages, in scan order.
    pub suspicious: Vec<Usage>,
}

/// Classify one candidate key.
///
/// Verified when the candidate is a member of the key set, or when any
/// member ends with `.{candidate}`. Only existence matters, so the set's
/// iteration order cannot affect the outcome.
pub fn classify(candidate: &str, keys: &KeySet) -> Verdict {
    if keys.contains(candidate) {
        return Verdict::Verified;
    }

    let tail = format!(".{}", candidate);
    if keys.iter().any(|k| k == candidate || k.ends_with(&tail)) {
        Verdict::Verified
    } else {
        Verdict::Suspicious
    }
}

/// Classify every usage and fold the verdicts into an [`AuditSummary`].
pub fn reconcile(keys: &KeySet, usages: Vec<Usage>) -> AuditSummary {
    let usage_count = usages.len();
    let mut verified_count = 0;
    let mut suspicious = Vec::new();

    for usage in usages {
        match classify(&usage.key, keys) {
            Verdict::Verified => verified_count += 1,
            Verdict::Suspicious => suspicious.push(usage),
        }
    }

    AuditSummary {
        key_count: keys.len(),
        usage_count,
        verified_count,
        suspicious,
    }
}
