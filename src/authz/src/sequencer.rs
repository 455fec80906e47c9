//! Ordered short-circuit evaluation of asynchronous probes
//!
//! This is the engine behind [`GroupsRule`](crate::rule::GroupsRule), kept
//! consumer-agnostic: it walks a finite ordered sequence of candidates,
//! awaits an asynchronous probe for each, and stops at the first candidate
//! whose probe result satisfies the acceptance predicate.
//!
//! Guarantees:
//!
//! - Candidates are probed strictly one at a time, in iteration order; the
//!   probe for candidate `i + 1` is never started before the acceptance
//!   decision for candidate `i` has been made. Sequencing is a contract,
//!   not an accident: probes may be expensive or side-effecting, and a
//!   candidate whose turn never comes must never be probed.
//! - As soon as a candidate is accepted, no further candidates are drawn
//!   from the sequence and no further probes are started.
//! - An empty sequence produces the exhaustion outcome with no probes run.
//! - Each await is a suspension point; dropping the returned future between
//!   candidates abandons the evaluation without starting another probe.
//!
//! Probe failures are not handled here: the probe's output type is opaque,
//! so callers that want "a failed probe is a non-accepting result" encode
//! the failure in `R` and let the predicate decide.

use std::future::Future;

/// Drive `candidates` through `probe` until one is accepted
///
/// Returns `on_accepted(candidate, result)` for the first candidate whose
/// probe result satisfies `accept`, or `on_exhausted()` once the sequence
/// runs out. The sequence is consumed single-pass; it is never reordered,
/// deduplicated, or re-traversed.
pub async fn run_until_accepted<C, R, O, Fut>(
    candidates: impl IntoIterator<Item = C>,
    mut probe: impl FnMut(&C) -> Fut,
    mut accept: impl FnMut(&C, &R) -> bool,
    on_accepted: impl FnOnce(C, R) -> O,
    on_exhausted: impl FnOnce() -> O,
) -> O
where
    Fut: Future<Output = R>,
{
    for candidate in candidates {
        let result = probe(&candidate).await;
        if accept(&candidate, &result) {
            return on_accepted(candidate, result);
        }
    }
    on_exhausted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    async fn scan_counting(
        candidates: Vec<usize>,
        accept_at: Option<usize>,
        probes: &AtomicUsize,
    ) -> Option<usize> {
        run_until_accepted(
            candidates,
            |i| {
                let i = *i;
                probes.fetch_add(1, Ordering::SeqCst);
                async move { i }
            },
            |_, result| Some(*result) == accept_at,
            |candidate, _| Some(candidate),
            || None,
        )
        .await
    }

    #[tokio::test]
    async fn test_stops_at_first_accepted_candidate() {
        let probes = AtomicUsize::new(0);
        let outcome = scan_counting(vec![0, 1, 2], Some(0), &probes).await;

        assert_eq!(outcome, Some(0));
        assert_eq!(probes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_probes_run_in_configured_order() {
        let order = Mutex::new(Vec::new());
        let outcome = run_until_accepted(
            vec!["a", "b", "c"],
            |name| {
                let name = *name;
                order.lock().unwrap().push(name);
                async move { name }
            },
            |_, _| false,
            |_, _| Some(()),
            || None,
        )
        .await;

        assert_eq!(outcome, None);
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_exhaustion_probes_every_candidate_once() {
        let probes = AtomicUsize::new(0);
        let outcome = scan_counting(vec![0, 1, 2], None, &probes).await;

        assert_eq!(outcome, None);
        assert_eq!(probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_empty_sequence_runs_no_probes() {
        let probes = AtomicUsize::new(0);
        let outcome = scan_counting(Vec::new(), Some(0), &probes).await;

        assert_eq!(outcome, None);
        assert_eq!(probes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_accepted_candidate_is_handed_to_outcome() {
        let outcome = run_until_accepted(
            vec![10, 20, 30],
            |i| {
                let doubled = i * 2;
                async move { doubled }
            },
            |_, result| *result == 40,
            |candidate, result| (candidate, result),
            || (0, 0),
        )
        .await;

        assert_eq!(outcome, (20, 40));
    }

    proptest! {
        /// Accepting index `hit` means exactly `hit + 1` probes; no
        /// acceptance means every candidate is probed exactly once.
        #[test]
        fn prop_probe_count_matches_accepted_index(len in 0usize..16, hit in 0usize..16) {
            let probes = AtomicUsize::new(0);
            let accept_at = if hit < len { Some(hit) } else { None };

            let outcome = tokio_test::block_on(scan_counting(
                (0..len).collect(),
                accept_at,
                &probes,
            ));

            let expected_probes = match accept_at {
                Some(i) => i + 1,
                None => len,
            };
            prop_assert_eq!(outcome, accept_at);
            prop_assert_eq!(probes.load(Ordering::SeqCst), expected_probes);
        }
    }
}
