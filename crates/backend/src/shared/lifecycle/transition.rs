use super::TransitionError;
use contracts::domain::common::{Lifecycle, Stateful, StatusChange, TransitionMeta};

/// Check a requested status change and build the resulting record.
///
/// The input is never mutated: on success a new record value is returned
/// with the target status, the change appended to its history and the
/// version bumped. `created_at` is carried over unchanged.
pub fn attempt_transition<R: Stateful>(
    record: &R,
    target: R::Status,
    meta: TransitionMeta,
) -> Result<R, TransitionError> {
    let from = record.status();
    if !from.can_transition_to(target) {
        return Err(TransitionError::InvalidTransition {
            collection: R::collection_name(),
            from: from.code(),
            to: target.code(),
        });
    }

    let mut next = record.clone();
    next.apply_status_change(StatusChange::new(from, target, meta));
    Ok(next)
}
