//! # Checkout Flows
//!
//! The timed submit → confirm → reset cycle against file-backed storage,
//! including views that are closed mid-cycle.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sf_01_cart_engine::{
        CartSession, CheckoutState, FileCartStore, CONFIRMATION_DELAY, SUBMISSION_DELAY,
    };

    use crate::integration::fixtures::{poultry, poultry_catalog, POULTRY_SLOT};

    const MARGIN: Duration = Duration::from_millis(5);

    fn slot_content(dir: &tempfile::TempDir) -> Option<String> {
        std::fs::read_to_string(dir.path().join(format!("{POULTRY_SLOT}.json"))).ok()
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_cycle_clears_persisted_cart() {
        let dir = tempfile::tempdir().unwrap();
        let session =
            CartSession::mount(poultry(), poultry_catalog().await, FileCartStore::new(dir.path()));
        session.add("p8");
        session.add("p7");
        session.add("p7");

        assert!(session.checkout());
        tokio::time::sleep(SUBMISSION_DELAY + MARGIN).await;
        assert_eq!(session.snapshot().state, CheckoutState::Confirmed);
        assert_eq!(slot_content(&dir).as_deref(), Some(r#"{"p7":2,"p8":1}"#));

        tokio::time::sleep(CONFIRMATION_DELAY).await;
        assert_eq!(session.snapshot().state, CheckoutState::Idle);
        assert_eq!(slot_content(&dir).as_deref(), Some("{}"));
        drop(session);

        let reopened =
            CartSession::mount(poultry(), poultry_catalog().await, FileCartStore::new(dir.path()));
        assert_eq!(reopened.snapshot().total_items, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_mid_checkout_keeps_cart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let session = CartSession::mount(
                poultry(),
                poultry_catalog().await,
                FileCartStore::new(dir.path()),
            );
            session.add("p1");
            assert!(session.checkout());
            tokio::time::sleep(SUBMISSION_DELAY / 2).await;
        }

        tokio::time::sleep(SUBMISSION_DELAY + CONFIRMATION_DELAY).await;
        assert_eq!(slot_content(&dir).as_deref(), Some(r#"{"p1":1}"#));

        let reopened =
            CartSession::mount(poultry(), poultry_catalog().await, FileCartStore::new(dir.path()));
        let snap = reopened.snapshot();
        assert_eq!(snap.state, CheckoutState::Idle);
        assert_eq!(snap.total_items, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_checkout_after_reset() {
        let dir = tempfile::tempdir().unwrap();
        let session =
            CartSession::mount(poultry(), poultry_catalog().await, FileCartStore::new(dir.path()));

        session.add("p2");
        assert!(session.checkout());
        tokio::time::sleep(SUBMISSION_DELAY + CONFIRMATION_DELAY + MARGIN).await;
        assert!(!session.checkout());

        session.add("p3");
        assert!(session.checkout());
        tokio::time::sleep(SUBMISSION_DELAY + CONFIRMATION_DELAY + MARGIN).await;

        let metrics = session.metrics().snapshot();
        assert_eq!(metrics.checkouts_started, 2);
        assert_eq!(metrics.checkouts_completed, 2);
        assert_eq!(session.snapshot().total_items, 0);
    }
}
