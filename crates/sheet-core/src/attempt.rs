//! # Checkout Attempt
//!
//! Explicit state machine over a single payment submission, and the
//! orchestrator that drives it: intent creation, card confirmation, sheet
//! completion, navigation. A failed attempt is terminal; the user re-opens
//! the sheet for a fresh one.

use crate::error::{CheckoutError, CheckoutResult};
use crate::gateway::PaymentIntentGateway;
use crate::provider::{BoxedPaymentProvider, IntentStatus};
use crate::sheet::{Navigator, PaymentMethodEvent, PaymentSheet, SheetStatus};
use chrono::{DateTime, Utc};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Terminal result of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    Failure,
}

/// Where an attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Event received, precondition not yet checked
    Submitted,
    /// Waiting on the provider to create the intent
    IntentRequested,
    /// Waiting on card confirmation
    Confirming,
    /// Terminal
    Completed(AttemptOutcome),
}

/// A single checkout attempt
#[derive(Debug, Clone)]
pub struct CheckoutAttempt {
    pub id: Uuid,
    state: AttemptState,
    pub created_at: DateTime<Utc>,
}

impl CheckoutAttempt {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: AttemptState::Submitted,
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn outcome(&self) -> Option<AttemptOutcome> {
        match self.state {
            AttemptState::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }

    fn advance(&mut self, next: AttemptState) {
        debug!(attempt = %self.id, from = ?self.state, to = ?next, "attempt transition");
        self.state = next;
    }
}

/// Sequences a submitted payment-method event through to completion.
///
/// Transitions: `Submitted → IntentRequested → Confirming → Completed`.
/// No transition retries; every failure ends the attempt.
pub struct CheckoutOrchestrator {
    gateway: PaymentIntentGateway,
    provider: BoxedPaymentProvider,
}

impl CheckoutOrchestrator {
    pub fn new(gateway: PaymentIntentGateway, provider: BoxedPaymentProvider) -> Self {
        Self { gateway, provider }
    }

    /// Drive one attempt for a submitted event.
    ///
    /// - A missing shipping option is a fatal precondition failure, raised
    ///   before any network call and before the sheet is touched.
    /// - Intent-creation failure propagates as `Err` without completing the
    ///   sheet (the sheet stays pending; the platform times it out).
    /// - Confirmation failure completes the sheet with `Fail` and ends the
    ///   attempt in `Completed(Failure)`.
    /// - On success the sheet completes with `Success`; if the created
    ///   intent still `requires_action`, a follow-up confirmation finishes
    ///   the authentication before navigation. Navigation happens exactly
    ///   once, on full success.
    #[instrument(skip_all, fields(payment_method = %event.payment_method_id))]
    pub async fn submit(
        &self,
        event: PaymentMethodEvent,
        sheet: &mut dyn PaymentSheet,
        navigator: &mut dyn Navigator,
    ) -> CheckoutResult<CheckoutAttempt> {
        let mut attempt = CheckoutAttempt::new();

        if event.shipping_option.is_none() {
            return Err(CheckoutError::NoShippingOption);
        }

        attempt.advance(AttemptState::IntentRequested);
        let intent = self.gateway.create_payment_intent(&event).await?;

        attempt.advance(AttemptState::Confirming);
        let confirmed = match intent.client_secret.as_deref() {
            Some(secret) => {
                self.provider
                    .confirm_card_payment(secret, Some(&event.payment_method_id))
                    .await
            }
            None => Err(CheckoutError::ProviderError {
                provider: self.provider.provider_name().to_string(),
                message: "payment intent carries no client secret".to_string(),
            }),
        };

        let updated = match confirmed {
            Ok(updated) => updated,
            Err(err) => {
                error!(attempt = %attempt.id, %err, "card confirmation failed");
                sheet.complete(SheetStatus::Fail).await;
                attempt.advance(AttemptState::Completed(AttemptOutcome::Failure));
                return Ok(attempt);
            }
        };

        sheet.complete(SheetStatus::Success).await;

        if intent.status == IntentStatus::RequiresAction {
            // first confirmation ran without client-side action handling;
            // finish the authentication against the updated secret
            let followup = match updated.client_secret.as_deref() {
                Some(secret) => self.provider.confirm_card_payment(secret, None).await,
                None => Err(CheckoutError::ProviderError {
                    provider: self.provider.provider_name().to_string(),
                    message: "confirmed intent carries no client secret".to_string(),
                }),
            };

            if let Err(err) = followup {
                error!(attempt = %attempt.id, %err, "payment could not be confirmed");
                attempt.advance(AttemptState::Completed(AttemptOutcome::Failure));
                return Ok(attempt);
            }
        }

        info!(attempt = %attempt.id, intent = %intent.id, "payment confirmed");
        navigator.to_order_confirmation();
        attempt.advance(AttemptState::Completed(AttemptOutcome::Success));
        Ok(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StoreCatalog;
    use crate::money::Currency;
    use crate::provider::{PaymentIntent, PaymentProvider};
    use crate::sheet::{SheetShippingOption, SheetUpdate};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Provider with scripted create/confirm behavior
    struct ScriptedProvider {
        intent_status: IntentStatus,
        fail_create: bool,
        fail_confirm: bool,
        fail_followup: bool,
        create_calls: AtomicUsize,
        confirm_calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn succeeding() -> Self {
            Self {
                intent_status: IntentStatus::RequiresConfirmation,
                fail_create: false,
                fail_confirm: false,
                fail_followup: false,
                create_calls: AtomicUsize::new(0),
                confirm_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PaymentProvider for ScriptedProvider {
        async fn create_intent(
            &self,
            amount: i64,
            currency: Currency,
        ) -> CheckoutResult<PaymentIntent> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_create {
                return Err(CheckoutError::ProviderError {
                    provider: "scripted".into(),
                    message: "intent creation refused".into(),
                });
            }
            Ok(PaymentIntent {
                id: "pi_scripted".into(),
                client_secret: Some("pi_scripted_secret_1".into()),
                status: self.intent_status,
                amount,
                currency: currency.as_str().into(),
            })
        }

        async fn confirm_card_payment(
            &self,
            _client_secret: &str,
            payment_method: Option<&str>,
        ) -> CheckoutResult<PaymentIntent> {
            let call = self.confirm_calls.fetch_add(1, Ordering::SeqCst);
            let failing = if call == 0 {
                self.fail_confirm
            } else {
                self.fail_followup
            };
            if failing {
                return Err(CheckoutError::PaymentDeclined {
                    reason: "card_declined".into(),
                });
            }
            // follow-up confirmations come without a payment method
            if call > 0 {
                assert!(payment_method.is_none());
            }
            Ok(PaymentIntent {
                id: "pi_scripted".into(),
                client_secret: Some("pi_scripted_secret_2".into()),
                status: IntentStatus::Succeeded,
                amount: 143800,
                currency: "chf".into(),
            })
        }

        async fn can_make_payment(&self) -> CheckoutResult<bool> {
            Ok(true)
        }

        fn provider_name(&self) -> &'static str {
            "scripted"
        }
    }

    #[derive(Default)]
    struct RecordingSheet {
        updates: Vec<SheetUpdate>,
        completions: Vec<SheetStatus>,
    }

    #[async_trait]
    impl PaymentSheet for RecordingSheet {
        async fn update_with(&mut self, update: SheetUpdate) {
            self.updates.push(update);
        }

        async fn complete(&mut self, status: SheetStatus) {
            self.completions.push(status);
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        confirmations: usize,
    }

    impl Navigator for RecordingNavigator {
        fn to_order_confirmation(&mut self) {
            self.confirmations += 1;
        }
    }

    fn orchestrator(provider: Arc<ScriptedProvider>) -> CheckoutOrchestrator {
        let catalog = Arc::new(StoreCatalog::demo());
        let gateway = PaymentIntentGateway::new(catalog, provider.clone());
        CheckoutOrchestrator::new(gateway, provider)
    }

    fn submitted_event(option: Option<&str>) -> PaymentMethodEvent {
        PaymentMethodEvent {
            payment_method_id: "pm_test".into(),
            payer_name: Some("Ada Lovelace".into()),
            payer_email: Some("ada@example.com".into()),
            payer_phone: None,
            shipping_address: None,
            shipping_option: option.map(|id| SheetShippingOption {
                id: id.into(),
                label: id.into(),
                detail: String::new(),
                amount: 0,
            }),
        }
    }

    #[tokio::test]
    async fn test_submission_without_option_fails_before_network() {
        let provider = Arc::new(ScriptedProvider::succeeding());
        let orchestrator = orchestrator(provider.clone());
        let mut sheet = RecordingSheet::default();
        let mut navigator = RecordingNavigator::default();

        let err = orchestrator
            .submit(submitted_event(None), &mut sheet, &mut navigator)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::NoShippingOption));
        assert_eq!(provider.create_calls.load(Ordering::SeqCst), 0);
        assert!(sheet.completions.is_empty());
        assert_eq!(navigator.confirmations, 0);
    }

    #[tokio::test]
    async fn test_successful_payment_completes_and_navigates_once() {
        let provider = Arc::new(ScriptedProvider::succeeding());
        let orchestrator = orchestrator(provider.clone());
        let mut sheet = RecordingSheet::default();
        let mut navigator = RecordingNavigator::default();

        let attempt = orchestrator
            .submit(
                submitted_event(Some("free-shipping")),
                &mut sheet,
                &mut navigator,
            )
            .await
            .unwrap();

        assert_eq!(attempt.outcome(), Some(AttemptOutcome::Success));
        assert_eq!(sheet.completions, vec![SheetStatus::Success]);
        assert_eq!(navigator.confirmations, 1);
        assert_eq!(provider.confirm_calls.load(Ordering::SeqCst), 1);
        // submission never updates the sheet, it only completes it
        assert!(sheet.updates.is_empty());
    }

    #[tokio::test]
    async fn test_declined_confirmation_fails_sheet_without_navigation() {
        let provider = Arc::new(ScriptedProvider {
            fail_confirm: true,
            ..ScriptedProvider::succeeding()
        });
        let orchestrator = orchestrator(provider.clone());
        let mut sheet = RecordingSheet::default();
        let mut navigator = RecordingNavigator::default();

        let attempt = orchestrator
            .submit(
                submitted_event(Some("express-shipping")),
                &mut sheet,
                &mut navigator,
            )
            .await
            .unwrap();

        assert_eq!(attempt.outcome(), Some(AttemptOutcome::Failure));
        assert_eq!(sheet.completions, vec![SheetStatus::Fail]);
        assert_eq!(navigator.confirmations, 0);
    }

    #[tokio::test]
    async fn test_intent_failure_leaves_sheet_pending() {
        let provider = Arc::new(ScriptedProvider {
            fail_create: true,
            ..ScriptedProvider::succeeding()
        });
        let orchestrator = orchestrator(provider.clone());
        let mut sheet = RecordingSheet::default();
        let mut navigator = RecordingNavigator::default();

        let result = orchestrator
            .submit(
                submitted_event(Some("free-shipping")),
                &mut sheet,
                &mut navigator,
            )
            .await;

        assert!(matches!(result, Err(CheckoutError::ProviderError { .. })));
        // the sheet was never completed — the platform times it out
        assert!(sheet.completions.is_empty());
        assert_eq!(navigator.confirmations, 0);
    }

    #[tokio::test]
    async fn test_requires_action_runs_followup_confirmation() {
        let provider = Arc::new(ScriptedProvider {
            intent_status: IntentStatus::RequiresAction,
            ..ScriptedProvider::succeeding()
        });
        let orchestrator = orchestrator(provider.clone());
        let mut sheet = RecordingSheet::default();
        let mut navigator = RecordingNavigator::default();

        let attempt = orchestrator
            .submit(
                submitted_event(Some("free-shipping")),
                &mut sheet,
                &mut navigator,
            )
            .await
            .unwrap();

        assert_eq!(attempt.outcome(), Some(AttemptOutcome::Success));
        assert_eq!(provider.confirm_calls.load(Ordering::SeqCst), 2);
        assert_eq!(sheet.completions, vec![SheetStatus::Success]);
        assert_eq!(navigator.confirmations, 1);
    }

    #[tokio::test]
    async fn test_failed_followup_ends_attempt_without_navigation() {
        let provider = Arc::new(ScriptedProvider {
            intent_status: IntentStatus::RequiresAction,
            fail_followup: true,
            ..ScriptedProvider::succeeding()
        });
        let orchestrator = orchestrator(provider.clone());
        let mut sheet = RecordingSheet::default();
        let mut navigator = RecordingNavigator::default();

        let attempt = orchestrator
            .submit(
                submitted_event(Some("free-shipping")),
                &mut sheet,
                &mut navigator,
            )
            .await
            .unwrap();

        // the sheet was already dismissed with Success; the attempt still
        // ends in Failure and the confirmation view is never shown
        assert_eq!(attempt.outcome(), Some(AttemptOutcome::Failure));
        assert_eq!(sheet.completions, vec![SheetStatus::Success]);
        assert_eq!(navigator.confirmations, 0);
    }
}
