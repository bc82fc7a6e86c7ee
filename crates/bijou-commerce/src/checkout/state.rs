//! Checkout state container.
//!
//! Tracks the shipping and payment sub-forms across the multi-step checkout
//! flow. Step components mutate the container through setters and call the
//! `validate_*` methods before advancing; expected validation failures are
//! reported as field-keyed messages, never as errors. Order submission itself
//! happens outside this container.

use crate::checkout::{Address, PickupPoint};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field keys under which validation messages are reported.
///
/// The keys match the form field names used by the step components.
pub mod errors {
    pub const SHIPPING_ADDRESS: &str = "shippingAddress";
    pub const PICKUP_POINT: &str = "pickupPoint";
    pub const PAYMENT_METHOD: &str = "paymentMethod";
    pub const ACCEPT_TERMS: &str = "acceptTerms";
    pub const ACCEPT_B2B_CONDITIONS: &str = "acceptB2BConditions";
}

const MSG_SHIPPING_ADDRESS: &str = "Veuillez sélectionner une adresse de livraison";
const MSG_PICKUP_POINT: &str = "Veuillez sélectionner un point de retrait";
const MSG_PAYMENT_METHOD: &str = "Veuillez choisir un mode de paiement";
const MSG_ACCEPT_TERMS: &str = "Veuillez accepter les conditions générales de vente";
const MSG_ACCEPT_B2B: &str = "Veuillez accepter les conditions de vente professionnelles";

/// How the order will be delivered.
///
/// The two modes carry mutually exclusive fields: a postal address for
/// `Shipping`, a pickup point for `Pickup`. Selecting one mode clears the
/// other mode's field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Home/office delivery to a postal address.
    Shipping,
    /// Collection at a carrier pickup point.
    Pickup,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Shipping => "shipping",
            DeliveryMode::Pickup => "pickup",
        }
    }
}

/// Shipping sub-form data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingData {
    /// Selected delivery mode.
    pub mode: DeliveryMode,
    /// Delivery address (only for `Shipping` mode).
    pub address: Option<Address>,
    /// Pickup point (only for `Pickup` mode).
    pub pickup_point: Option<PickupPoint>,
}

impl ShippingData {
    /// Create empty shipping data for a mode.
    pub fn new(mode: DeliveryMode) -> Self {
        Self {
            mode,
            address: None,
            pickup_point: None,
        }
    }
}

/// Available payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment.
    Card,
    /// Bank wire transfer.
    BankTransfer,
    /// B2B payment on account (net terms).
    OnAccount,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::OnAccount => "on_account",
        }
    }
}

/// Payment sub-form data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaymentData {
    /// Chosen payment method.
    pub method: Option<PaymentMethod>,
    /// General terms of sale accepted.
    pub accept_terms: bool,
    /// Professional (B2B) conditions accepted.
    pub accept_b2b_conditions: bool,
}

/// Derived position in the checkout flow.
///
/// There is no stored step enum; the stage is computed from which sub-forms
/// exist and which have passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutStage {
    /// Nothing chosen yet.
    Idle,
    /// Shipping form started but not validated.
    ShippingInProgress,
    /// Shipping validated, payment not started.
    ShippingValid,
    /// Payment form started but not validated.
    PaymentInProgress,
    /// Both forms validated; ready for submission.
    PaymentValid,
}

/// In-memory state for one checkout session.
///
/// Holds at most one [`ShippingData`] and one [`PaymentData`], plus the
/// field-keyed validation messages. Created empty (or pre-seeded) when
/// checkout starts and discarded on submit or [`reset`](Self::reset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutState {
    shipping: Option<ShippingData>,
    payment: Option<PaymentData>,
    errors: BTreeMap<String, String>,
    shipping_complete: bool,
    payment_complete: bool,
}

impl CheckoutState {
    /// Create an empty checkout state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pre-seeded state (e.g. restoring a saved session).
    ///
    /// Seeded data is not trusted as validated; completion is only granted by
    /// the `validate_*` methods.
    pub fn seeded(shipping: Option<ShippingData>, payment: Option<PaymentData>) -> Self {
        Self {
            shipping,
            payment,
            errors: BTreeMap::new(),
            shipping_complete: false,
            payment_complete: false,
        }
    }

    /// Current shipping sub-form, if started.
    pub fn shipping(&self) -> Option<&ShippingData> {
        self.shipping.as_ref()
    }

    /// Current payment sub-form, if started.
    pub fn payment(&self) -> Option<&PaymentData> {
        self.payment.as_ref()
    }

    /// All current validation messages, keyed by field name.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Validation message for one field, if any.
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    /// Whether the shipping step has passed validation.
    pub fn is_shipping_complete(&self) -> bool {
        self.shipping_complete
    }

    /// Whether the payment step has passed validation.
    pub fn is_payment_complete(&self) -> bool {
        self.payment_complete
    }

    /// Derived flow stage.
    pub fn stage(&self) -> CheckoutStage {
        if self.payment_complete {
            CheckoutStage::PaymentValid
        } else if self.payment.is_some() {
            CheckoutStage::PaymentInProgress
        } else if self.shipping_complete {
            CheckoutStage::ShippingValid
        } else if self.shipping.is_some() {
            CheckoutStage::ShippingInProgress
        } else {
            CheckoutStage::Idle
        }
    }

    /// Select the delivery mode.
    ///
    /// Switching modes clears the other mode's field and its stale validation
    /// message, and invalidates any previous shipping completion.
    pub fn set_delivery_mode(&mut self, mode: DeliveryMode) {
        let shipping = self
            .shipping
            .get_or_insert_with(|| ShippingData::new(mode));
        shipping.mode = mode;
        match mode {
            DeliveryMode::Shipping => {
                shipping.pickup_point = None;
                self.errors.remove(errors::PICKUP_POINT);
            }
            DeliveryMode::Pickup => {
                shipping.address = None;
                self.errors.remove(errors::SHIPPING_ADDRESS);
            }
        }
        self.shipping_complete = false;
    }

    /// Set the delivery address. Forces `Shipping` mode.
    pub fn set_address(&mut self, address: Address) {
        self.set_delivery_mode(DeliveryMode::Shipping);
        // set_delivery_mode guarantees the record exists
        if let Some(shipping) = self.shipping.as_mut() {
            shipping.address = Some(address);
        }
        self.errors.remove(errors::SHIPPING_ADDRESS);
        self.shipping_complete = false;
    }

    /// Set the pickup point. Forces `Pickup` mode.
    pub fn set_pickup_point(&mut self, point: PickupPoint) {
        self.set_delivery_mode(DeliveryMode::Pickup);
        if let Some(shipping) = self.shipping.as_mut() {
            shipping.pickup_point = Some(point);
        }
        self.errors.remove(errors::PICKUP_POINT);
        self.shipping_complete = false;
    }

    /// Choose the payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment.get_or_insert_with(PaymentData::default).method = Some(method);
        self.errors.remove(errors::PAYMENT_METHOD);
        self.payment_complete = false;
    }

    /// Record acceptance of the general terms of sale.
    pub fn set_accept_terms(&mut self, accepted: bool) {
        self.payment
            .get_or_insert_with(PaymentData::default)
            .accept_terms = accepted;
        self.errors.remove(errors::ACCEPT_TERMS);
        self.payment_complete = false;
    }

    /// Record acceptance of the professional conditions.
    pub fn set_accept_b2b_conditions(&mut self, accepted: bool) {
        self.payment
            .get_or_insert_with(PaymentData::default)
            .accept_b2b_conditions = accepted;
        self.errors.remove(errors::ACCEPT_B2B_CONDITIONS);
        self.payment_complete = false;
    }

    /// Validate the shipping step.
    ///
    /// Fails when no shipping data exists, when `Shipping` mode lacks an
    /// address, or when `Pickup` mode lacks a pickup point. On success the
    /// shipping error keys are cleared and the step is marked complete.
    pub fn validate_shipping(&mut self) -> bool {
        let failure = match self.shipping.as_ref() {
            None => Some((errors::SHIPPING_ADDRESS, MSG_SHIPPING_ADDRESS)),
            Some(s) => match s.mode {
                DeliveryMode::Shipping if s.address.is_none() => {
                    Some((errors::SHIPPING_ADDRESS, MSG_SHIPPING_ADDRESS))
                }
                DeliveryMode::Pickup if s.pickup_point.is_none() => {
                    Some((errors::PICKUP_POINT, MSG_PICKUP_POINT))
                }
                _ => None,
            },
        };

        match failure {
            Some((key, message)) => {
                self.errors.insert(key.to_string(), message.to_string());
                self.shipping_complete = false;
                false
            }
            None => {
                self.errors.remove(errors::SHIPPING_ADDRESS);
                self.errors.remove(errors::PICKUP_POINT);
                self.shipping_complete = true;
                true
            }
        }
    }

    /// Validate the payment step.
    ///
    /// Succeeds only when a payment method is chosen and both consent boxes
    /// are ticked; every missing condition gets its own field message.
    pub fn validate_payment(&mut self) -> bool {
        let payment = self.payment.clone().unwrap_or_default();
        let mut ok = true;

        if payment.method.is_none() {
            self.errors
                .insert(errors::PAYMENT_METHOD.to_string(), MSG_PAYMENT_METHOD.to_string());
            ok = false;
        } else {
            self.errors.remove(errors::PAYMENT_METHOD);
        }

        if !payment.accept_terms {
            self.errors
                .insert(errors::ACCEPT_TERMS.to_string(), MSG_ACCEPT_TERMS.to_string());
            ok = false;
        } else {
            self.errors.remove(errors::ACCEPT_TERMS);
        }

        if !payment.accept_b2b_conditions {
            self.errors
                .insert(errors::ACCEPT_B2B_CONDITIONS.to_string(), MSG_ACCEPT_B2B.to_string());
            ok = false;
        } else {
            self.errors.remove(errors::ACCEPT_B2B_CONDITIONS);
        }

        self.payment_complete = ok;
        ok
    }

    /// Return to the fully empty initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Serialize for session storage.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a state previously written by [`to_json`](Self::to_json).
    ///
    /// Unlike [`seeded`](Self::seeded), the round trip preserves completion
    /// flags and validation messages: the data was already validated when the
    /// state was saved.
    pub fn from_json(raw: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(raw)?)
    }
}
