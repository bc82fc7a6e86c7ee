//! Multi-step checkout state.

mod address;
mod state;

pub use address::{Address, PickupPoint};
pub use state::{
    errors as error_keys, CheckoutStage, CheckoutState, DeliveryMode, PaymentData, PaymentMethod,
    ShippingData,
};
