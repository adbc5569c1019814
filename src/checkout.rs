//! Checkout
//!
//! Billing form data, the order-notification wire types, and the record kept after a
//! successful order.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    items::CartLineItem,
    snapshot::CartSnapshot,
    storage::{Slot, SlotError, Storage},
};

/// Slot the last completed checkout is stored under.
pub const CHECKOUT_SLOT: Slot<CheckoutRecord> = Slot::new("checkoutData");

/// A billing form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingField {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Street address
    Address,
    /// Postal code
    PostalCode,
    /// Country
    Country,
    /// Phone number
    Phone,
    /// Email address
    Email,
}

impl BillingField {
    /// All fields in form order.
    pub const ALL: [BillingField; 7] = [
        BillingField::FirstName,
        BillingField::LastName,
        BillingField::Address,
        BillingField::PostalCode,
        BillingField::Country,
        BillingField::Phone,
        BillingField::Email,
    ];

    /// Wire name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::PostalCode => "postalCode",
            Self::Country => "country",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for BillingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields that failed validation.
pub type MissingFields = SmallVec<[BillingField; 7]>;

/// Billing form validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// One or more required fields were blank.
    #[error("missing billing fields: {}", join_fields(.0))]
    MissingFields(MissingFields),
}

fn join_fields(fields: &[BillingField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Billing details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Street address
    pub address: String,
    /// Postal code
    pub postal_code: String,
    /// Country
    pub country: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
}

impl BillingDetails {
    /// Value of a single field.
    pub fn field(&self, field: BillingField) -> &str {
        match field {
            BillingField::FirstName => &self.first_name,
            BillingField::LastName => &self.last_name,
            BillingField::Address => &self.address,
            BillingField::PostalCode => &self.postal_code,
            BillingField::Country => &self.country,
            BillingField::Phone => &self.phone,
            BillingField::Email => &self.email,
        }
    }

    /// Checks that every field has a non-blank value.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::MissingFields`] listing every blank field in form order.
    pub fn validate(&self) -> Result<(), BillingError> {
        let missing: MissingFields = BillingField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BillingError::MissingFields(missing))
        }
    }

    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body posted to the order-notification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Billing details.
    pub form_data: BillingDetails,

    /// Cart contents at submission time.
    pub cart: Vec<CartLineItem>,
}

impl OrderRequest {
    /// Builds a request from billing details and a cart snapshot.
    pub fn new(form_data: BillingDetails, cart: &CartSnapshot) -> Self {
        Self {
            form_data,
            cart: cart.to_vec(),
        }
    }
}

/// Response body of the order-notification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// The last completed checkout, read by the order-success page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRecord {
    /// Billing details.
    #[serde(flatten)]
    pub billing: BillingDetails,

    /// Items that were ordered.
    pub products: Vec<CartLineItem>,
}

impl CheckoutRecord {
    /// Builds a record from a submitted order.
    pub fn from_request(request: OrderRequest) -> Self {
        Self {
            billing: request.form_data,
            products: request.cart,
        }
    }

    /// Stores the record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if the record cannot be written.
    pub fn save(&self, storage: &mut impl Storage) -> Result<(), SlotError> {
        CHECKOUT_SLOT.save(storage, self)
    }

    /// Reads the last stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if the record cannot be read or decoded.
    pub fn load(storage: &impl Storage) -> Result<Option<Self>, SlotError> {
        CHECKOUT_SLOT.load(storage)
    }
}
