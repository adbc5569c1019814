//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::CatalogProduct,
    checkout::{
        BillingDetails, BillingError, BillingField, CheckoutRecord, OrderRequest, OrderResponse,
    },
    items::{CartLineItem, LineItemPatch, VariantKey},
    manager::{CartManager, Hydration},
    notifications::{ContactRequest, EmailContent, StoreIdentity},
    pricing::{PriceError, UnitPrice},
    snapshot::CartSnapshot,
    storage::{
        CartStore, CartStoreError, FileStorage, MemoryStorage, Slot, SlotError, Storage,
        StorageCartStore, StorageError,
    },
};
