//! Notification emails
//!
//! Plain-text bodies for order confirmations, owner notifications and contact-form messages.

use rusty_money::iso::Currency;
use serde::{Deserialize, Serialize};

use crate::{checkout::BillingDetails, items::CartLineItem, pricing};

/// Subject of the confirmation sent to the customer.
pub const CUSTOMER_SUBJECT: &str = "Order Confirmation - Your Purchase Details";

/// Subject of the notification sent to the store owner.
pub const OWNER_SUBJECT: &str = "New Order Received";

/// Subject used when a contact form is submitted without one.
pub const DEFAULT_CONTACT_SUBJECT: &str = "New Contact Form Submission";

/// Store branding used in customer-facing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreIdentity {
    /// Store name used in the sign-off.
    pub name: String,

    /// Address customers are invited to reply to.
    pub support_email: String,
}

/// Subject and plain-text body of an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    /// Subject line.
    pub subject: String,

    /// Plain-text body.
    pub text: String,
}

/// A contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    /// Visitor's name.
    pub name: String,

    /// Visitor's email address.
    pub email: String,

    /// Optional subject line.
    pub subject: String,

    /// Message body.
    pub message: String,
}

/// One line per item: `Title (xN) - $line_total`.
pub fn order_summary(items: &[CartLineItem], currency: &Currency) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{} (x{}) - {}",
                item.title,
                item.quantity,
                pricing::format_price(item.line_total(), currency)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Confirmation sent to the customer after an order.
pub fn customer_confirmation(
    store: &StoreIdentity,
    billing: &BillingDetails,
    items: &[CartLineItem],
    currency: &Currency,
) -> EmailContent {
    let summary = indent(&order_summary(items, currency), "   ");
    let total = pricing::format_price(pricing::total(items), currency);

    let text = format!(
        "Hello {first_name},\n\
         \n\
         Thank you for your order! We're excited to have you as a customer and can't wait for you to receive your items.\n\
         \n\
         Here's a summary of your order:\n\
         \n\
         {summary}\n\
         \n\
         Total: {total}\n\
         \n\
         We will deliver your order soon.\n\
         \n\
         If you have any questions or need help, feel free to reach out to our support team at {support}.\n\
         Thank you again for choosing {store}. We hope you love your purchase!\n\
         \n\
         Regards,\n\
         {store} Team\n",
        first_name = billing.first_name,
        support = store.support_email,
        store = store.name,
    );

    EmailContent {
        subject: CUSTOMER_SUBJECT.to_string(),
        text,
    }
}

/// Notification sent to the store owner after an order.
pub fn owner_notification(
    billing: &BillingDetails,
    items: &[CartLineItem],
    currency: &Currency,
) -> EmailContent {
    let summary = order_summary(items, currency);
    let total = pricing::format_price(pricing::total(items), currency);

    let text = format!(
        "New Order Received!\n\
         \n\
         Customer Details:\n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Address: {address}, {postal_code}, {country}\n\
         \n\
         Order Summary:\n\
         {summary}\n\
         \n\
         Total: {total}\n\
         \n\
         Please process the order.\n",
        name = billing.full_name(),
        email = billing.email,
        phone = billing.phone,
        address = billing.address,
        postal_code = billing.postal_code,
        country = billing.country,
    );

    EmailContent {
        subject: OWNER_SUBJECT.to_string(),
        text,
    }
}

/// Message forwarded to the store owner from the contact form.
pub fn contact_message(request: &ContactRequest) -> EmailContent {
    let subject = if request.subject.trim().is_empty() {
        DEFAULT_CONTACT_SUBJECT.to_string()
    } else {
        request.subject.clone()
    };

    EmailContent {
        subject,
        text: format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            request.name, request.email, request.message
        ),
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rusty_money::iso::USD;

    use crate::pricing::UnitPrice;

    use super::*;

    fn items() -> Vec<CartLineItem> {
        vec![
            CartLineItem::new(
                "sku-1",
                "Clay Mug",
                UnitPrice::from_cents(1999),
                "/mug.png",
                NonZeroU32::new(2).unwrap_or(NonZeroU32::MIN),
            ),
            CartLineItem::new("sku-2", "Coaster", UnitPrice::from_units(5), "/coaster.png", NonZeroU32::MIN),
        ]
    }

    fn billing() -> BillingDetails {
        BillingDetails {
            first_name: "Sam".to_string(),
            last_name: "Rivera".to_string(),
            address: "4 Kiln Lane".to_string(),
            postal_code: "54000".to_string(),
            country: "Pakistan".to_string(),
            phone: "0300 0000000".to_string(),
            email: "sam@example.com".to_string(),
        }
    }

    fn store() -> StoreIdentity {
        StoreIdentity {
            name: "Crafted Fusion".to_string(),
            support_email: "support@example.com".to_string(),
        }
    }

    #[test]
    fn summary_lists_line_totals() {
        assert_eq!(
            order_summary(&items(), USD),
            "Clay Mug (x2) - $39.98\nCoaster (x1) - $5.00"
        );
    }

    #[test]
    fn customer_confirmation_includes_summary_and_total() {
        let email = customer_confirmation(&store(), &billing(), &items(), USD);

        assert_eq!(email.subject, CUSTOMER_SUBJECT);
        assert!(email.text.starts_with("Hello Sam,\n"));
        assert!(email.text.contains("   Clay Mug (x2) - $39.98\n   Coaster (x1) - $5.00"));
        assert!(email.text.contains("Total: $44.98"));
        assert!(email.text.contains("support@example.com"));
        assert!(email.text.contains("Crafted Fusion Team"));
    }

    #[test]
    fn owner_notification_includes_customer_details() {
        let email = owner_notification(&billing(), &items(), USD);

        assert_eq!(email.subject, OWNER_SUBJECT);
        assert!(email.text.contains("Name: Sam Rivera\n"));
        assert!(email.text.contains("Email: sam@example.com\n"));
        assert!(email.text.contains("Address: 4 Kiln Lane, 54000, Pakistan\n"));
        assert!(email.text.contains("Total: $44.98"));
        assert!(email.text.ends_with("Please process the order.\n"));
    }

    #[test]
    fn contact_message_uses_submitted_subject() {
        let email = contact_message(&ContactRequest {
            name: "Lee".to_string(),
            email: "lee@example.com".to_string(),
            subject: "Custom order".to_string(),
            message: "Do you ship to Oslo?".to_string(),
        });

        assert_eq!(email.subject, "Custom order");
        assert_eq!(
            email.text,
            "Name: Lee\nEmail: lee@example.com\n\nMessage:\nDo you ship to Oslo?"
        );
    }

    #[test]
    fn contact_message_defaults_blank_subject() {
        let email = contact_message(&ContactRequest {
            subject: "  ".to_string(),
            ..ContactRequest::default()
        });

        assert_eq!(email.subject, DEFAULT_CONTACT_SUBJECT);
    }
}
