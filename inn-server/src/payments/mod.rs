//! Payment Checkout Boundary
//!
//! The checkout provider is external: this module only builds the redirect
//! link embedded in invoice emails. After the provider verifies a charge it
//! calls back into `BookingManager::mark_paid`; no payment authenticity is
//! verified here.

/// Build the hosted-checkout redirect URL for a finalized invoice
pub fn checkout_link(base_url: &str, booking_key: &str, amount: f64, currency: &str) -> String {
    format!(
        "{}/pay?booking={}&amount={:.2}&currency={}",
        base_url.trim_end_matches('/'),
        booking_key,
        amount,
        currency
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_link_format() {
        let link = checkout_link("https://pay.example.com/", "abc123", 74000.0, "JPY");
        assert_eq!(
            link,
            "https://pay.example.com/pay?booking=abc123&amount=74000.00&currency=JPY"
        );
    }
}
