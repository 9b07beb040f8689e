//! Guest Email Templates

use shared::InvoiceSnapshot;

/// Payment request email sent after invoice finalization.
///
/// Returns (subject, html_body).
pub fn invoice_email(guest_name: &str, invoice: &InvoiceSnapshot, pay_link: &str) -> (String, String) {
    let subject = format!(
        "Your stay invoice: {:.2} {}",
        invoice.amount, invoice.currency
    );
    let body = format!(
        r#"<html>
<body>
  <p>Dear {guest_name},</p>
  <p>Thank you for staying with us. Your invoice has been finalized:</p>
  <p><strong>{amount:.2} {currency}</strong></p>
  <p style="color:#666">{breakdown}</p>
  <p><a href="{pay_link}">Pay online</a></p>
  <p>We look forward to welcoming you.</p>
</body>
</html>"#,
        guest_name = guest_name,
        amount = invoice.amount,
        currency = invoice.currency,
        breakdown = invoice.breakdown,
        pay_link = pay_link,
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RateStrategy;

    #[test]
    fn test_invoice_email_contains_amount_and_link() {
        let invoice = InvoiceSnapshot {
            amount: 74000.0,
            currency: "JPY".to_string(),
            breakdown: "Calc: 1w @ 50000.00 + 3n @ 8000.00".to_string(),
            strategy: RateStrategy::WeeklyPriority,
            recipient: "guest@example.com".to_string(),
            finalized_at: 0,
        };
        let (subject, body) = invoice_email("Alice", &invoice, "https://pay.example/abc");
        assert!(subject.contains("74000.00 JPY"));
        assert!(body.contains("Alice"));
        assert!(body.contains("Calc: 1w @ 50000.00"));
        assert!(body.contains("https://pay.example/abc"));
    }
}
