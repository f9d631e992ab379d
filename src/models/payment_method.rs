//! Payment methods

use super::choice::define_choice;

define_choice! {
    /// How an expense was paid
    PaymentMethod, "payment method", placeholder = "Select a payment method",
    {
        Cash => "Cash",
        CreditCard => "Credit Card",
        DebitCard => "Debit Card",
        Upi => "UPI",
        NetBanking => "Net Banking",
    }
}
