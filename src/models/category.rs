//! Expense categories

use super::choice::define_choice;

define_choice! {
    /// What an expense was spent on
    Category, "category", placeholder = "Select a category",
    {
        Food => "Food",
        Transport => "Transport",
        Entertainment => "Entertainment",
        Shopping => "Shopping",
        Utilities => "Utilities",
        Healthcare => "Healthcare",
        Education => "Education",
        Others => "Others",
    }
}
