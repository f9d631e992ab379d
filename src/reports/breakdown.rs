//! Breakdown Report
//!
//! Splits one month's spending by category and by payment method.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::models::{Category, ExpenseRecord, Money, Month, PaymentMethod};

/// Spending for one key within a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownEntry<K> {
    pub key: K,
    pub total: Money,
    pub count: usize,
}

/// Per-key totals for one month, largest first
///
/// Keys with nothing spent are absent rather than present with zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown<K> {
    pub month: Month,
    entries: Vec<BreakdownEntry<K>>,
}

impl<K: Copy + Ord> Breakdown<K> {
    fn from_records<F>(records: &[ExpenseRecord], month: Month, key_of: F) -> Self
    where
        F: Fn(&ExpenseRecord) -> K,
    {
        let mut sums: BTreeMap<K, (Money, usize)> = BTreeMap::new();
        for record in records.iter().filter(|r| month.contains(r.date)) {
            let entry = sums.entry(key_of(record)).or_insert((Money::zero(), 0));
            entry.0 += record.amount;
            entry.1 += 1;
        }

        let mut entries: Vec<BreakdownEntry<K>> = sums
            .into_iter()
            .filter(|(_, (total, _))| !total.is_zero())
            .map(|(key, (total, count))| BreakdownEntry { key, total, count })
            .collect();
        // Stable sort keeps key order for equal totals
        entries.sort_by(|a, b| b.total.cmp(&a.total));

        Self { month, entries }
    }

    pub fn entries(&self) -> &[BreakdownEntry<K>] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total for `key`, or `None` if nothing was spent on it
    pub fn get(&self, key: K) -> Option<Money> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.total)
    }

    /// Sum over all keys
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.total).sum()
    }

    /// Percentage of the month's spending that went to `key`
    pub fn share(&self, key: K) -> f64 {
        self.get(key)
            .map(|amount| amount.percentage_of(self.total()))
            .unwrap_or(0.0)
    }

    /// Entries as a key-to-total map
    pub fn to_map(&self) -> BTreeMap<K, Money> {
        self.entries.iter().map(|e| (e.key, e.total)).collect()
    }
}

/// Spending per category for records in `month`
pub fn category_breakdown(records: &[ExpenseRecord], month: Month) -> Breakdown<Category> {
    Breakdown::from_records(records, month, |r| r.category)
}

/// Spending per payment method for records in `month`
pub fn payment_method_breakdown(
    records: &[ExpenseRecord],
    month: Month,
) -> Breakdown<PaymentMethod> {
    Breakdown::from_records(records, month, |r| r.payment_method)
}

/// Category and payment-method analysis of one month
#[derive(Debug, Clone)]
pub struct BreakdownReport {
    pub month: Month,
    pub total: Money,
    pub categories: Breakdown<Category>,
    pub payment_methods: Breakdown<PaymentMethod>,
}

impl BreakdownReport {
    /// Generate the report for a month
    pub fn generate(records: &[ExpenseRecord], month: Month) -> Self {
        let categories = category_breakdown(records, month);
        let payment_methods = payment_method_breakdown(records, month);
        Self {
            month,
            total: categories.total(),
            categories,
            payment_methods,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return format!("No data available for {}.\n", self.month);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "Total Expenses for {}: {}\n",
            self.month,
            self.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&"=".repeat(50));
        output.push('\n');

        write_section(&mut output, "Category-wise", &self.categories, currency_symbol);
        output.push('\n');
        write_section(
            &mut output,
            "Payment Method-wise",
            &self.payment_methods,
            currency_symbol,
        );

        output
    }
}

fn write_section<K: Copy + Ord + Display>(
    output: &mut String,
    title: &str,
    breakdown: &Breakdown<K>,
    currency_symbol: &str,
) {
    output.push_str(&format!("{}\n", title));
    output.push_str(&format!(
        "  {:<18} {:>14} {:>6} {:>7}\n",
        "Name", "Amount", "Count", "%"
    ));
    output.push_str(&format!("  {}\n", "-".repeat(48)));
    for entry in breakdown.entries() {
        output.push_str(&format!(
            "  {:<18} {:>14} {:>6} {:>6.1}%\n",
            entry.key.to_string(),
            entry.total.format_with_symbol(currency_symbol),
            entry.count,
            breakdown.share(entry.key)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use crate::reports::monthly::monthly_totals;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, category: Category, cents: i64, method: PaymentMethod) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(format!("{}-{:?}", date, category)),
            date,
            category,
            amount: Money::from_cents(cents),
            payment_method: method,
            description: String::new(),
        }
    }

    fn scenario() -> Vec<ExpenseRecord> {
        vec![
            record(date(2024, 1, 5), Category::Food, 10000, PaymentMethod::Cash),
            record(date(2024, 1, 20), Category::Transport, 5000, PaymentMethod::Upi),
            record(date(2024, 2, 1), Category::Food, 3000, PaymentMethod::Cash),
        ]
    }

    fn january() -> Month {
        "January 2024".parse().unwrap()
    }

    #[test]
    fn test_scenario_category_breakdown() {
        let breakdown = category_breakdown(&scenario(), january());
        let expected: BTreeMap<Category, Money> = [
            (Category::Food, Money::from_cents(10000)),
            (Category::Transport, Money::from_cents(5000)),
        ]
        .into_iter()
        .collect();

        assert_eq!(breakdown.to_map(), expected);
        assert_eq!(breakdown.get(Category::Shopping), None);
    }

    #[test]
    fn test_payment_method_breakdown() {
        let breakdown = payment_method_breakdown(&scenario(), january());
        assert_eq!(breakdown.get(PaymentMethod::Cash), Some(Money::from_cents(10000)));
        assert_eq!(breakdown.get(PaymentMethod::Upi), Some(Money::from_cents(5000)));
        assert_eq!(breakdown.len(), 2);
    }

    #[test]
    fn test_breakdowns_match_monthly_total() {
        let records = vec![
            record(date(2024, 3, 1), Category::Food, 1250, PaymentMethod::Cash),
            record(date(2024, 3, 2), Category::Food, 750, PaymentMethod::DebitCard),
            record(date(2024, 3, 9), Category::Healthcare, 4000, PaymentMethod::CreditCard),
            record(date(2024, 3, 31), Category::Utilities, 999, PaymentMethod::NetBanking),
            record(date(2024, 4, 1), Category::Utilities, 5000, PaymentMethod::Cash),
        ];
        let march = Month::new(2024, 3).unwrap();
        let monthly = monthly_totals(&records);
        let march_total = monthly.iter().find(|m| m.month == march).unwrap().total;

        assert_eq!(category_breakdown(&records, march).total(), march_total);
        assert_eq!(payment_method_breakdown(&records, march).total(), march_total);
    }

    #[test]
    fn test_entries_largest_first() {
        let records = vec![
            record(date(2024, 1, 1), Category::Food, 100, PaymentMethod::Cash),
            record(date(2024, 1, 2), Category::Shopping, 900, PaymentMethod::Cash),
            record(date(2024, 1, 3), Category::Education, 500, PaymentMethod::Cash),
            record(date(2024, 1, 4), Category::Transport, 500, PaymentMethod::Cash),
        ];
        let keys: Vec<Category> = category_breakdown(&records, january())
            .entries()
            .iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(
            keys,
            vec![Category::Shopping, Category::Transport, Category::Education, Category::Food]
        );
    }

    #[test]
    fn test_month_without_records_is_empty() {
        let breakdown = category_breakdown(&scenario(), Month::new(2023, 6).unwrap());
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total(), Money::zero());
        assert!(category_breakdown(&[], january()).is_empty());
    }

    #[test]
    fn test_share() {
        let breakdown = category_breakdown(&scenario(), january());
        let food = breakdown.share(Category::Food);
        assert!((food - 66.666).abs() < 0.01);
        assert_eq!(breakdown.share(Category::Others), 0.0);
    }

    #[test]
    fn test_report_format() {
        let report = BreakdownReport::generate(&scenario(), january());
        assert_eq!(report.total, Money::from_cents(15000));

        let output = report.format_terminal("₹");
        assert!(output.starts_with("Total Expenses for January 2024: ₹150.00"));
        assert!(output.contains("Category-wise"));
        assert!(output.contains("Payment Method-wise"));
        assert!(output.contains("UPI"));

        let empty = BreakdownReport::generate(&scenario(), Month::new(2020, 1).unwrap());
        assert_eq!(empty.format_terminal("₹"), "No data available for January 2020.\n");
    }
}
