//! Totals, balance and the per-category breakdown of a snapshot of records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ledger::{Amount, Category};

/// A record that moves money into or out of the fund.
pub trait LedgerEntry {
    /// The amount of money moved.
    fn amount(&self) -> Amount;

    /// The category text as it was submitted.
    fn category(&self) -> &str;
}

/// Money in and out for a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub donations: Amount,
    pub distributions: Amount,
}

impl CategoryTotals {
    /// Donations minus distributions for the category.
    pub fn net(&self) -> Amount {
        self.donations - self.distributions
    }
}

/// The aggregated view of a snapshot of donations and distributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub total_donations: Amount,
    pub total_distributions: Amount,
    /// Total donations minus total distributions, may be negative.
    pub balance: Amount,
    /// Holds an entry for every [Category], in [Category::ALL] order.
    pub categories: BTreeMap<Category, CategoryTotals>,
}

impl LedgerSummary {
    /// The totals for `category`.
    pub fn category(&self, category: Category) -> CategoryTotals {
        self.categories.get(&category).copied().unwrap_or_default()
    }
}

/// Summarise `donations` and `distributions`.
///
/// Every record counts towards the grand totals. Only records whose category
/// names one of [Category::ALL] count towards a category bucket.
pub fn summarize<D, T>(donations: &[D], distributions: &[T]) -> LedgerSummary
where
    D: LedgerEntry,
    T: LedgerEntry,
{
    let mut categories: BTreeMap<Category, CategoryTotals> = Category::ALL
        .into_iter()
        .map(|category| (category, CategoryTotals::default()))
        .collect();

    for donation in donations {
        if let Some(category) = Category::from_key(donation.category()) {
            categories.entry(category).or_default().donations += donation.amount();
        }
    }

    for distribution in distributions {
        if let Some(category) = Category::from_key(distribution.category()) {
            categories.entry(category).or_default().distributions += distribution.amount();
        }
    }

    let total_donations = total(donations);
    let total_distributions = total(distributions);

    LedgerSummary {
        total_donations,
        total_distributions,
        balance: total_donations - total_distributions,
        categories,
    }
}

/// The sum of the amounts of `entries`.
pub fn total<E: LedgerEntry>(entries: &[E]) -> Amount {
    entries.iter().map(LedgerEntry::amount).sum()
}

/// Total `donations` minus total `distributions`.
pub fn balance<D, T>(donations: &[D], distributions: &[T]) -> Amount
where
    D: LedgerEntry,
    T: LedgerEntry,
{
    total(donations) - total(distributions)
}

#[cfg(test)]
pub(crate) mod test_entries {
    use crate::ledger::{Amount, LedgerEntry};

    /// A bare ledger record for exercising the aggregation functions.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Entry {
        pub amount: Amount,
        pub category: String,
    }

    impl LedgerEntry for Entry {
        fn amount(&self) -> Amount {
            self.amount
        }

        fn category(&self) -> &str {
            &self.category
        }
    }

    pub(crate) fn entry(rupees: i64, category: &str) -> Entry {
        Entry {
            amount: Amount::from_rupees(rupees),
            category: category.to_owned(),
        }
    }
}

#[cfg(test)]
mod summarize_tests {
    use crate::ledger::{
        Amount, Category, CategoryTotals, summarize,
        summary::test_entries::{Entry, entry},
    };

    #[test]
    fn empty_snapshot_has_zero_balance() {
        let summary = summarize::<Entry, Entry>(&[], &[]);

        assert_eq!(summary.total_donations, Amount::ZERO);
        assert_eq!(summary.total_distributions, Amount::ZERO);
        assert_eq!(summary.balance, Amount::ZERO);
        assert_eq!(summary.categories.len(), Category::ALL.len());
        assert!(
            summary
                .categories
                .values()
                .all(|totals| *totals == CategoryTotals::default())
        );
    }

    #[test]
    fn balance_is_donations_minus_distributions() {
        let donations = [entry(1000, "education"), entry(250, "food")];
        let distributions = [entry(400, "education")];

        let summary = summarize(&donations, &distributions);

        assert_eq!(summary.total_donations, Amount::from_rupees(1250));
        assert_eq!(summary.total_distributions, Amount::from_rupees(400));
        assert_eq!(summary.balance, Amount::from_rupees(850));
    }

    #[test]
    fn balance_can_be_negative() {
        let donations = [entry(100, "food")];
        let distributions = [entry(300, "food")];

        let summary = summarize(&donations, &distributions);

        assert_eq!(summary.balance, Amount::from_rupees(-200));
        assert_eq!(
            summary.category(Category::Food).net(),
            Amount::from_rupees(-200)
        );
    }

    #[test]
    fn unknown_categories_count_towards_totals_only() {
        let donations = [entry(500, "food"), entry(300, "unknown")];

        let summary = summarize::<Entry, Entry>(&donations, &[]);

        assert_eq!(summary.total_donations, Amount::from_rupees(800));
        assert_eq!(
            summary.category(Category::Food).donations,
            Amount::from_rupees(500)
        );
        for category in Category::ALL
            .into_iter()
            .filter(|category| *category != Category::Food)
        {
            assert_eq!(
                summary.category(category),
                CategoryTotals::default(),
                "category {category} should be empty"
            );
        }
    }

    #[test]
    fn buckets_sum_only_their_own_category() {
        let donations = [
            entry(10, "education"),
            entry(20, "healthcare"),
            entry(30, "education"),
            entry(40, "shelter"),
        ];
        let distributions = [entry(5, "education"), entry(7, "emergency")];

        let summary = summarize(&donations, &distributions);

        assert_eq!(
            summary.category(Category::Education),
            CategoryTotals {
                donations: Amount::from_rupees(40),
                distributions: Amount::from_rupees(5),
            }
        );
        assert_eq!(
            summary.category(Category::Healthcare).donations,
            Amount::from_rupees(20)
        );
        assert_eq!(
            summary.category(Category::Shelter).donations,
            Amount::from_rupees(40)
        );
        assert_eq!(
            summary.category(Category::Emergency),
            CategoryTotals {
                donations: Amount::ZERO,
                distributions: Amount::from_rupees(7),
            }
        );
        assert_eq!(summary.category(Category::Food), CategoryTotals::default());
    }

    #[test]
    fn order_of_records_does_not_matter() {
        let donations = vec![
            Entry {
                amount: Amount::from_paise(10),
                category: "food".to_owned(),
            },
            Entry {
                amount: Amount::from_paise(20),
                category: "education".to_owned(),
            },
            Entry {
                amount: Amount::from_paise(333_333),
                category: "other".to_owned(),
            },
        ];
        let distributions = vec![entry(1, "food"), entry(2, "shelter")];
        let mut reversed_donations = donations.clone();
        reversed_donations.reverse();
        let mut reversed_distributions = distributions.clone();
        reversed_distributions.reverse();

        let summary = summarize(&donations, &distributions);
        let reversed_summary = summarize(&reversed_donations, &reversed_distributions);

        assert_eq!(summary, reversed_summary);
        assert_eq!(summary.balance, Amount::from_paise(333_363 - 300));
    }

    #[test]
    fn summarize_is_idempotent_and_leaves_input_untouched() {
        let donations = vec![entry(1000, "education"), entry(5, "mystery")];
        let distributions = vec![entry(100, "education")];
        let donations_before = donations.clone();
        let distributions_before = distributions.clone();

        let first = summarize(&donations, &distributions);
        let second = summarize(&donations, &distributions);

        assert_eq!(first, second);
        assert_eq!(donations, donations_before);
        assert_eq!(distributions, distributions_before);
    }

    #[test]
    fn totals_of_many_largest_records_are_exact() {
        let largest = Entry {
            amount: "9999999999999.99".parse().unwrap(),
            category: "food".to_owned(),
        };
        let donations = vec![largest.clone(); 9300];
        let distributions = vec![largest; 300];

        let summary = summarize(&donations, &distributions);

        let largest_paise = 999_999_999_999_999_i128;
        assert_eq!(summary.total_donations.paise(), largest_paise * 9300);
        assert_eq!(summary.total_distributions.paise(), largest_paise * 300);
        assert_eq!(summary.balance.paise(), largest_paise * 9000);
        assert_eq!(
            summary.category(Category::Food).net(),
            summary.balance
        );
    }
}
