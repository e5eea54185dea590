//! Cards for the fund's totals and the per-category breakdown.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
    ledger::{Amount, Category, LedgerSummary},
};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";
const AMOUNT_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const AMOUNT_RED_STYLE: &str = "text-red-600 dark:text-red-400";

fn amount_color_class(amount: Amount) -> &'static str {
    if amount.is_negative() {
        AMOUNT_RED_STYLE
    } else {
        AMOUNT_GREEN_STYLE
    }
}

fn total_card(id: &str, title: &str, amount: Amount, color_class: &str) -> Markup {
    html! {
        div id=(id) class=(CARD_STYLE)
        {
            h4 class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-2" { (title) }
            div class={ "text-3xl font-bold " (color_class) } { (format_currency(amount)) }
        }
    }
}

/// Renders the cards for total donations, total distributions and the balance.
pub(super) fn totals_cards_view(summary: &LedgerSummary) -> Markup {
    html! {
        section class="w-full grid grid-cols-1 md:grid-cols-3 gap-4 mb-8"
        {
            (total_card("total-donations", "Total Donations", summary.total_donations, AMOUNT_GREEN_STYLE))
            (total_card("total-distributions", "Total Distributions", summary.total_distributions, AMOUNT_RED_STYLE))
            (total_card("balance", "Balance", summary.balance, amount_color_class(summary.balance)))
        }
    }
}

/// Renders a table with donations, distributions and the net amount for every category.
pub(super) fn category_breakdown_view(summary: &LedgerSummary) -> Markup {
    html! {
        section class="w-full mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "By Category" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table id="category-breakdown" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Donations" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Distributions" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Net" }
                        }
                    }

                    tbody
                    {
                        @for category in Category::ALL {
                            @let totals = summary.category(category);

                            tr class=(TABLE_ROW_STYLE) data-category=(category.as_str())
                            {
                                th scope="row" class={ (TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white" }
                                {
                                    (category.label())
                                }
                                td class=(TABLE_CELL_STYLE) { (format_currency(totals.donations)) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(totals.distributions)) }
                                td class={ (TABLE_CELL_STYLE) " " (amount_color_class(totals.net())) }
                                {
                                    (format_currency(totals.net()))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
