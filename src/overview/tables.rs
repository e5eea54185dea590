//! Tables listing the donation and distribution records.

use maud::{Markup, html};
use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{
    distribution::Distribution,
    donation::Donation,
    html::{
        BADGE_COMPLETED_STYLE, BADGE_PENDING_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, format_currency,
    },
    ledger::{Category, PaymentStatus},
};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Format `timestamp` in the local timezone for display.
fn format_timestamp(timestamp: OffsetDateTime, local_offset: UtcOffset) -> String {
    let local = timestamp.to_offset(local_offset);

    local.format(TIMESTAMP_FORMAT).unwrap_or_else(|error| {
        tracing::warn!("could not format timestamp {local}: {error}");
        local.date().to_string()
    })
}

/// The label for a known category, or the stored text for any other category.
fn category_label(category: &str) -> &str {
    Category::from_key(category).map_or(category, |category| category.label())
}

fn status_badge(status: PaymentStatus) -> Markup {
    let style = match status {
        PaymentStatus::Pending => BADGE_PENDING_STYLE,
        PaymentStatus::Completed => BADGE_COMPLETED_STYLE,
    };

    html! { span class=(style) { (status) } }
}

fn empty_row(columns: usize, text: &str) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td colspan=(columns) class={ (TABLE_CELL_STYLE) " text-center" } { (text) }
        }
    }
}

pub(super) fn donations_table(donations: &[Donation], local_offset: UtcOffset) -> Markup {
    html! {
        section class="w-full mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Recent Donations" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table id="donations" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Donor" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Payment Method" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                        }
                    }

                    tbody
                    {
                        @if donations.is_empty() {
                            (empty_row(6, "No donations yet."))
                        }

                        @for donation in donations {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class={ (TABLE_CELL_STYLE) " whitespace-nowrap" }
                                {
                                    (format_timestamp(donation.created_at, local_offset))
                                }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    div class="font-medium text-gray-900 dark:text-white" { (donation.donor_name) }

                                    @if let Some(message) = &donation.message {
                                        div class="text-xs italic" { (message) }
                                    }
                                }
                                td class=(TABLE_CELL_STYLE) { (category_label(&donation.category)) }
                                td class=(TABLE_CELL_STYLE) { (donation.payment_method) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(donation.amount)) }
                                td class=(TABLE_CELL_STYLE) { (status_badge(donation.payment_status)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn distributions_table(
    distributions: &[Distribution],
    local_offset: UtcOffset,
) -> Markup {
    html! {
        section class="w-full mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Recent Distributions" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table id="distributions" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Beneficiary" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Purpose" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Payment Mode" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                        }
                    }

                    tbody
                    {
                        @if distributions.is_empty() {
                            (empty_row(7, "No distributions yet."))
                        }

                        @for distribution in distributions {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class={ (TABLE_CELL_STYLE) " whitespace-nowrap" }
                                {
                                    (format_timestamp(distribution.created_at, local_offset))
                                }
                                td class={ (TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white" }
                                {
                                    (distribution.beneficiary_name)
                                }
                                td class=(TABLE_CELL_STYLE) { (category_label(&distribution.category)) }
                                td class=(TABLE_CELL_STYLE) { (distribution.purpose) }
                                td class=(TABLE_CELL_STYLE) { (distribution.payment_mode) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(distribution.amount)) }
                                td class=(TABLE_CELL_STYLE) { (status_badge(distribution.status)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
