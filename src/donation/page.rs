//! Defines the route handler for the donation form.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    donation::PaymentMethod,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        loading_spinner, rupee_input_styles,
    },
    ledger::Category,
    navigation::NavBar,
};

fn donate_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::DONATE).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=(endpoints::DONATE)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Make a Donation" }

                div
                {
                    label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                    input
                        name="name"
                        id="name"
                        type="text"
                        placeholder="Your name"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="email" class=(FORM_LABEL_STYLE) { "Email" }

                    input
                        name="email"
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    div class="input-wrapper w-full"
                    {
                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            placeholder="0.00"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select
                        name="category"
                        id="category"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" { "Select a category" }

                        @for category in Category::ALL {
                            option value=(category.as_str()) { (category.label()) }
                        }
                    }
                }

                fieldset class="space-y-2"
                {
                    legend class=(FORM_LABEL_STYLE) { "Payment method" }

                    div class=(FORM_RADIO_GROUP_STYLE)
                    {
                        @for method in PaymentMethod::ALL {
                            @let id = format!("payment-method-{}", method.as_str());

                            div class="flex items-center gap-3"
                            {
                                input
                                    name="payment_method"
                                    id=(id)
                                    type="radio"
                                    value=(method.as_str())
                                    checked[method == PaymentMethod::default()]
                                    required
                                    class=(FORM_RADIO_INPUT_STYLE);

                                label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (method.label()) }
                            }
                        }
                    }
                }

                div
                {
                    label for="message" class=(FORM_LABEL_STYLE) { "Message (optional)" }

                    textarea
                        name="message"
                        id="message"
                        rows="3"
                        placeholder="Leave a message with your donation"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {}
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " Donate"
                }
            }
        }
    };

    base("Donate", &[rupee_input_styles()], &content)
}

/// Renders the donation form.
pub async fn get_donate_page() -> Response {
    donate_view().into_response()
}

#[cfg(test)]
mod donate_page_tests {
    use axum::http::StatusCode;
    use scraper::Selector;

    use crate::{
        donation::get_donate_page,
        endpoints,
        test_utils::{
            assert_content_type, assert_form_input, assert_form_submit_button,
            assert_form_textarea, assert_hx_endpoint, assert_valid_html, must_get_form,
            must_get_select_options, parse_html_document,
        },
    };

    #[tokio::test]
    async fn render_page() {
        let response = get_donate_page().await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::DONATE, "hx-post");
        assert_hx_endpoint(&form, "#alert-container", "hx-target-error");
        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "email", "email");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "payment_method", "radio");
        assert_form_textarea(&form, "message", false);
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn offers_every_category_and_defaults_to_upi() {
        let html = parse_html_document(get_donate_page().await).await;

        let form = must_get_form(&html);
        let categories = must_get_select_options(&form, "category");
        assert_eq!(
            categories,
            vec!["education", "healthcare", "food", "shelter", "emergency"]
        );

        let checked = html
            .select(&Selector::parse("input[name=payment_method][checked]").unwrap())
            .filter_map(|input| input.value().attr("value"))
            .collect::<Vec<_>>();
        assert_eq!(checked, vec!["upi"]);
    }
}
