use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_post = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_post, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_post:?}"
    );
}

#[track_caller]
fn must_get_field<'a>(form: &ElementRef<'a>, tag: &str, name: &str) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("{tag}[name=\"{name}\"]")).unwrap();

    form.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No {tag} found with name \"{name}\""))
}

#[track_caller]
fn assert_required(field: &ElementRef<'_>, name: &str) {
    assert!(
        field.value().attr("required").is_some(),
        "want field with name {name} to have the required attribute but got none"
    );
}

/// Asserts the form has a required input called `name` of type `type_`.
#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = must_get_field(form, "input", name);
    let input_type = input.value().attr("type").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert_required(&input, name);
}

/// Asserts the form has a required input called `name` of type `type_` prefilled with `value`.
#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    assert_form_input(form, name, type_);

    let input_value = must_get_field(form, "input", name)
        .value()
        .attr("value")
        .unwrap_or_default();
    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
}

/// Asserts the form has a required select called `name` and returns the
/// values of its options, skipping the empty placeholder.
#[track_caller]
pub(crate) fn must_get_select_options<'a>(form: &ElementRef<'a>, name: &str) -> Vec<&'a str> {
    let select = must_get_field(form, "select", name);
    assert_required(&select, name);

    select
        .select(&Selector::parse("option").unwrap())
        .filter_map(|option| option.value().attr("value"))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Asserts the form has a textarea called `name`, required or not as given.
#[track_caller]
pub(crate) fn assert_form_textarea(form: &ElementRef<'_>, name: &str, required: bool) {
    let textarea = must_get_field(form, "textarea", name);

    assert_eq!(
        textarea.value().attr("required").is_some(),
        required,
        "want textarea {name} with required={required}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
}
