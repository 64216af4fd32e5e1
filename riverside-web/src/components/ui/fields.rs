//! Small form helpers shared by the booking dialogs.
use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Current value of the `<input>` that fired `e`.
#[must_use]
pub fn input_value(e: &InputEvent) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

#[must_use]
pub fn textarea_value(e: &InputEvent) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

#[must_use]
pub fn select_value(e: &Event) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

/// `<input type="date">` value, `None` while cleared or half-typed.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[must_use]
pub fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Non-negative count from a number input; anything unparsable counts as 0.
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[derive(Properties, PartialEq, Clone)]
pub struct IssueListProps {
    pub messages: Vec<String>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Inline validation messages under a form.
#[function_component(IssueList)]
pub fn issue_list(p: &IssueListProps) -> Html {
    if p.messages.is_empty() {
        return Html::default();
    }
    html! {
        <ul id={p.id.clone()} class="form-issues" role="alert">
            { for p.messages.iter().map(|m| html! { <li>{ m.clone() }</li> }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_parse_from_input_format() {
        let date = parse_date("2025-11-02").unwrap();
        assert_eq!(date_value(Some(date)), "2025-11-02");
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(date_value(None), "");
    }

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count(" 4 "), 4);
        assert_eq!(parse_count("-1"), 0);
        assert_eq!(parse_count("lots"), 0);
    }
}
