use super::fields::input_value;
use super::issues::contact_issue_text;
use crate::i18n::t;
use riverside_core::{ContactDetails, ContactIssue};
use std::collections::BTreeSet;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: ContactDetails,
    pub on_change: Callback<ContactDetails>,
    /// Prefix for input ids so several dialogs can coexist on one page.
    pub id_prefix: AttrValue,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl Field {
    const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Phone];

    const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::FirstName | Self::LastName => "text",
        }
    }

    const fn autocomplete(self) -> &'static str {
        match self {
            Self::FirstName => "given-name",
            Self::LastName => "family-name",
            Self::Email => "email",
            Self::Phone => "tel",
        }
    }

    const fn owns(self, issue: ContactIssue) -> bool {
        matches!(
            (self, issue),
            (Self::FirstName, ContactIssue::MissingFirstName)
                | (Self::LastName, ContactIssue::MissingLastName)
                | (Self::Email, ContactIssue::MissingEmail | ContactIssue::InvalidEmail)
                | (Self::Phone, ContactIssue::MissingPhone)
        )
    }

    fn get(self, contact: &ContactDetails) -> &str {
        match self {
            Self::FirstName => &contact.first_name,
            Self::LastName => &contact.last_name,
            Self::Email => &contact.email,
            Self::Phone => &contact.phone,
        }
    }

    fn set(self, contact: &mut ContactDetails, value: String) {
        match self {
            Self::FirstName => contact.first_name = value,
            Self::LastName => contact.last_name = value,
            Self::Email => contact.email = value,
            Self::Phone => contact.phone = value,
        }
    }
}

/// Name, email and phone inputs. A field's problem is shown once the user
/// has left it.
#[function_component(ContactFields)]
pub fn contact_fields(p: &Props) -> Html {
    let touched = use_state(BTreeSet::<Field>::new);
    let issues = p.value.issues();

    let render_field = |field: Field| {
        let id = format!("{}-{}", p.id_prefix, field.key());
        let error_id = format!("{id}-error");
        let issue = issues
            .iter()
            .copied()
            .find(|issue| field.owns(*issue))
            .filter(|_| touched.contains(&field));
        let oninput = {
            let value = p.value.clone();
            let on_change = p.on_change.clone();
            Callback::from(move |e: InputEvent| {
                let mut next = value.clone();
                field.set(&mut next, input_value(&e));
                on_change.emit(next);
            })
        };
        let onblur = {
            let touched = touched.clone();
            Callback::from(move |_: FocusEvent| {
                let mut next = (*touched).clone();
                if next.insert(field) {
                    touched.set(next);
                }
            })
        };
        html! {
            <div class="field">
                <label for={id.clone()}>{ t(&format!("contact.{}", field.key())) }</label>
                <input
                    id={id}
                    type={field.input_type()}
                    autocomplete={field.autocomplete()}
                    required=true
                    value={field.get(&p.value).to_string()}
                    aria-invalid={issue.is_some().then_some("true")}
                    aria-describedby={issue.map(|_| error_id.clone())}
                    {oninput}
                    {onblur}
                />
                { issue.map(|issue| html! {
                    <p id={error_id.clone()} class="field__error">{ contact_issue_text(issue) }</p>
                }).unwrap_or_default() }
            </div>
        }
    };

    html! {
        <fieldset class="contact-fields">
            <legend>{ t("contact.legend") }</legend>
            { for Field::ALL.into_iter().map(render_field) }
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_every_field_without_errors_on_first_paint() {
        crate::i18n::set_lang("en");
        let props = Props {
            value: ContactDetails {
                email: "not-an-email".into(),
                ..ContactDetails::default()
            },
            on_change: Callback::noop(),
            id_prefix: AttrValue::from("reserve"),
        };
        let html = block_on(LocalServerRenderer::<ContactFields>::with_props(props).render());
        for id in ["reserve-first_name", "reserve-last_name", "reserve-email", "reserve-phone"] {
            assert!(html.contains(id), "{id}");
        }
        assert!(html.contains("type=\"tel\""));
        assert!(!html.contains("field__error"));
    }

    #[test]
    fn email_field_owns_both_email_issues() {
        assert!(Field::Email.owns(ContactIssue::MissingEmail));
        assert!(Field::Email.owns(ContactIssue::InvalidEmail));
        assert!(!Field::Phone.owns(ContactIssue::InvalidEmail));
    }
}
