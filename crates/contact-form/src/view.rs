// File: contact-form/src/view.rs
// Purpose: Rendered form surface and read-only confirmation view

use maud::{html, Markup};

use crate::field::Field;
use crate::form::ContactForm;
use crate::snapshot::SubmissionSnapshot;

/// Render the editable form surface.
///
/// Header, one labelled input per field with the current value echoed back,
/// an inline error paragraph directly under each failing field, and the
/// submit control. Typing is never blocked and the submit button is never
/// disabled; errors only ever show as inline text.
pub fn render_form(form: &ContactForm) -> Markup {
    html! {
        div.contact-form {
            h1 { "Contact Form" }
            form method="post" {
                @for field in Field::ALL {
                    div.form-field {
                        label for=(field.name()) { (field.label()) }
                        @if field == Field::Message {
                            textarea id=(field.name()) name=(field.name()) {
                                (form.value(field))
                            }
                        } @else {
                            input type=(input_type(field))
                                id=(field.name())
                                name=(field.name())
                                value=(form.value(field));
                        }
                        @if let Some(error) = form.errors().get(&field) {
                            p.field-error { (error) }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
        }
    }
}

/// Render the read-only confirmation view of an accepted submission.
///
/// Pure function of the snapshot: one read-only input per field so every
/// submitted value stays queryable verbatim. An empty message renders as an
/// empty input, not an omitted one.
pub fn render_display(snapshot: &SubmissionSnapshot) -> Markup {
    let rows: [(&str, &str, &str); 4] = [
        ("firstName", "First Name", &snapshot.first_name),
        ("lastName", "Last Name", &snapshot.last_name),
        ("email", "Email", &snapshot.email),
        ("message", "Message", &snapshot.message),
    ];

    html! {
        div.contact-display {
            h2 { "Submission" }
            @for (name, label, value) in rows {
                div.display-field {
                    label for=(name) { (label) }
                    input type="text" id=(name) name=(name) value=(value) readonly;
                }
            }
        }
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_renders_header_and_labels() {
        let html = render_form(&ContactForm::new()).into_string();
        assert!(html.contains("Contact Form"));
        assert!(html.contains("First Name*"));
        assert!(html.contains("Last Name*"));
        assert!(html.contains("Email*"));
        assert!(html.contains("Message"));
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn test_form_echoes_typed_values() {
        let mut form = ContactForm::new();
        form.set_field(Field::FirstName, "cool first name");
        let html = render_form(&form).into_string();
        assert!(html.contains(r#"value="cool first name""#));
    }

    #[test]
    fn test_display_shows_empty_message_input() {
        let snapshot = SubmissionSnapshot {
            first_name: "cool first name".to_string(),
            last_name: "cool last name".to_string(),
            email: "verycool@email.com".to_string(),
            message: String::new(),
        };
        let html = render_display(&snapshot).into_string();
        assert!(html.contains(r#"name="message""#));
        assert!(html.contains(r#"value="""#));
    }
}
