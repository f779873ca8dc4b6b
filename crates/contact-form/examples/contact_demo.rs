// Example: Contact form walkthrough
// Drives the form the way a browser session would: live edits, a rejected
// submit, corrections, and finally the confirmation view.

use anyhow::Result;
use contact_form::{render_display, render_form, ContactForm, SubmitOutcome};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut form = ContactForm::new();
    println!("=== Initial form ===\n{}\n", render_form(&form).into_string());

    // First attempt: everything empty.
    if form.submit() == SubmitOutcome::Rejected {
        println!("=== Rejected submit ===");
        for (field, error) in form.errors() {
            println!("{field}: {error}");
        }
        println!();
    }

    // Fill the form in; the message stays empty on purpose.
    form.set_field_by_name("firstName", "cool first name")?;
    form.set_field_by_name("lastName", "cool last name")?;
    form.set_field_by_name("email", "verycool@email.com")?;

    match form.submit() {
        SubmitOutcome::Submitted(snapshot) => {
            println!("=== Confirmation ===\n{}", render_display(&snapshot).into_string());
        }
        SubmitOutcome::Rejected => {
            println!("still rejected: {:?}", form.errors());
        }
    }

    Ok(())
}
