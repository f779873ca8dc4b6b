// Contact Form - live-validated form component with a confirmation view
// Field edits revalidate synchronously; submit gates on the full rule table.

pub mod field;
pub mod form;
pub mod snapshot;
pub mod validation;
pub mod view;

// Re-export core types
pub use field::{Field, UnknownField};
pub use form::{ContactForm, ErrorSet, SubmitOutcome};
pub use snapshot::SubmissionSnapshot;
pub use view::{render_display, render_form};

// Re-export Maud so callers can compose the rendered markup
pub use maud::{Markup, PreEscaped};
