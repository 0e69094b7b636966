pub mod ordering;
pub mod validation;

pub use ordering::{compare_names, sort_by_name};
pub use validation::{validate_contact_form, FieldErrors};
