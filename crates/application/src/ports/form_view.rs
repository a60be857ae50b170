//! Form view port
//!
//! The windowing shell exposes the three capabilities the form controller
//! needs: inline field messages, a blocking alert, and closing the window.
//! The controller never touches widgets directly.

#[cfg(test)]
use mockall::automock;

use crate::form::FieldErrors;

/// Port for the modal form window
#[cfg_attr(test, automock)]
pub trait FormView {
    /// Show validation messages next to their matching inputs
    fn display_field_errors(&mut self, errors: &FieldErrors);

    /// Show a blocking error alert; the form stays open behind it
    fn show_alert(&mut self, title: &str, message: &str);

    /// Close the form window
    fn close(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;

    fn _assert_object_safe(_: &dyn FormView) {}

    #[test]
    fn mock_view_records_displayed_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Name, "Field can't be empty");

        let mut mock = MockFormView::new();
        mock.expect_display_field_errors()
            .times(1)
            .withf(|errors| errors.contains(FormField::Name))
            .return_const(());

        mock.display_field_errors(&errors);
    }
}
