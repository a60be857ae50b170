//! Department form controller
//!
//! Drives one modal form instance from prefill to save or cancel. The
//! controller validates through the mapper, writes through the store
//! port, and feeds every outcome back through the view port. It holds no
//! widget state; the shell hands it a [`FormSnapshot`] per submission.

use std::fmt;
use std::sync::Arc;

use domain::Department;
use tracing::{debug, info, instrument, warn};

use crate::form::{FormSnapshot, build_department};
use crate::notifier::{ChangeNotifier, DataChangeListener};
use crate::ports::{DepartmentStore, FormView};

/// Title of the alert shown when a save fails
const SAVE_ALERT_TITLE: &str = "Error saving object";

/// Controller for one department form window
///
/// Construct it around the shell's view handle, then wire the department
/// being edited and the store before the first submit. Both are required
/// by then; submitting without them is a wiring bug and panics.
pub struct DepartmentForm {
    department: Option<Department>,
    store: Option<Arc<dyn DepartmentStore>>,
    view: Box<dyn FormView>,
    notifier: ChangeNotifier,
}

impl DepartmentForm {
    /// Create a controller around the shell's view handle
    pub fn new(view: impl FormView + 'static) -> Self {
        Self {
            department: None,
            store: None,
            view: Box::new(view),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Wire the department being edited; a fresh one for create mode
    pub fn set_department(&mut self, department: Department) {
        self.department = Some(department);
    }

    /// Wire the persistence store
    pub fn set_store(&mut self, store: Arc<dyn DepartmentStore>) {
        self.store = Some(store);
    }

    /// Register a listener fired after every successful save
    pub fn subscribe(&mut self, listener: impl DataChangeListener + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Field text for prefilling the form from the wired department
    ///
    /// # Panics
    ///
    /// Panics when no department was wired; that is a bug in the shell's
    /// window setup, not a user-facing condition.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        let Some(department) = self.department.as_ref() else {
            panic!("no department was set before reading the form");
        };
        FormSnapshot::of(department)
    }

    /// Handle the save action
    ///
    /// Maps the snapshot to a department and saves it. Validation failures
    /// go back to the view as inline field messages; store failures show a
    /// blocking alert. In both cases the form stays open. On success every
    /// subscribed listener fires, in order, and the form closes.
    ///
    /// # Panics
    ///
    /// Panics when the department or the store was never wired. Both are
    /// checked before any validation runs.
    #[instrument(skip_all)]
    pub fn submit(&mut self, snapshot: &FormSnapshot) {
        assert!(
            self.department.is_some(),
            "no department was set before submit"
        );
        let Some(store) = self.store.as_deref() else {
            panic!("no store was set before submit");
        };

        match build_department(snapshot) {
            Ok(department) => {
                // The wired department reflects the submission even when
                // the save itself fails.
                let department = self.department.insert(department);
                match store.save_or_update(department) {
                    Ok(()) => {
                        info!(%department, "Department saved");
                        self.notifier.notify_all();
                        self.view.close();
                    }
                    Err(err) => {
                        warn!(error = %err, "Department save failed");
                        self.view.show_alert(SAVE_ALERT_TITLE, err.message());
                    }
                }
            }
            Err(errors) => {
                debug!(%errors, "Submission rejected by validation");
                self.view.display_field_errors(&errors);
            }
        }
    }

    /// Handle the cancel action: close without saving or notifying
    pub fn cancel(&mut self) {
        debug!("Form cancelled");
        self.view.close();
    }
}

impl fmt::Debug for DepartmentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepartmentForm")
            .field("department", &self.department)
            .field("store_wired", &self.store.is_some())
            .field("listeners", &self.notifier.len())
            .finish_non_exhaustive()
    }
}
