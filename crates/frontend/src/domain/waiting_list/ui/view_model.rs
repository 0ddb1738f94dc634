use contracts::domain::waiting_list::{SignupField, SignupForm};
use leptos::prelude::*;

use super::super::model;

/// Outcome notice shown after a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure,
}

/// ViewModel for the waiting-list dialog.
///
/// Dialog states: closed, editing, submitting. While submitting the
/// controls are disabled, so at most one request is in flight.
#[derive(Clone)]
pub struct WaitingListViewModel {
    preselected_ticket: String,
    pub open: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub form: RwSignal<SignupForm>,
    pub notice: RwSignal<Option<Notice>>,
}

impl WaitingListViewModel {
    /// `preselected_ticket` pre-fills the ticket select; the form is
    /// re-seeded with it after a successful submit.
    pub fn new(preselected_ticket: Option<String>) -> Self {
        let preselected_ticket = preselected_ticket.unwrap_or_default();
        let form = SignupForm {
            ticket: preselected_ticket.clone(),
            ..SignupForm::default()
        };
        Self {
            preselected_ticket,
            open: RwSignal::new(false),
            submitting: RwSignal::new(false),
            form: RwSignal::new(form),
            notice: RwSignal::new(None),
        }
    }

    fn seeded_form(&self) -> SignupForm {
        SignupForm {
            ticket: self.preselected_ticket.clone(),
            ..SignupForm::default()
        }
    }

    pub fn open_dialog(&self) {
        self.notice.set(None);
        self.open.set(true);
    }

    pub fn close_dialog(&self) {
        if !self.submitting.get_untracked() {
            self.open.set(false);
        }
    }

    /// Update one field in place; all other fields are preserved.
    pub fn set_field(&self, field: SignupField, value: String) {
        self.form.update(|f| f.set(field, value));
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().is_complete()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting.get_untracked() && self.form.get_untracked().is_complete()
    }

    pub fn submit_command(&self) {
        if !self.can_submit() {
            return;
        }
        self.submitting.set(true);

        let current = self.form.get_untracked();
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::submit(&current).await;
            vm.apply_submit_result(result);
        });
    }

    /// Synchronous tail of a submit attempt: exactly one of the success and
    /// failure paths runs.
    pub fn apply_submit_result(&self, result: Result<(), String>) {
        self.submitting.set(false);
        match result {
            Ok(()) => {
                self.notice.set(Some(Notice::Success));
                self.form.set(self.seeded_form());
                self.open.set(false);
            }
            Err(e) => {
                log::error!("Waiting-list submit failed: {}", e);
                // Keep the dialog open and the entered fields intact.
                self.notice.set(Some(Notice::Failure));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_vm() -> WaitingListViewModel {
        let vm = WaitingListViewModel::new(Some("5km Fun Run".into()));
        vm.open_dialog();
        vm.set_field(SignupField::FirstName, "Jane".into());
        vm.set_field(SignupField::LastName, "Doe".into());
        vm.set_field(SignupField::Email, "jane@x.com".into());
        vm.set_field(SignupField::PhoneNumber, "0821234567".into());
        vm
    }

    #[test]
    fn preselected_ticket_seeds_the_form() {
        let vm = WaitingListViewModel::new(Some("Spectator".into()));
        assert_eq!(vm.form.get_untracked().ticket, "Spectator");
        assert!(!vm.form.get_untracked().is_complete());
    }

    #[test]
    fn editing_one_field_preserves_the_others() {
        let vm = filled_vm();
        vm.set_field(SignupField::Email, "second@x.com".into());
        let form = vm.form.get_untracked();
        assert_eq!(form.email, "second@x.com");
        assert_eq!(form.first_name, "Jane");
        assert_eq!(form.ticket, "5km Fun Run");
    }

    #[test]
    fn incomplete_form_cannot_submit() {
        let vm = WaitingListViewModel::new(None);
        vm.open_dialog();
        vm.set_field(SignupField::FirstName, "Jane".into());
        assert!(!vm.can_submit());
    }

    #[test]
    fn submitting_state_blocks_a_second_submission() {
        let vm = filled_vm();
        vm.submitting.set(true);
        assert!(!vm.can_submit());
    }

    #[test]
    fn failed_submit_keeps_fields_and_reenables_the_dialog() {
        let vm = filled_vm();
        vm.submitting.set(true);

        vm.apply_submit_result(Err("network error".into()));

        assert!(vm.open.get_untracked());
        assert!(!vm.submitting.get_untracked());
        assert_eq!(vm.notice.get_untracked(), Some(Notice::Failure));
        let form = vm.form.get_untracked();
        assert_eq!(form.first_name, "Jane");
        assert_eq!(form.email, "jane@x.com");
        assert!(vm.can_submit(), "user can retry without re-typing");
    }

    #[test]
    fn successful_submit_closes_and_reseeds_the_form() {
        let vm = filled_vm();
        vm.submitting.set(true);

        vm.apply_submit_result(Ok(()));

        assert!(!vm.open.get_untracked());
        assert!(!vm.submitting.get_untracked());
        assert_eq!(vm.notice.get_untracked(), Some(Notice::Success));
        let form = vm.form.get_untracked();
        assert_eq!(form.first_name, "");
        assert_eq!(form.ticket, "5km Fun Run", "preselection survives the reset");
    }

    #[test]
    fn reopening_clears_the_notice() {
        let vm = filled_vm();
        vm.apply_submit_result(Err("network error".into()));
        vm.open_dialog();
        assert_eq!(vm.notice.get_untracked(), None);
    }
}
