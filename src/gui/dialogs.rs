//! Slint dialogs for user feedback
//!
//! One reusable message dialog for informational confirmations and input
//! warnings, and one yes/no confirmation dialog used before delete.

use slint::ComponentHandle;
use std::rc::Rc;

use super::{ConfirmDialog, MessageDialog};

/// Long-lived dialog windows, created once and shown on demand
pub struct Dialogs {
    message: MessageDialog,
    confirm: ConfirmDialog,
}

impl Dialogs {
    pub fn new() -> Result<Rc<Self>, slint::PlatformError> {
        let message = MessageDialog::new()?;
        let message_weak = message.as_weak();
        message.on_dismiss(move || {
            if let Some(dialog) = message_weak.upgrade() {
                let _ = dialog.hide();
            }
        });

        let confirm = ConfirmDialog::new()?;

        Ok(Rc::new(Self { message, confirm }))
    }

    /// Show an informational confirmation popup
    pub fn show_info(&self, text: &str) {
        self.show_message(text, false);
    }

    /// Show a warning popup for rejected input or a missing selection
    pub fn show_warning(&self, text: &str) {
        self.show_message(text, true);
    }

    fn show_message(&self, text: &str, warning: bool) {
        self.message.set_warning(warning);
        self.message.set_message(text.into());
        if let Err(err) = self.message.show() {
            log::error!("Failed to show message dialog: {}", err);
        }
    }

    /// Show the yes/no confirmation dialog.
    ///
    /// `on_confirm` runs only when the user picks "Yes"; "No" or closing the
    /// dialog is a silent no-op.
    pub fn ask_confirmation(&self, text: &str, on_confirm: impl FnMut() + 'static) {
        self.confirm.set_message(text.into());

        let confirm_weak = self.confirm.as_weak();
        let mut action = on_confirm;
        self.confirm.on_confirm(move || {
            if let Some(dialog) = confirm_weak.upgrade() {
                let _ = dialog.hide();
            }
            action();
        });

        let confirm_weak = self.confirm.as_weak();
        self.confirm.on_cancel(move || {
            if let Some(dialog) = confirm_weak.upgrade() {
                let _ = dialog.hide();
            }
        });

        if let Err(err) = self.confirm.show() {
            log::error!("Failed to show confirmation dialog: {}", err);
        }
    }
}
