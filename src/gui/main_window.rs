//! Main window wiring for the notice board
//!
//! Creates the Slint main window, keeps the notice list model in sync with
//! the notice collection, and registers the button and selection handlers.
//! Everything runs synchronously on the UI event thread.

use anyhow::Result;
use slint::{ComponentHandle, Model, ModelRc, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

use super::dialogs::Dialogs;
use super::{MainWindow, NoticeItem};
use crate::config::AppConfig;
use crate::errors::NoticeBoardError;
use crate::models::{Notice, NoticeBoard, RandomColorSource};

/// Convert a notice into its list-row representation
fn notice_to_item(notice: &Notice) -> NoticeItem {
    NoticeItem {
        text: notice.text.as_str().into(),
        color: slint::Color::from_rgb_u8(notice.color.red, notice.color.green, notice.color.blue),
    }
}

/// Current list selection, or `None` when nothing is selected
fn selection(window: &MainWindow) -> Option<usize> {
    let index = window.get_selected_index();
    (index >= 0).then_some(index as usize)
}

/// Run the main window until the user closes it
pub fn run_main_window(config: &AppConfig) -> Result<()> {
    let main_window = MainWindow::new()?;

    main_window.set_window_title(config.window.title.as_str().into());
    main_window.set_item_font_size(config.ui.font_size as i32);
    main_window.window().set_size(slint::LogicalSize::new(
        config.window.width as f32,
        config.window.height as f32,
    ));

    let board = Rc::new(RefCell::new(NoticeBoard::new(Box::new(RandomColorSource))));
    let notices_model = Rc::new(VecModel::<NoticeItem>::default());
    main_window.set_notices(ModelRc::from(notices_model.clone()));

    let dialogs = Dialogs::new()?;
    setup_event_handlers(&main_window, board, notices_model, dialogs);

    main_window.show()?;
    slint::run_event_loop()?;

    Ok(())
}

/// Register the button and selection handlers on the main window
fn setup_event_handlers(
    main_window: &MainWindow,
    board: Rc<RefCell<NoticeBoard>>,
    notices: Rc<VecModel<NoticeItem>>,
    dialogs: Rc<Dialogs>,
) {
    // Post Notice handler
    let window_weak = main_window.as_weak();
    let board_post = board.clone();
    let notices_post = notices.clone();
    let dialogs_post = dialogs.clone();
    main_window.on_post_notice(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let text = window.get_input_text().to_string();
        let posted = board_post.borrow_mut().post(&text).map(notice_to_item);
        match posted {
            Ok(item) => {
                notices_post.push(item);
                window.set_input_text("".into());
                log::info!("Posted notice ({} on board)", notices_post.row_count());
                dialogs_post.show_info("Notice posted successfully.");
            }
            Err(err) => {
                log::warn!("Post rejected: {}", err);
                dialogs_post.show_warning(err.message());
            }
        }
    });

    // Update Notice handler
    let window_weak = main_window.as_weak();
    let board_update = board.clone();
    let notices_update = notices.clone();
    let dialogs_update = dialogs.clone();
    main_window.on_update_notice(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let selected = selection(&window);
        let text = window.get_input_text().to_string();
        let updated = board_update
            .borrow_mut()
            .update(selected, &text)
            .map(notice_to_item);
        match updated {
            Ok(item) => {
                if let Some(index) = selected {
                    notices_update.set_row_data(index, item);
                    log::info!("Updated notice {}", index);
                }
                window.set_input_text("".into());
                dialogs_update.show_info("Notice updated successfully.");
            }
            Err(err) => {
                log::warn!("Update rejected: {}", err);
                dialogs_update.show_warning(err.message());
            }
        }
    });

    // Delete Notice handler; mutation happens only after the user confirms
    let window_weak = main_window.as_weak();
    let board_delete = board.clone();
    let notices_delete = notices.clone();
    let dialogs_delete = dialogs.clone();
    main_window.on_delete_notice(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let index = match selection(&window).filter(|&i| i < board_delete.borrow().len()) {
            Some(index) => index,
            None => {
                let err = NoticeBoardError::no_selection_for_delete();
                log::warn!("Delete rejected: {}", err);
                dialogs_delete.show_warning(err.message());
                return;
            }
        };

        let window_weak = window.as_weak();
        let board = board_delete.clone();
        let notices = notices_delete.clone();
        let dialogs_weak = Rc::downgrade(&dialogs_delete);
        dialogs_delete.ask_confirmation(
            "Are you sure you want to delete this notice?",
            move || match board.borrow_mut().delete(Some(index)) {
                Ok(notice) => {
                    notices.remove(index);
                    if let Some(window) = window_weak.upgrade() {
                        window.set_selected_index(-1);
                        window.set_input_text("".into());
                    }
                    log::info!("Deleted notice {} ({})", index, notice.color);
                    if let Some(dialogs) = dialogs_weak.upgrade() {
                        dialogs.show_info("Notice deleted successfully.");
                    }
                }
                Err(err) => {
                    // The board shrank between the prompt and the answer
                    log::warn!("Delete rejected: {}", err);
                    if let Some(dialogs) = dialogs_weak.upgrade() {
                        dialogs.show_warning(err.message());
                    }
                }
            },
        );
    });

    // Selection handler: copy the picked notice into the input for editing
    let window_weak = main_window.as_weak();
    let board_select = board.clone();
    main_window.on_notice_selected(move |index| {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        if index < 0 {
            return;
        }
        if let Some(notice) = board_select.borrow().get(index as usize) {
            log::debug!("Selected notice {}", index);
            window.set_input_text(notice.text.as_str().into());
        }
    });
}
