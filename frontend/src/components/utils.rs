use super::super::Model;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::upload::{format_limit, is_accepted_file_name};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Takes the first file of `file_list`, checking extension and the backend's size limit
/// before anything is sent.
pub fn pick_image(file_list: &FileList, max_upload_bytes: usize) -> Result<GlooFile, String> {
    let file = file_list
        .item(0)
        .ok_or_else(|| "No file selected.".to_string())?;

    let name = file.name();
    if !is_accepted_file_name(&name) {
        log::warn!("Skipping unsupported file: {}", name);
        return Err(format!(
            "Unsupported file: {}. Supported formats: JPG, JPEG, PNG, BMP",
            name
        ));
    }
    if file.size() > max_upload_bytes as f64 {
        return Err(format!(
            "{} is too large. The limit is {}.",
            name,
            format_limit(max_upload_bytes)
        ));
    }

    Ok(GlooFile::from(file))
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
