use super::super::{Model, Msg, UploadData};
use super::utils::pick_image;
use crate::api::{fetch_upload_settings, request_analysis};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{AnalysisMode, AnalysisResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn handle_set_mode(model: &mut Model, ctx: &Context<Model>, mode: AnalysisMode) -> bool {
    if model.mode == mode {
        return false;
    }
    model.mode = mode;
    send_analysis_request(model, ctx);
    true
}

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let preview_url = ObjectUrl::from(file.clone());
    model.upload = Some(UploadData { file, preview_url });
    model.error = None;
    send_analysis_request(model, ctx);
    true
}

pub fn handle_clear_image(model: &mut Model) -> bool {
    model.upload = None;
    model.result = None;
    model.error = None;
    model.loading = false;
    // Responses still in flight belong to the removed image.
    model.request_seq += 1;
    true
}

pub fn handle_analysis_finished(model: &mut Model, seq: u64, result: AnalysisResult) -> bool {
    if seq != model.request_seq {
        log::debug!("Dropping stale analysis response {}", seq);
        return false;
    }
    model.result = Some(result);
    model.loading = false;
    true
}

pub fn handle_analysis_failed(model: &mut Model, seq: u64, error: String) -> bool {
    if seq != model.request_seq {
        return false;
    }
    log::error!("Analysis request failed: {}", error);
    model.error = Some(error);
    model.result = None;
    model.loading = false;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        process_file_list(ctx, file_list, model.max_upload_bytes);
    }

    true
}

pub fn handle_paste(model: &Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|dt| dt.files()) {
        if file_list.length() > 0 {
            event.prevent_default();
            process_file_list(ctx, file_list, model.max_upload_bytes);
            return true;
        }
    }
    false
}

pub fn process_file_list(ctx: &Context<Model>, file_list: FileList, max_upload_bytes: usize) {
    match pick_image(&file_list, max_upload_bytes) {
        Ok(file) => ctx.link().send_message(Msg::FileSelected(file)),
        Err(message) => ctx.link().send_message(Msg::SetError(Some(message))),
    }
}

/// Starts one analysis call for the current image and mode; no-op before an upload.
pub fn send_analysis_request(model: &mut Model, ctx: &Context<Model>) {
    let Some(upload) = &model.upload else {
        return;
    };

    model.request_seq += 1;
    model.loading = true;
    model.result = None;

    let seq = model.request_seq;
    let mode = model.mode;
    let file = upload.file.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        match request_analysis(&file, mode).await {
            Ok(result) => link.send_message(Msg::AnalysisFinished(seq, result)),
            Err(error) => link.send_message(Msg::AnalysisFailed(seq, error)),
        }
    });
}

/// Replaces the built-in upload limit with the one the backend is configured with.
pub fn load_upload_settings(ctx: &Context<Model>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match fetch_upload_settings().await {
            Ok(settings) => link.send_message(Msg::SettingsLoaded(settings)),
            Err(error) => log::warn!("Keeping default upload limit: {}", error),
        }
    });
}
