mod api;
mod components;

use components::handlers;
use components::header::render_header;
use components::mode_selector::render_mode_selector;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::upload::{UploadSettings, DEFAULT_MAX_UPLOAD_BYTES};
use shared::{AnalysisMode, AnalysisResult};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// The image currently under analysis
struct UploadData {
    file: GlooFile,
    preview_url: ObjectUrl,
}

enum Msg {
    // Request inputs
    SetMode(AnalysisMode),
    FileSelected(GlooFile),
    ClearImage,
    SettingsLoaded(UploadSettings),

    // Analysis responses, tagged with the request sequence number
    AnalysisFinished(u64, AnalysisResult),
    AnalysisFailed(u64, String),

    // UI states
    SetError(Option<String>),
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

struct Model {
    mode: AnalysisMode,
    upload: Option<UploadData>,
    result: Option<AnalysisResult>,
    loading: bool,
    error: Option<String>,
    is_dragging: bool,
    request_seq: u64,
    max_upload_bytes: usize,
    _paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let paste_listener = web_sys::window().map(|window| {
            EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            })
        });

        handlers::load_upload_settings(ctx);

        Self {
            mode: AnalysisMode::default(),
            upload: None,
            result: None,
            loading: false,
            error: None,
            is_dragging: false,
            request_seq: 0,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            _paste_listener: paste_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetMode(mode) => handlers::handle_set_mode(self, ctx, mode),
            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::ClearImage => handlers::handle_clear_image(self),
            Msg::SettingsLoaded(settings) => {
                self.max_upload_bytes = settings.max_upload_bytes;
                true
            }

            Msg::AnalysisFinished(seq, result) => {
                handlers::handle_analysis_finished(self, seq, result)
            }
            Msg::AnalysisFailed(seq, error) => handlers::handle_analysis_failed(self, seq, error),

            Msg::SetError(error) => {
                self.error = error;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <aside class="sidebar">
                    { render_mode_selector(self, ctx) }
                </aside>

                <main class="main-content">
                    { render_upload_section(self, ctx) }
                    { render_error_message(self) }
                    { render_preview_area(self, ctx) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"PCB Analysis Tool | placeholder model, replace with a trained classifier"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("PCB analysis app starting...");
    yew::Renderer::<Model>::new().render();
}
