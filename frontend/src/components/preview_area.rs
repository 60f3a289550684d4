use super::super::{Model, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(upload) = &model.upload else {
        return html! {};
    };

    let link = ctx.link().clone();
    let file_name = upload.file.name();

    html! {
        <div id="preview-container">
            <h2>{"Uploaded PCB Image:"}</h2>
            <figure class="image-preview">
                <img id="actual-image-preview"
                    src={upload.preview_url.to_string()}
                    alt={file_name.clone()} />
                <figcaption>{ file_name }</figcaption>
            </figure>
            <div class="button-container">
                <button
                    id="clear-btn"
                    class="analyze-btn"
                    style="background-color: var(--clear-color);"
                    disabled={model.loading}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ClearImage)
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" Remove Image"}
                </button>
            </div>
        </div>
    }
}
