use super::super::{Model, Msg};
use shared::{AnalysisMode, IntoEnumIterator};
use yew::prelude::*;

pub fn render_mode_selector(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="analysis-mode-selector">
            <h2>{"Analysis Options"}</h2>
            <p class="selector-caption">{"Choose analysis type:"}</p>
            { for AnalysisMode::iter().map(|mode| render_mode_option(model, ctx, mode)) }
        </div>
    }
}

fn render_mode_option(model: &Model, ctx: &Context<Model>, mode: AnalysisMode) -> Html {
    html! {
        <label key={mode.index().to_string()}>
            <input type="radio" name="analysis_mode"
                value={mode.index().to_string()}
                checked={model.mode == mode}
                disabled={model.loading}
                onchange={ctx.link().callback(move |_| Msg::SetMode(mode))} />
            <span class="radio-label-text">{ mode.label() }</span>
        </label>
    }
}
