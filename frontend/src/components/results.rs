use super::super::Model;
use shared::view::{visible_lines, EMPTY_PROMPT};
use shared::CheckStatus;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    if model.upload.is_none() {
        return html! { <p class="info-message">{ EMPTY_PROMPT }</p> };
    }

    if model.loading {
        return html! {
            <div class="loading-results">
                <i class="fa-solid fa-spinner fa-spin"></i>
                <p>{"Analyzing PCB image..."}</p>
            </div>
        };
    }

    let Some(result) = &model.result else {
        return html! {};
    };

    html! {
        <div class="results-container">
            <h2>{"Analysis Results:"}</h2>
            { for visible_lines(model.mode, result).into_iter().map(|line| html! {
                <p class={classes!("result-line", status_class(line.status))}>
                    <strong>{ format!("{}:", line.label) }</strong>
                    {" "}{ line.status.to_string() }
                </p>
            })}
            <hr />
            <h3>{"Details / Model Output:"}</h3>
            <pre class="details">{ result.details.clone() }</pre>
        </div>
    }
}

fn status_class(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Required => "status-required",
        CheckStatus::NotRequired => "status-not-required",
        CheckStatus::NotApplicable => "status-not-applicable",
        CheckStatus::Error => "status-error",
    }
}
