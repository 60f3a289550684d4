use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-microchip"></i> {" PCB Analysis Tool"}</h1>
            <p class="subtitle">{"Upload a PCB image and select the analysis type."}</p>
        </header>
    }
}
