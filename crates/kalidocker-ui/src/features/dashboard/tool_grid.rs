use crate::core::TOOL_CATALOG;
use yew::prelude::*;

#[function_component(ToolGrid)]
pub(crate) fn tool_grid() -> Html {
    html! {
        <section>
            <div class="section-header">
                <h2 class="section-title">{"Security Tools"}</h2>
                <button class="btn btn-primary" type="button">{"+ New Scan"}</button>
            </div>
            <div class="tools-grid">
                {for TOOL_CATALOG.iter().map(|tool| html! {
                    <div class="card tool-card" key={tool.name}>
                        <div class="tool-icon">{tool.icon}</div>
                        <div class="tool-name">{tool.name}</div>
                        <div class="tool-desc">{tool.description}</div>
                    </div>
                })}
            </div>
        </section>
    }
}
