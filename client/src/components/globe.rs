//! Placeholder globe panel.
//!
//! The regional-view visualization is not built yet; this renders a static
//! wireframe sphere so the dashboard layout is complete. No projection or
//! rendering math lives here.

use leptos::prelude::*;

const GLOBE_MARKUP: &str = concat!(
    "<svg class=\"globe__svg\" width=\"220\" height=\"220\" role=\"img\">",
    "<circle class=\"globe__outline\" cx=\"110\" cy=\"110\" r=\"100\" fill=\"none\"/>",
    "<ellipse class=\"globe__meridian\" cx=\"110\" cy=\"110\" rx=\"45\" ry=\"100\" fill=\"none\"/>",
    "<ellipse class=\"globe__meridian\" cx=\"110\" cy=\"110\" rx=\"80\" ry=\"100\" fill=\"none\"/>",
    "<ellipse class=\"globe__parallel\" cx=\"110\" cy=\"110\" rx=\"100\" ry=\"35\" fill=\"none\"/>",
    "<line class=\"globe__parallel\" x1=\"10\" y1=\"110\" x2=\"210\" y2=\"110\"/>",
    "</svg>"
);

/// Static stand-in for the future regional service map.
#[component]
pub fn GlobePanel() -> impl IntoView {
    view! {
        <div class="globe">
            <div class="globe__figure" inner_html=GLOBE_MARKUP></div>
            <p class="globe__caption">"Regional view coming soon"</p>
        </div>
    }
}
