use dioxus::prelude::*;

use ui::snapshot::tooltip::TooltipState;
use ui::snapshot::{TooltipCtx, TooltipLayer};
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_tracing();
    dioxus::launch(App);
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {
    tracing_wasm::set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[component]
fn App() -> Element {
    // The one floating tooltip shared by every sparkline on the page.
    let tooltip = use_signal(|| None::<TooltipState>);
    use_context_provider(|| TooltipCtx(tooltip));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        header { class: "masthead",
            h1 { "Riskpulse" }
            p { class: "masthead__tagline", "Composite bitcoin market-risk monitor" }
        }

        Router::<Route> {}
        TooltipLayer {}
    }
}
