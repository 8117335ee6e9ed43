use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

/// Last failed operation, if any. Cleared by the next successful one.
#[function_component(ErrorBanner)]
pub fn error_banner(p: &ErrorBannerProps) -> Html {
    let visible = p.message.is_some();
    html! {
        <div
            class={classes!("error-banner", "alert", "alert-danger", (!visible).then(|| "d-none"))}
            aria-hidden={if visible { "false" } else { "true" }}
        >
            { p.message.clone().unwrap_or_default() }
        </div>
    }
}
