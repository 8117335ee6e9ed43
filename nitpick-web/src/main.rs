use gloo_storage::{LocalStorage, Storage};
use nitpick_client::api::IssueId;
use yew::prelude::*;

mod api;
mod ui;

lazy_static::lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

const KEY_VIEWER: &str = "viewer";

/// Where to reach the tracker and which issue page to show
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ViewerInfo {
    pub host: String,
    pub issue: IssueId,
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<Root>::new().render();
}

enum RootMsg {
    Connect(ViewerInfo),
    Disconnect,
}

struct Root {
    viewer: Option<ViewerInfo>,
}

impl Component for Root {
    type Message = RootMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Root {
            viewer: LocalStorage::get(KEY_VIEWER).ok(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RootMsg::Connect(info) => {
                LocalStorage::set(KEY_VIEWER, &info)
                    .expect("failed saving viewer info to LocalStorage");
                self.viewer = Some(info);
            }
            RootMsg::Disconnect => {
                LocalStorage::delete(KEY_VIEWER);
                self.viewer = None;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.viewer {
            None => html! {
                <div class="container">
                    <ui::Connect on_submit={ctx.link().callback(RootMsg::Connect)} />
                </div>
            },
            Some(info) => html! {
                <ui::App
                    viewer={info.clone()}
                    on_disconnect={ctx.link().callback(|_| RootMsg::Disconnect)}
                />
            },
        }
    }
}
