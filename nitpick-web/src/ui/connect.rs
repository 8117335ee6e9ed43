use nitpick_client::api::{IssueId, Uuid};
use yew::prelude::*;

use crate::ViewerInfo;

#[derive(Clone, PartialEq, Properties)]
pub struct ConnectProps {
    pub on_submit: Callback<ViewerInfo>,
}

pub struct Connect {
    host: String,
    issue: String,
    parse_error: Option<String>,
}

pub enum ConnectMsg {
    HostChanged(String),
    IssueChanged(String),
    SubmitClicked,
}

impl Component for Connect {
    type Message = ConnectMsg;
    type Properties = ConnectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            host: String::new(),
            issue: String::new(),
            parse_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ConnectMsg::HostChanged(h) => self.host = h,
            ConnectMsg::IssueChanged(i) => self.issue = i,
            ConnectMsg::SubmitClicked => match self.issue.trim().parse::<Uuid>() {
                Ok(id) => {
                    self.parse_error = None;
                    ctx.props().on_submit.emit(ViewerInfo {
                        host: self.host.clone(),
                        issue: IssueId(id),
                    });
                    return false;
                }
                Err(e) => self.parse_error = Some(format!("not a valid issue id: {e}")),
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    ConnectMsg::$msg(input.value())
                })
            };
        }
        html! {
            <form>
                <div class="form-group">
                    <label for="host">{ "Host" }</label>
                    <input
                        type="url"
                        class="form-control"
                        id="host"
                        placeholder="https://example.org"
                        onchange={callback_for!(HostChanged)}
                    />
                </div>
                <div class="form-group">
                    <label for="issue">{ "Issue" }</label>
                    <input
                        type="text"
                        class="form-control"
                        id="issue"
                        placeholder="00000000-0000-0000-0000-000000000000"
                        onchange={callback_for!(IssueChanged)}
                    />
                </div>
                { for self.parse_error.as_ref().map(|e| html! {
                    <div class="alert alert-warning">{ e }</div>
                }) }
                <button
                    type="submit"
                    class="btn btn-primary"
                    onclick={ctx.link().callback(|_| ConnectMsg::SubmitClicked)}
                >
                    { "Connect" }
                </button>
            </form>
        }
    }
}
