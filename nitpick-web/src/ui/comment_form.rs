use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub value: String,
    pub placeholder: String,
    pub submit_label: String,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

/// A controlled textarea plus a submit button. The draft lives with the
/// page controller, so a rejected submission keeps its text.
#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let on_change = p.on_change.clone();
    html! {
        <div class="comment-form-fields">
            <textarea
                class="form-control mb-2"
                placeholder={p.placeholder.clone()}
                value={p.value.clone()}
                onchange={Callback::from(move |e: web_sys::Event| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
            <button
                type="button"
                class="btn btn-primary btn-sm"
                onclick={p.on_submit.reform(|_| ())}
            >
                { p.submit_label.clone() }
            </button>
        </div>
    }
}
