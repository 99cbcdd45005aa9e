use shared::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub theme: &'static Theme,
    /// Rendered on the right of the title block
    #[prop_or_default]
    pub children: Html,
}

/// Page title block shared by every view
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <div class="flex justify-between items-end">
            <div>
                <h1 class={classes!("text-2xl", "font-bold", props.theme.text_primary)}>{props.title.clone()}</h1>
                <p class={classes!("text-sm", props.theme.text_secondary)}>{props.subtitle.clone()}</p>
            </div>
            {props.children.clone()}
        </div>
    }
}
