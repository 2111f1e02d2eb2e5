/// Reusable UI components
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
            if let Some(msg) = &props.message {
                <p class="loading-message">{msg}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or(false)]
    pub small: bool,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[derive(PartialEq, Clone, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let base_style = "border: none; border-radius: 4px; cursor: pointer; font-weight: 500; transition: all 0.2s;";

    let size_style = if props.small {
        "padding: 2px 8px; font-size: 12px;"
    } else {
        "padding: 8px 16px; font-size: 14px;"
    };

    let variant_style = match props.variant {
        ButtonVariant::Primary => "background-color: #5B4FE8; color: white;",
        ButtonVariant::Secondary => "background-color: #e0e0e0; color: #333;",
        ButtonVariant::Danger => "background-color: #f44336; color: white;",
        ButtonVariant::Ghost => "background-color: transparent; color: inherit;",
    };

    let disabled_style = if props.disabled {
        "opacity: 0.5; cursor: not-allowed;"
    } else {
        ""
    };

    let style = format!("{} {} {} {}", base_style, size_style, variant_style, disabled_style);

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            title={props.title.clone()}
            style={style}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub title: AttrValue,
    pub children: Children,
    #[prop_or_default]
    pub footer: Option<AttrValue>,
}

/// Titled card used for each dashboard section
#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    html! {
        <section class="panel">
            <h2 class="panel-title">{&props.title}</h2>
            <div class="panel-body">
                {props.children.clone()}
            </div>
            if let Some(footer) = &props.footer {
                <div class="panel-footer">{footer}</div>
            }
        </section>
    }
}
