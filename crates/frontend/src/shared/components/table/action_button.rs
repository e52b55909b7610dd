use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Visual variant of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Borderless text with a leading icon
    TextIcon,
    /// Filled primary button
    Brand,
}

impl ButtonVariant {
    pub fn appearance(&self) -> ButtonAppearance {
        match self {
            ButtonVariant::TextIcon => ButtonAppearance::Subtle,
            ButtonVariant::Brand => ButtonAppearance::Primary,
        }
    }
}

/// Bulk action applied to the selected rows
#[derive(Clone)]
pub struct SelectAction<K: Send + Sync + 'static> {
    pub name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub variant: ButtonVariant,
    pub on_click: Callback<Vec<K>>,
}

#[component]
pub fn ActionButton(
    #[prop(into)] label: String,
    icon_name: &'static str,
    variant: ButtonVariant,
    on_click: Callback<()>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <Button
            appearance=variant.appearance()
            class=class
            on_click=move |_| on_click.run(())
        >
            {icon(icon_name)}
            " "
            {label}
        </Button>
    }
}
