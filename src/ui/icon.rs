use leptos::prelude::*;

/// Icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the `.svg` extension
    name: &'static str,
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
}
