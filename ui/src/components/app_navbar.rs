use crate::core::Theme;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

/// Application header: brand, light/dark toggle and locale switcher.
///
/// Platforms provide two context signals before rendering this component:
/// - `Signal<Theme>`: the dashboard palette follows it; the toggle button is
///   hidden when it is absent.
/// - `Signal<String>`: the active language code, so a language change re-renders
///   the routed subtree.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    let theme_ctx: Option<Signal<Theme>> = try_use_context::<Signal<Theme>>();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let toggle = theme_ctx.map(|mut theme| {
        let icon = theme().toggle_icon();
        rsx! {
            button {
                r#type: "button",
                class: "navbar__theme-toggle",
                title: t!("theme-toggle-label"),
                aria_label: t!("theme-toggle-label"),
                onclick: move |_| {
                    let next = theme().toggled();
                    tracing::debug!(theme = %next, "theme toggled");
                    theme.set(next);
                },
                "{icon}"
            }
        }
    });

    let title = t!("app-title");
    let tagline = t!("app-tagline");

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "{title}" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                div { class: "navbar__actions",
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                    {toggle}
                }
            }
        }
    }
}
