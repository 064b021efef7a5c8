use dioxus::prelude::*;

/// One supported speech/response language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// Fixed catalog, in display order. The first entry doubles as the fallback
/// when an unrecognized code comes in.
pub const LANGUAGE_OPTIONS: &[LanguageOption] = &[
    LanguageOption { code: "en-US", name: "English" },
    LanguageOption { code: "es-ES", name: "Spanish" },
    LanguageOption { code: "fr-FR", name: "French" },
    LanguageOption { code: "de-DE", name: "German" },
    LanguageOption { code: "it-IT", name: "Italian" },
    LanguageOption { code: "pt-BR", name: "Portuguese" },
    LanguageOption { code: "ja-JP", name: "Japanese" },
    LanguageOption { code: "ko-KR", name: "Korean" },
    LanguageOption { code: "zh-CN", name: "Chinese" },
    LanguageOption { code: "hi-IN", name: "Hindi" },
    LanguageOption { code: "ar-SA", name: "Arabic" },
];

/// Default selection: the first catalog entry.
pub fn default_language_code() -> &'static str {
    LANGUAGE_OPTIONS[0].code
}

/// Catalog entry for `code`, falling back to the first entry so a stale or
/// unset code never renders an empty label.
pub fn display_language(code: &str) -> &'static LanguageOption {
    LANGUAGE_OPTIONS
        .iter()
        .find(|lang| lang.code == code)
        .unwrap_or(&LANGUAGE_OPTIONS[0])
}

#[component]
pub fn LanguageSelector(
    selected_language: String,
    on_language_change: Callback<String>,
) -> Element {
    let mut open = use_signal(|| false);

    let selected = display_language(&selected_language);

    rsx! {
        div {
            class: "language-selector",

            button {
                class: "language-button",
                onclick: move |_| open.set(!open()),
                span { class: "language-globe", "🌐" }
                span { "{selected.name}" }
            }

            if open() {
                // Click-away overlay sits beneath the menu; any click on it
                // closes the dropdown without touching the selection.
                div {
                    class: "language-overlay",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "language-menu",
                    for lang in LANGUAGE_OPTIONS {
                        button {
                            class: if selected_language == lang.code {
                                "language-option active"
                            } else {
                                "language-option"
                            },
                            onclick: move |_| {
                                on_language_change.call(lang.code.to_string());
                                open.set(false);
                            },
                            "{lang.name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eleven_unique_codes() {
        assert_eq!(LANGUAGE_OPTIONS.len(), 11);
        for (i, lang) in LANGUAGE_OPTIONS.iter().enumerate() {
            assert!(
                LANGUAGE_OPTIONS[i + 1..].iter().all(|other| other.code != lang.code),
                "duplicate code {}",
                lang.code
            );
        }
    }

    #[test]
    fn default_is_first_entry() {
        assert_eq!(default_language_code(), "en-US");
        assert_eq!(display_language(default_language_code()).name, "English");
    }

    #[test]
    fn every_catalog_code_resolves_to_its_own_entry() {
        for lang in LANGUAGE_OPTIONS {
            let found = display_language(lang.code);
            assert_eq!(found.code, lang.code);
            assert_eq!(found.name, lang.name);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_first_entry() {
        for bogus in ["", "xx-XX", "en", "EN-US", "fr_FR"] {
            assert_eq!(display_language(bogus).name, LANGUAGE_OPTIONS[0].name);
        }
    }
}
