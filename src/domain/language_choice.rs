use super::locale::LocaleCode;

pub const DEFAULT_LANGUAGE_LABEL: &str = "English";

/// Response languages offered by the web form, as (label, locale).
pub const LANGUAGE_CHOICES: &[(&str, &str)] = &[
    ("English", "en-US"),
    ("French", "fr-FR"),
    ("German", "de-DE"),
    ("Spanish", "es-ES"),
    ("Italian", "it-IT"),
    ("Portuguese", "pt-BR"),
    ("Chinese", "zh-CN"),
    ("Dutch", "nl-NL"),
    ("Hindi", "hi-IN"),
    ("Korean", "ko-KR"),
    ("Tamil", "ta-IN"),
    ("Polish", "pl-PL"),
    ("Bengali", "bn-IN"),
    ("Japanese", "ja-JP"),
    ("Greek", "el-GR"),
    ("Romanian", "ro-RO"),
    ("Slovak", "sk-SK"),
];

/// Resolves a dropdown label ("French") or a locale listed in the choices ("fr-FR").
pub fn resolve_language_choice(input: &str) -> Option<LocaleCode> {
    let input = input.trim();
    LANGUAGE_CHOICES
        .iter()
        .find(|(label, code)| label.eq_ignore_ascii_case(input) || code.eq_ignore_ascii_case(input))
        .and_then(|(_, code)| LocaleCode::parse(code).ok())
}
