//! Voice fonts offered by the synthesis service.

/// Voice font names keyed by `"<locale> <gender>"`, lowercase.
const VOICE_FONTS: &[(&str, &str)] = &[
    ("ar-eg female", "Microsoft Server Speech Text to Speech Voice (ar-EG, Hoda)"),
    ("de-de female", "Microsoft Server Speech Text to Speech Voice (de-DE, Hedda)"),
    ("de-de male", "Microsoft Server Speech Text to Speech Voice (de-DE, Stefan, Apollo)"),
    ("en-au female", "Microsoft Server Speech Text to Speech Voice (en-AU, Catherine)"),
    ("en-ca female", "Microsoft Server Speech Text to Speech Voice (en-CA, Linda)"),
    ("en-gb female", "Microsoft Server Speech Text to Speech Voice (en-GB, Susan, Apollo)"),
    ("en-gb male", "Microsoft Server Speech Text to Speech Voice (en-GB, George, Apollo)"),
    ("en-in male", "Microsoft Server Speech Text to Speech Voice (en-IN, Ravi, Apollo)"),
    ("en-us female", "Microsoft Server Speech Text to Speech Voice (en-US, ZiraRUS)"),
    ("en-us male", "Microsoft Server Speech Text to Speech Voice (en-US, BenjaminRUS)"),
    ("es-es female", "Microsoft Server Speech Text to Speech Voice (es-ES, Laura, Apollo)"),
    ("es-es male", "Microsoft Server Speech Text to Speech Voice (es-ES, Pablo, Apollo)"),
    ("es-mx male", "Microsoft Server Speech Text to Speech Voice (es-MX, Raul, Apollo)"),
    ("fr-ca female", "Microsoft Server Speech Text to Speech Voice (fr-CA, Caroline)"),
    ("fr-fr female", "Microsoft Server Speech Text to Speech Voice (fr-FR, Julie, Apollo)"),
    ("fr-fr male", "Microsoft Server Speech Text to Speech Voice (fr-FR, Paul, Apollo)"),
    ("it-it male", "Microsoft Server Speech Text to Speech Voice (it-IT, Cosimo, Apollo)"),
    ("ja-jp female", "Microsoft Server Speech Text to Speech Voice (ja-JP, Ayumi, Apollo)"),
    ("ja-jp male", "Microsoft Server Speech Text to Speech Voice (ja-JP, Ichiro, Apollo)"),
    ("pt-br male", "Microsoft Server Speech Text to Speech Voice (pt-BR, Daniel, Apollo)"),
    ("ru-ru female", "Microsoft Server Speech Text to Speech Voice (ru-RU, Irina, Apollo)"),
    ("ru-ru male", "Microsoft Server Speech Text to Speech Voice (ru-RU, Pavel, Apollo)"),
    ("zh-cn female", "Microsoft Server Speech Text to Speech Voice (zh-CN, HuihuiRUS)"),
    ("zh-cn male", "Microsoft Server Speech Text to Speech Voice (zh-CN, Kangkang, Apollo)"),
    ("zh-hk female", "Microsoft Server Speech Text to Speech Voice (zh-HK, Tracy, Apollo)"),
    ("zh-hk male", "Microsoft Server Speech Text to Speech Voice (zh-HK, Danny, Apollo)"),
    ("zh-tw female", "Microsoft Server Speech Text to Speech Voice (zh-TW, Yating, Apollo)"),
    ("zh-tw male", "Microsoft Server Speech Text to Speech Voice (zh-TW, Zhiwei, Apollo)"),
];

/// Looks up the voice font for a locale and gender, ignoring case.
///
/// ```
/// use rust_bingspeech::voice_font;
///
/// assert_eq!(
///     voice_font("en-US", "Female"),
///     Some("Microsoft Server Speech Text to Speech Voice (en-US, ZiraRUS)")
/// );
/// assert_eq!(voice_font("xx-xx", "female"), None);
/// ```
pub fn voice_font(locale: &str, gender: &str) -> Option<&'static str> {
    let key = format!("{} {}", locale, gender).to_lowercase();
    VOICE_FONTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// Returns every `(key, voice font)` pair in the table.
pub fn voice_fonts() -> impl Iterator<Item = (&'static str, &'static str)> {
    VOICE_FONTS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let expected = Some("Microsoft Server Speech Text to Speech Voice (ja-JP, Ayumi, Apollo)");
        assert_eq!(voice_font("ja-jp", "female"), expected);
        assert_eq!(voice_font("JA-JP", "FEMALE"), expected);
        assert_eq!(voice_font("Ja-Jp", "Female"), expected);
    }

    #[test]
    fn test_unknown_pairs() {
        assert_eq!(voice_font("xx-xx", "female"), None);
        assert_eq!(voice_font("it-it", "female"), None);
        assert_eq!(voice_font("en-us", "other"), None);
        assert_eq!(voice_font("", ""), None);
    }

    #[test]
    fn test_keys_are_lowercase_and_unique() {
        let keys: Vec<&str> = voice_fonts().map(|(k, _)| k).collect();
        for key in &keys {
            assert_eq!(*key, key.to_lowercase());
            assert!(key.ends_with(" female") || key.ends_with(" male"), "bad key {}", key);
        }
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }
}
