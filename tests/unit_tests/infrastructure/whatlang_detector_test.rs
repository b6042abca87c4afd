use sanjeevani::application::ports::LanguageDetector;
use sanjeevani::infrastructure::language::WhatlangDetector;

#[test]
fn given_english_sentence_when_detecting_then_returns_en() {
    let detector = WhatlangDetector::new();

    let language = detector.detect(
        "I have had a sore throat and a mild fever since yesterday evening, and I feel very tired.",
    );

    assert_eq!(language.as_deref(), Some("en"));
}

#[test]
fn given_french_sentence_when_detecting_then_returns_fr() {
    let detector = WhatlangDetector::new();

    let language = detector.detect(
        "J'ai mal à la gorge et un peu de fièvre depuis hier soir, et je me sens très fatigué.",
    );

    assert_eq!(language.as_deref(), Some("fr"));
}

#[test]
fn given_spanish_sentence_when_detecting_then_returns_es() {
    let detector = WhatlangDetector::new();

    let language = detector.detect(
        "Tengo dolor de cabeza desde hace tres días y también me duele el estómago por las noches.",
    );

    assert_eq!(language.as_deref(), Some("es"));
}

#[test]
fn given_blank_text_when_detecting_then_returns_none() {
    let detector = WhatlangDetector::new();

    assert_eq!(detector.detect("   "), None);
}
