use sanjeevani::domain::AdviceText;

#[test]
fn given_padded_text_when_creating_then_whitespace_trimmed() {
    let advice = AdviceText::new("  Likely pharyngitis.\n");
    assert_eq!(advice.as_str(), "Likely pharyngitis.");
}

#[test]
fn given_two_sentences_when_segmenting_then_one_segment_per_sentence() {
    let advice = AdviceText::new(
        "You likely have viral pharyngitis. Rest, drink warm fluids and take paracetamol.",
    );

    assert_eq!(
        advice.segments(),
        vec![
            "You likely have viral pharyngitis".to_string(),
            "Rest, drink warm fluids and take paracetamol".to_string(),
        ]
    );
}

#[test]
fn given_text_without_periods_when_segmenting_then_single_segment() {
    let advice = AdviceText::new("Drink water");
    assert_eq!(advice.segments(), vec!["Drink water".to_string()]);
}

#[test]
fn given_empty_text_when_segmenting_then_no_segments() {
    assert!(AdviceText::new("  ").segments().is_empty());
}
