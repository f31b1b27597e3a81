use youreview::domain::Transcript;

#[test]
fn given_ordered_fragments_when_assembling_then_concatenates_and_lowercases() {
    let transcript = Transcript::from_fragments(&["Hello ", "World"]).unwrap();
    assert_eq!(transcript.as_str(), "hello world");
}

#[test]
fn given_fragments_when_assembling_then_order_is_preserved() {
    let transcript = Transcript::from_fragments(&["B ", "a ", "C"]).unwrap();
    assert_eq!(transcript.as_str(), "b a c");
}

#[test]
fn given_no_fragments_when_assembling_then_returns_none() {
    let fragments: [&str; 0] = [];
    assert!(Transcript::from_fragments(&fragments).is_none());
}

#[test]
fn given_empty_fragments_when_assembling_then_returns_none() {
    assert!(Transcript::from_fragments(&["", ""]).is_none());
}

#[test]
fn given_whitespace_only_fragments_when_assembling_then_returns_none() {
    assert!(Transcript::from_fragments(&[" ", "\n"]).is_none());
}

#[test]
fn given_surrounding_whitespace_when_assembling_then_text_is_kept_as_joined() {
    let transcript = Transcript::from_fragments(&[" Hello ", "World\n"]).unwrap();
    assert_eq!(transcript.as_str(), " hello world\n");
}
