use vallex4umr_lexicon::entry::{ConsolidatedEntry, EntryMap, Provenance};
use vallex4umr_lexicon::format::{parse, render, FormatParseError};
use vallex4umr_lexicon::identifier::UmrId;

fn entry(id: &str) -> ConsolidatedEntry {
    ConsolidatedEntry {
        id: UmrId::parse(id).unwrap(),
        locations: vec!["3.2 (par.3)".to_string()],
        v1_frames: vec!["impero-1".to_string()],
        examples: vec!["imperat patriae".to_string()],
        roles: "ACT [ARG0], PAT [ARG1]".to_string(),
        lemma: String::new(),
        synset_id: "v#00746718".to_string(),
        definition: "issue commands or orders".to_string(),
        uri: "http://lila-erc.eu/data/id/lemma/106235".to_string(),
        pos: "VERB".to_string(),
        gramm_info: String::new(),
        provenance: Provenance::Observed,
    }
}

fn map_of(entries: Vec<ConsolidatedEntry>) -> EntryMap {
    entries.into_iter().map(|e| (e.id.clone(), e)).collect()
}

#[test]
fn block_layout_is_exact() {
    let text = render(&map_of(vec![entry("impero-01")]));
    assert_eq!(
        text,
        concat!(
            "* IMPERO\n",
            " : id: impero-01\n",
            " + ACT [ARG0], PAT [ARG1]\n",
            " : synset id: v#00746718\n",
            " : synset definition: issue commands or orders\n",
            " : lemma URI: http://lila-erc.eu/data/id/lemma/106235\n",
            " \t-POS: VERB\n",
            " \t-Vallex1_id: impero-1\n",
            " \t-example: imperat patriae\n",
            " \t-LDT_ids: 3.2 (par.3)\n",
        )
    );
}

#[test]
fn full_dictionary_roundtrips() {
    let mut with_gramm = entry("volo1-02");
    with_gramm.gramm_info = "only_act".to_string();
    with_gramm.locations.push("9.1 (par.9)".to_string());

    let mut gap_filled = entry("gloria-01");
    gap_filled.locations.clear();
    gap_filled.v1_frames.clear();
    gap_filled.examples.clear();
    gap_filled.provenance = Provenance::GapFilled;

    let map = map_of(vec![
        entry("impero-01"),
        with_gramm,
        entry("polliceor-01/polliceor-02"),
        gap_filled,
    ]);

    let text = render(&map);
    let reparsed = parse(&text).unwrap();
    assert_eq!(reparsed.len(), 4);
    assert_eq!(render(&reparsed), text);

    let merged = &reparsed[&UmrId::parse("polliceor-01/polliceor-02").unwrap()];
    assert_eq!(merged.provenance, Provenance::Observed);
    let gap = &reparsed[&UmrId::parse("gloria-01").unwrap()];
    assert_eq!(gap.provenance, Provenance::GapFilled);
    assert!(gap.locations.is_empty());
}

#[test]
fn merged_identifier_header_uses_first_constituent() {
    let text = render(&map_of(vec![entry("polliceor-01/polliceor-02")]));
    assert!(text.starts_with("* POLLICEOR\n"));
    assert!(text.contains(" : id: polliceor-01/polliceor-02\n"));
}

#[test]
fn numbered_lemma_keeps_digit_in_header() {
    let text = render(&map_of(vec![entry("volo1-02")]));
    assert!(text.starts_with("* VOLO1\n"));
}

#[test]
fn parse_error_carries_one_based_line_number() {
    let good = render(&map_of(vec![entry("impero-01")]));
    let broken = good.replace(" : synset id: ", " # synset id: ");
    match parse(&broken).unwrap_err() {
        FormatParseError::Line { line, message } => {
            assert_eq!(line, 4);
            assert!(message.contains(": synset id:"), "message was: {message}");
        }
    }
}

#[test]
fn truncated_block_is_rejected() {
    let err = parse("* IMPERO\n : id: impero-01\n").unwrap_err();
    assert!(err.to_string().contains("line 3"));
}
