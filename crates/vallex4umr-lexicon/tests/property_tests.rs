use proptest::prelude::*;
use vallex4umr_lexicon::entry::{ConsolidatedEntry, EntryMap, Provenance};
use vallex4umr_lexicon::format::{parse, render};
use vallex4umr_lexicon::identifier::{is_well_formed, UmrId};
use vallex4umr_lexicon::roles::{roles_to_propbank, UnknownFunctorPolicy, FUNCTOR_HIERARCHY};

fn constituent() -> impl Strategy<Value = String> {
    // One identifier constituent: lemma, optional homograph digit, optional
    // -NEW marker, two-digit sense.
    proptest::string::string_regex("[a-zA-Z]{1,8}[0-9]?(-NEW)?-[0-9]{2}").unwrap()
}

fn identifier() -> impl Strategy<Value = String> {
    proptest::collection::vec(constituent(), 1..=3).prop_map(|cs| cs.join("/"))
}

fn malformed_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        // No sense suffix at all.
        proptest::string::string_regex("[a-zA-Z]{1,8}").unwrap(),
        // One-digit sense.
        proptest::string::string_regex("[a-zA-Z]{1,8}-[0-9]").unwrap(),
        // Three-digit sense.
        proptest::string::string_regex("[a-zA-Z]{1,8}-[0-9]{3}").unwrap(),
        // Digit inside the lemma body.
        proptest::string::string_regex("[a-z]{1,4}[0-9][a-z]{1,4}-[0-9]{2}").unwrap(),
    ]
}

fn functor_subset() -> impl Strategy<Value = (Vec<&'static str>, Vec<&'static str>)> {
    proptest::sample::subsequence(FUNCTOR_HIERARCHY.to_vec(), 1..=FUNCTOR_HIERARCHY.len())
        .prop_flat_map(|subset| (Just(subset.clone()), Just(subset).prop_shuffle()))
}

fn list_member() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9 ().]{1,12}").unwrap()
}

fn scalar_field() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9 .#/:-]{0,20}").unwrap()
}

fn rendered_entry() -> impl Strategy<Value = ConsolidatedEntry> {
    let lists = (
        proptest::collection::vec(list_member(), 1..=3),
        proptest::collection::vec(list_member(), 1..=3),
        proptest::collection::vec(list_member(), 1..=3),
    );
    let scalars = (
        scalar_field(),
        scalar_field(),
        scalar_field(),
        scalar_field(),
        scalar_field(),
    );
    let gramm = proptest::option::of(proptest::string::string_regex("[a-z_]{1,10}").unwrap());
    (identifier(), lists, scalars, gramm, proptest::bool::ANY).prop_map(
        |(id, (locations, frames, examples), (roles, synset, definition, uri, pos), gramm, observed)| {
            let observed_lists = |xs: Vec<String>| if observed { xs } else { Vec::new() };
            ConsolidatedEntry {
                id: UmrId::parse(&id).unwrap(),
                locations: observed_lists(locations),
                v1_frames: observed_lists(frames),
                examples: observed_lists(examples),
                roles,
                lemma: String::new(),
                synset_id: synset,
                definition,
                uri,
                pos,
                gramm_info: gramm.unwrap_or_default(),
                provenance: if observed {
                    Provenance::Observed
                } else {
                    Provenance::GapFilled
                },
            }
        },
    )
}

fn entry_map() -> impl Strategy<Value = EntryMap> {
    proptest::collection::vec(rendered_entry(), 0..8)
        .prop_map(|entries| entries.into_iter().map(|e| (e.id.clone(), e)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_identifiers_are_accepted(id in identifier()) {
        prop_assert!(is_well_formed(&id));
        let parsed = UmrId::parse(&id).unwrap();
        prop_assert_eq!(parsed.as_str(), id.as_str());
    }

    #[test]
    fn uri_base_never_carries_the_new_marker(id in identifier()) {
        let parsed = UmrId::parse(&id).unwrap();
        prop_assert!(!parsed.uri_base().contains("-NEW"));
    }

    #[test]
    fn malformed_identifiers_are_rejected(id in malformed_identifier()) {
        prop_assert!(!is_well_formed(&id));
        prop_assert!(UmrId::parse(&id).is_err());
    }

    #[test]
    fn role_conversion_ignores_input_order((ordered, shuffled) in functor_subset()) {
        let a = roles_to_propbank(&ordered, UnknownFunctorPolicy::Strict).unwrap();
        let b = roles_to_propbank(&shuffled, UnknownFunctorPolicy::Strict).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn act_and_pat_keep_their_named_arguments((ordered, _) in functor_subset()) {
        let converted = roles_to_propbank(&ordered, UnknownFunctorPolicy::Strict).unwrap();
        if ordered.contains(&"ACT") {
            prop_assert!(converted.contains("ACT [ARG0]"));
        }
        if ordered.contains(&"PAT") {
            prop_assert!(converted.contains("PAT [ARG1]"));
        }
        prop_assert!(!converted.contains("[NA]"));
    }

    #[test]
    fn rendering_roundtrips_bytewise(map in entry_map()) {
        let text = render(&map);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed.len(), map.len());
        prop_assert_eq!(render(&reparsed), text);
    }
}
