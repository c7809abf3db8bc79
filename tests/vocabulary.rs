//! Vocabulary lookups through the public API and their translations

use privacy_policy::vocabulary::{basis, data_type, purpose, requirement, special_condition};
use privacy_policy::{
    DataBasis, DataPurpose, DataRequirement, DataSpecialCondition, DataType, Language,
    PolicyError, Translator,
};
use rstest::rstest;

fn german() -> Translator {
    Translator::new(Language::German).with_strict(true)
}

#[rstest]
#[case("access.ip.address", "Internet Protocol (IP) address for each access")]
#[case("user.email", "Email address")]
#[case("user.name.alias", "Alias or username")]
fn test_data_type_display_names(#[case] identifier: &str, #[case] expected: &str) {
    assert_eq!(data_type::display_name(identifier).unwrap(), expected);
}

#[rstest]
#[case("administration")]
#[case("customer_support")]
fn test_purpose_identifiers_are_accepted(#[case] identifier: &str) {
    let purpose: DataPurpose = identifier.parse().unwrap();
    assert_eq!(purpose.identifier(), identifier);
    assert_eq!(purpose::display_name(identifier).unwrap(), purpose.display_name());
}

#[rstest]
#[case::basis(basis::display_name("legitimate_interests"), "data basis")]
#[case::purpose(purpose::display_name("Administration"), "data purpose")]
#[case::requirement(requirement::display_name("sometimes"), "data requirement")]
#[case::data_type(data_type::display_name("access.mood"), "data type")]
fn test_unknown_identifiers_fail(
    #[case] result: Result<&'static str, PolicyError>,
    #[case] vocabulary: &str,
) {
    match result {
        Err(PolicyError::UnrecognizedIdentifier { vocabulary: name, .. }) => {
            assert_eq!(name, vocabulary)
        }
        other => panic!("expected an unrecognized identifier, got {:?}", other),
    }
}

#[test]
fn test_legal_citations_by_identifier() {
    assert!(basis::legal_citation("consent").unwrap().ends_with("Article 6(1)(a))."));
    assert!(special_condition::legal_citation("explicitConsent")
        .unwrap()
        .ends_with("Article 9(2)(a))."));
    assert!(basis::legal_citation("explicitConsent").is_err());
}

#[test]
fn test_display_names_render_literal_percent() {
    let english = Translator::new(Language::English).with_strict(true);
    let name = english
        .text(DataType::AccessIpAddress25Percent.display_name())
        .unwrap();
    assert_eq!(
        name,
        "Internet Protocol (IP) address for each access (reduced to 25% precision)"
    );
}

#[test]
fn test_german_covers_every_display_name() {
    let translator = german();
    let names = DataType::ALL
        .iter()
        .map(|t| t.display_name())
        .chain(DataBasis::ALL.iter().map(|b| b.display_name()))
        .chain(DataSpecialCondition::ALL.iter().map(|c| c.display_name()))
        .chain(DataPurpose::ALL.iter().map(|p| p.display_name()))
        .chain(DataRequirement::ALL.iter().map(|r| r.display_name()));

    for name in names {
        assert!(translator.text(name).is_ok(), "no German translation for {:?}", name);
    }
}

#[test]
fn test_german_covers_every_citation() {
    let translator = german();
    let citations = DataBasis::ALL
        .iter()
        .map(|b| b.legal_citation())
        .chain(DataSpecialCondition::ALL.iter().map(|c| c.legal_citation()));

    for citation in citations {
        let translated = translator.text(citation).unwrap();
        assert!(translated.contains("DSGVO"), "{}", translated);
    }
}
