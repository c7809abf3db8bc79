//! Lawful bases for processing, GDPR Art. 6(1)

use crate::error::PolicyError;

vocabulary! {
    /// Legal ground on which a group of data is processed
    pub enum DataBasis in "data basis" {
        Consent => "consent", "consent";
        Contract => "contract", "contract";
        LegalObligation => "legalObligation", "legal obligation";
        LegitimateInterests => "legitimateInterests", "legitimate interests";
        PublicInterest => "publicInterest", "public interest";
        VitalInterests => "vitalInterests", "vital interests";
    }
}

impl DataBasis {
    /// The provision of the regulation this basis rests on, as a full sentence
    pub fn legal_citation(&self) -> &'static str {
        match self {
            DataBasis::Consent => "You have given consent to the processing of your personal data for one or more specific purposes (EU, General Data Protection Regulation (GDPR), Article 6(1)(a)).",
            DataBasis::Contract => "Processing is necessary for the performance of a contract to which you are party or in order to take steps at your request prior to entering into a contract (EU, General Data Protection Regulation (GDPR), Article 6(1)(b)).",
            DataBasis::LegalObligation => "Processing is necessary for compliance with a legal obligation to which we are subject (EU, General Data Protection Regulation (GDPR), Article 6(1)(c)).",
            DataBasis::LegitimateInterests => "Processing is necessary for the purposes of legitimate interests pursued by us or by a third party (EU, General Data Protection Regulation (GDPR), Article 6(1)(f)).",
            DataBasis::PublicInterest => "Processing is necessary for the performance of a task carried out in the public interest or in the exercise of official authority vested in us (EU, General Data Protection Regulation (GDPR), Article 6(1)(e)).",
            DataBasis::VitalInterests => "Processing is necessary in order to protect your vital interests or those of another natural person (EU, General Data Protection Regulation (GDPR), Article 6(1)(d)).",
        }
    }
}

/// Legal citation for a basis identifier
pub fn legal_citation(identifier: &str) -> Result<&'static str, PolicyError> {
    Ok(identifier.parse::<DataBasis>()?.legal_citation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("consent", "consent", "6(1)(a)")]
    #[case("contract", "contract", "6(1)(b)")]
    #[case("legalObligation", "legal obligation", "6(1)(c)")]
    #[case("vitalInterests", "vital interests", "6(1)(d)")]
    #[case("publicInterest", "public interest", "6(1)(e)")]
    #[case("legitimateInterests", "legitimate interests", "6(1)(f)")]
    fn test_basis_lookups(#[case] id: &str, #[case] name: &str, #[case] article: &str) {
        assert_eq!(display_name(id).unwrap(), name);
        assert!(legal_citation(id).unwrap().contains(article));
    }

    #[test]
    fn test_unknown_basis_fails() {
        assert!(display_name("whim").is_err());
        assert!(legal_citation("").is_err());
    }

    #[test]
    fn test_all_bases() {
        assert_eq!(DataBasis::ALL.len(), 6);
        for basis in DataBasis::ALL {
            assert_eq!(basis.identifier().parse::<DataBasis>().unwrap(), *basis);
        }
    }
}
