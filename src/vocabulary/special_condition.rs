//! Conditions for processing special categories of data, GDPR Art. 9(2)

use crate::error::PolicyError;

vocabulary! {
    /// Exception under which sensitive data may be processed
    pub enum DataSpecialCondition in "data special condition" {
        ArchivingOrResearch => "archivingOrResearch", "archiving or research";
        EmploymentAndSocialSecurity => "employmentAndSocialSecurity", "employment and social security";
        ExplicitConsent => "explicitConsent", "explicit consent";
        FoundationAssociationOrNonProfit => "foundationAssociationOrNonProfit", "foundation, association or non-profit";
        HealthAndSocialCare => "healthAndSocialCare", "health and social care";
        LegalClaimsOrJudicialCapacity => "legalClaimsOrJudicialCapacity", "legal claims or judicial capacity";
        PublicData => "publicData", "public data";
        PublicHealth => "publicHealth", "public health";
        SubstantialPublicInterest => "substantialPublicInterest", "substantial public interest";
        VitalInterests => "vitalInterests", "vital interests";
    }
}

impl DataSpecialCondition {
    pub fn legal_citation(&self) -> &'static str {
        match self {
            DataSpecialCondition::ArchivingOrResearch => "Processing is necessary for archiving purposes in the public interest, scientific or historical research purposes or statistical purposes (EU, General Data Protection Regulation (GDPR), Article 9(2)(j)).",
            DataSpecialCondition::EmploymentAndSocialSecurity => "Processing is necessary for the purposes of carrying out obligations and exercising specific rights in the field of employment and social security and social protection law (EU, General Data Protection Regulation (GDPR), Article 9(2)(b)).",
            DataSpecialCondition::ExplicitConsent => "You have given explicit consent to the processing of your personal data for one or more specified purposes (EU, General Data Protection Regulation (GDPR), Article 9(2)(a)).",
            DataSpecialCondition::FoundationAssociationOrNonProfit => "Processing is carried out by a foundation, association or any other not-for-profit body with a political, philosophical, religious or trade union aim and on condition that the processing relates solely to the members or to former members of the body or to persons who have regular contact with it (EU, General Data Protection Regulation (GDPR), Article 9(2)(d)).",
            DataSpecialCondition::HealthAndSocialCare => "Processing is necessary for the purposes of preventive or occupational medicine, for the assessment of the working capacity of the employee, medical diagnosis, the provision of health or social care or treatment or the management of health or social care systems and services (EU, General Data Protection Regulation (GDPR), Article 9(2)(h)).",
            DataSpecialCondition::LegalClaimsOrJudicialCapacity => "Processing is necessary for the establishment, exercise or defence of legal claims or for a court acting in its judicial capacity (EU, General Data Protection Regulation (GDPR), Article 9(2)(f)).",
            DataSpecialCondition::PublicData => "Processing relates to personal data that you manifestly make public (EU, General Data Protection Regulation (GDPR), Article 9(2)(e)).",
            DataSpecialCondition::PublicHealth => "Processing is necessary for reasons of public interest in the area of public health, such as protecting against serious cross-border threats to health or ensuring high standards of quality and safety of health care and of medicinal products or medical devices (EU, General Data Protection Regulation (GDPR), Article 9(2)(i)).",
            DataSpecialCondition::SubstantialPublicInterest => "Processing is necessary for reasons of substantial public interest (EU, General Data Protection Regulation (GDPR), Article 9(2)(g)).",
            DataSpecialCondition::VitalInterests => "Processing is necessary to protect your vital interests or those of another natural person where you are physically or legally incapable of giving consent (EU, General Data Protection Regulation (GDPR), Article 9(2)(c)).",
        }
    }
}

pub fn legal_citation(identifier: &str) -> Result<&'static str, PolicyError> {
    Ok(identifier.parse::<DataSpecialCondition>()?.legal_citation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_condition_cites_article_nine() {
        assert_eq!(DataSpecialCondition::ALL.len(), 10);
        for condition in DataSpecialCondition::ALL {
            assert!(!condition.display_name().is_empty());
            assert!(condition.legal_citation().contains("Article 9(2)("));
        }
    }

    #[test]
    fn test_lookup_by_identifier() {
        assert_eq!(display_name("publicData").unwrap(), "public data");
        assert!(legal_citation("publicData").unwrap().contains("9(2)(e)"));
        assert!(display_name("public_data").is_err());
    }
}
