//! Whether providing data is mandatory

vocabulary! {
    pub enum DataRequirement in "data requirement" {
        Always => "always", "This information is required for the operation of our services and its collection is therefore a condition for your use of our services.";
        OptIn => "optIn", "This information is not required and you can use parts of our services without this information. You have to give your consent before we collect this data, but some features may not be available without.";
        OptOut => "optOut", "This information is not required and you can use parts of our services without this information. You may withdraw your consent for our collection of this data, but some features may not be available without.";
    }
}

impl DataRequirement {
    /// Only data that is always collected is required
    pub fn is_required(&self) -> bool {
        matches!(self, DataRequirement::Always)
    }
}

impl Default for DataRequirement {
    fn default() -> Self {
        DataRequirement::Always
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("always", true)]
    #[case("optIn", false)]
    #[case("optOut", false)]
    fn test_is_required(#[case] id: &str, #[case] required: bool) {
        let requirement: DataRequirement = id.try_into().unwrap();
        assert_eq!(requirement.is_required(), required);
    }

    #[test]
    fn test_default_is_always() {
        assert_eq!(DataRequirement::default(), DataRequirement::Always);
    }

    #[test]
    fn test_unknown_requirement() {
        assert!("sometimes".parse::<DataRequirement>().is_err());
    }
}
