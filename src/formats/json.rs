//! JSON format

use crate::error::PolicyError;
use crate::format::{Format, RenderOptions};
use crate::machine::MachinePolicy;
use crate::policy::PrivacyPolicy;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Machine-readable JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn render(&self, policy: &PrivacyPolicy, options: &RenderOptions) -> Result<String, PolicyError> {
        debug!(minified = options.minified, "Rendering policy as JSON");
        MachinePolicy::new(policy)
            .with_minified(options.minified)
            .to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minified_option() {
        let policy = PrivacyPolicy::new();
        let pretty = JsonFormat.render(&policy, &RenderOptions::default()).unwrap();
        let minified = JsonFormat
            .render(&policy, &RenderOptions::default().with_minified(true))
            .unwrap();
        assert!(pretty.contains('\n'));
        assert!(!minified.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap(),
            serde_json::from_str::<serde_json::Value>(&minified).unwrap()
        );
    }
}
