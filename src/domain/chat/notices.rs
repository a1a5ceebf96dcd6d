//! Failure classification and the notices shown for failed turns.
//!
//! The controller only sees the relay's error text, so classification is by
//! substring. The substrings are the stable prefixes of the endpoint's own
//! error strings.

use serde::{Deserialize, Serialize};

/// Class of a failed turn as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    ConfigurationMissing,
    InvalidApiKey,
    RateLimited,
    QuotaExceeded,
    AccessForbidden,
    Unknown,
}

const CONFIGURATION_MISSING_NOTICE: &str = "\
⚙️ **Configuration Required**

To enable AI assistance, please:

1. Get your OpenAI API key from https://platform.openai.com/api-keys
2. Add it to your environment variables as `OPENAI_API_KEY`
3. Restart the application

Once configured, I'll be able to provide intelligent construction assistance!";

const INVALID_API_KEY_NOTICE: &str = "\
🔑 **Invalid API Key**

The OpenAI API key appears to be invalid. Please:

1. Check your API key at https://platform.openai.com/api-keys
2. Ensure it's correctly set in your environment variables
3. Make sure the key has the necessary permissions";

const RATE_LIMITED_NOTICE: &str = "\
⏱️ **Rate Limit Exceeded**

Too many requests have been made. Please wait a moment and try again.";

const QUOTA_EXCEEDED_NOTICE: &str = "\
💳 **Quota Exceeded**

Your OpenAI usage quota has been exceeded. Please check your billing and usage limits at https://platform.openai.com/usage";

const ACCESS_FORBIDDEN_NOTICE: &str = "\
🚫 **Access Forbidden**

API access is restricted. Please check your OpenAI account status and billing at https://platform.openai.com/account";

const CONNECTIVITY_NOTICE: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again in a moment.";

/// Banner text shown while a configuration-class failure is unresolved.
pub const CONFIG_BANNER: &str =
    "Configuration needed: OpenAI API key required for AI functionality. Get your API key at https://platform.openai.com/api-keys";

/// Indicator shown while a reply is awaited.
pub const PROGRESS_INDICATOR: &str = "Analyzing your question...";

impl FailureKind {
    /// Classifies a relay error message.
    ///
    /// Checked in a fixed order; the first matching substring wins.
    pub fn classify(message: &str) -> Self {
        if message.contains("OpenAI API key not configured") {
            FailureKind::ConfigurationMissing
        } else if message.contains("Invalid OpenAI API key") {
            FailureKind::InvalidApiKey
        } else if message.contains("Rate limit") {
            FailureKind::RateLimited
        } else if message.contains("quota exceeded") {
            FailureKind::QuotaExceeded
        } else if message.contains("API access forbidden") {
            FailureKind::AccessForbidden
        } else {
            FailureKind::Unknown
        }
    }

    /// The notice appended to the log for this class.
    pub fn notice(&self) -> &'static str {
        match self {
            FailureKind::ConfigurationMissing => CONFIGURATION_MISSING_NOTICE,
            FailureKind::InvalidApiKey => INVALID_API_KEY_NOTICE,
            FailureKind::RateLimited => RATE_LIMITED_NOTICE,
            FailureKind::QuotaExceeded => QUOTA_EXCEEDED_NOTICE,
            FailureKind::AccessForbidden => ACCESS_FORBIDDEN_NOTICE,
            FailureKind::Unknown => CONNECTIVITY_NOTICE,
        }
    }

    /// Credential, billing and access failures need operator action.
    pub fn raises_config_banner(&self) -> bool {
        matches!(
            self,
            FailureKind::ConfigurationMissing
                | FailureKind::InvalidApiKey
                | FailureKind::QuotaExceeded
                | FailureKind::AccessForbidden
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_endpoint_error_strings() {
        let cases = [
            (
                "OpenAI API key not configured. Please add OPENAI_API_KEY to your environment variables.",
                FailureKind::ConfigurationMissing,
            ),
            (
                "Invalid OpenAI API key. Please check your API key configuration.",
                FailureKind::InvalidApiKey,
            ),
            (
                "Rate limit exceeded. Please try again in a moment.",
                FailureKind::RateLimited,
            ),
            (
                "OpenAI quota exceeded. Please check your billing and usage limits.",
                FailureKind::QuotaExceeded,
            ),
            (
                "API access forbidden. Please check your OpenAI account status and billing.",
                FailureKind::AccessForbidden,
            ),
            (
                "Failed to get AI response. Please try again later.",
                FailureKind::Unknown,
            ),
            ("HTTP error! status: 502", FailureKind::Unknown),
        ];

        for (message, expected) in cases {
            assert_eq!(FailureKind::classify(message), expected, "{message}");
        }
    }

    #[test]
    fn banner_only_for_configuration_classes() {
        assert!(FailureKind::ConfigurationMissing.raises_config_banner());
        assert!(FailureKind::InvalidApiKey.raises_config_banner());
        assert!(FailureKind::QuotaExceeded.raises_config_banner());
        assert!(FailureKind::AccessForbidden.raises_config_banner());
        assert!(!FailureKind::RateLimited.raises_config_banner());
        assert!(!FailureKind::Unknown.raises_config_banner());
    }

    #[test]
    fn configuration_notice_explains_setup() {
        let notice = FailureKind::ConfigurationMissing.notice();
        assert!(notice.contains("Configuration Required"));
        assert!(notice.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn unknown_failure_gets_connectivity_apology() {
        assert!(FailureKind::Unknown
            .notice()
            .starts_with("I apologize, but I'm having trouble connecting right now."));
    }
}
