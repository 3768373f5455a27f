//! Billing configuration (payment gateway)

use serde::Deserialize;

use super::error::ValidationError;

/// Billing configuration for the payment gateway adapter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingConfig {
    /// Gateway key id
    pub gateway_key_id: String,

    /// Gateway key secret
    pub gateway_key_secret: String,

    /// Settlement currency (ISO 4217), defaults to INR
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl BillingConfig {
    /// Check if using gateway test mode
    pub fn is_test_mode(&self) -> bool {
        self.gateway_key_id.starts_with("rzp_test_")
    }

    /// Check if using gateway live mode
    pub fn is_live_mode(&self) -> bool {
        self.gateway_key_id.starts_with("rzp_live_")
    }

    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.gateway_key_id.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY_KEY_ID"));
        }
        if self.gateway_key_secret.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY_KEY_SECRET"));
        }

        // Verify key prefix for safety
        if !self.gateway_key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidGatewayKey);
        }

        if self.currency != "INR" {
            return Err(ValidationError::UnsupportedCurrency(self.currency.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_test_mode() {
        let config = BillingConfig {
            gateway_key_id: "rzp_test_xxx".to_string(),
            gateway_key_secret: "secret".to_string(),
            currency: "INR".to_string(),
        };
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
    }

    #[test]
    fn test_is_live_mode() {
        let config = BillingConfig {
            gateway_key_id: "rzp_live_xxx".to_string(),
            gateway_key_secret: "secret".to_string(),
            currency: "INR".to_string(),
        };
        assert!(config.is_live_mode());
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_validation_missing_key_id() {
        let config = BillingConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = BillingConfig {
            gateway_key_id: "rzp_test_xxx".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_key_prefix() {
        let config = BillingConfig {
            gateway_key_id: "sk_test_xxx".to_string(),
            gateway_key_secret: "secret".to_string(),
            currency: "INR".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidGatewayKey)
        ));
    }

    #[test]
    fn test_validation_unsupported_currency() {
        let config = BillingConfig {
            gateway_key_id: "rzp_test_xxx".to_string(),
            gateway_key_secret: "secret".to_string(),
            currency: "USD".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedCurrency(_))
        ));
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = BillingConfig {
            gateway_key_id: "rzp_test_xxx".to_string(),
            gateway_key_secret: "secret".to_string(),
            currency: "INR".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
