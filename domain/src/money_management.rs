//! Money form handling for the dashboard.
//!
//! Parses what the worker typed into an amount field and validates the
//! category/description next to it. The views only render the resulting
//! messages.

use shared::{MoneyFormValidation, MoneyManagementConfig, MoneyValidationError};

/// Money management service that handles all money-related form rules
#[derive(Clone, Debug)]
pub struct MoneyManagementService {
    config: MoneyManagementConfig,
}

impl MoneyManagementService {
    pub fn new() -> Self {
        Self {
            config: MoneyManagementConfig::default(),
        }
    }

    pub fn with_config(config: MoneyManagementConfig) -> Self {
        Self { config }
    }

    /// Validate an expense entry (category plus amount)
    pub fn validate_expense_form(&self, category: &str, amount_input: &str) -> MoneyFormValidation {
        let mut errors = Vec::new();
        let mut suggestions = Vec::new();

        let category_trimmed = category.trim();
        if category_trimmed.is_empty() {
            errors.push(MoneyValidationError::EmptyDescription);
            suggestions.push("Try: Fuel, Food, Repair, Phone recharge".to_string());
        } else if category_trimmed.chars().count() > self.config.max_description_length {
            errors.push(MoneyValidationError::DescriptionTooLong(category_trimmed.chars().count()));
        }

        let cleaned_amount = if amount_input.trim().is_empty() {
            errors.push(MoneyValidationError::EmptyAmount);
            suggestions.push(format!("Enter a positive amount like {}80 or 120.50", self.config.currency_symbol));
            None
        } else {
            match self.clean_and_parse_amount(amount_input) {
                Ok(amount) => {
                    if amount <= 0.0 {
                        errors.push(MoneyValidationError::AmountNotPositive);
                        suggestions.push("Amount must be greater than 0".to_string());
                        None
                    } else if amount < self.config.min_amount {
                        errors.push(MoneyValidationError::AmountTooSmall(self.config.min_amount));
                        suggestions.push(format!("Minimum amount is {}", self.format_amount(self.config.min_amount)));
                        None
                    } else if amount > self.config.max_amount {
                        errors.push(MoneyValidationError::AmountTooLarge(self.config.max_amount));
                        suggestions.push(format!("Maximum amount is {}", self.format_amount(self.config.max_amount)));
                        None
                    } else if self.has_too_many_decimal_places(amount) {
                        errors.push(MoneyValidationError::AmountPrecisionTooHigh);
                        suggestions.push("Use at most 2 decimal places (like 45.50)".to_string());
                        None
                    } else {
                        Some(amount)
                    }
                }
                Err(parse_error) => {
                    errors.push(MoneyValidationError::InvalidAmountFormat(parse_error));
                    suggestions.push("Enter a valid number like 80 or 120.50".to_string());
                    None
                }
            }
        };

        MoneyFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_amount,
            suggestions,
        }
    }

    /// Clean and parse amount input string: strips the currency symbol,
    /// commas and spaces before parsing
    pub fn clean_and_parse_amount(&self, amount_input: &str) -> Result<f64, String> {
        let cleaned = amount_input
            .trim()
            .replace(&self.config.currency_symbol, "")
            .replace("Rs.", "")
            .replace(',', "")
            .replace(' ', "");

        if cleaned.is_empty() {
            return Err("Empty amount after cleaning".to_string());
        }

        let amount = cleaned
            .parse::<f64>()
            .map_err(|e| format!("Invalid number format: {}", e))?;

        if !amount.is_finite() {
            return Err("Amount must be a finite number".to_string());
        }
        Ok(amount)
    }

    fn has_too_many_decimal_places(&self, amount: f64) -> bool {
        let cents = amount * 100.0;
        (cents - cents.round()).abs() > 1e-6
    }

    /// Format amount for display, e.g. "₹1,250" or "₹80.50"
    pub fn format_amount(&self, amount: f64) -> String {
        format_rupees(&self.config.currency_symbol, amount)
    }

    /// Get user-friendly error message for validation error
    pub fn get_error_message(&self, error: &MoneyValidationError) -> String {
        match error {
            MoneyValidationError::EmptyDescription => "Please enter what the money was spent on".to_string(),
            MoneyValidationError::DescriptionTooLong(len) => {
                format!("Description is too long ({} characters). Maximum is {}.", len, self.config.max_description_length)
            }
            MoneyValidationError::EmptyAmount => "Please enter an amount".to_string(),
            MoneyValidationError::InvalidAmountFormat(msg) => {
                format!("Please enter a valid amount (like 80 or 80.50): {}", msg)
            }
            MoneyValidationError::AmountNotPositive => "Amount must be greater than 0".to_string(),
            MoneyValidationError::AmountTooSmall(min) => {
                format!("Amount is too small. Minimum is {}", self.format_amount(*min))
            }
            MoneyValidationError::AmountTooLarge(max) => {
                format!("Amount is too large. Maximum is {}", self.format_amount(*max))
            }
            MoneyValidationError::AmountPrecisionTooHigh => {
                "Amount has too many decimal places. Use at most 2 decimal places.".to_string()
            }
        }
    }

    /// Get the first error message (for displaying single error)
    pub fn get_first_error_message(&self, errors: &[MoneyValidationError]) -> Option<String> {
        errors.first().map(|e| self.get_error_message(e))
    }

    pub fn get_config(&self) -> &MoneyManagementConfig {
        &self.config
    }
}

impl Default for MoneyManagementService {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a rupee amount with Indian digit grouping (12,45,000) and at most
/// two decimals, dropping them for whole amounts
pub fn format_rupees(symbol: &str, amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<String> = Vec::new();
        let head_chars: Vec<char> = head.chars().collect();
        let first = head_chars.len() % 2;
        if first == 1 {
            parts.push(head_chars[..1].iter().collect());
        }
        for pair in head_chars[first..].chunks(2) {
            parts.push(pair.iter().collect());
        }
        format!("{},{}", parts.join(","), tail)
    };

    if paise == 0 {
        format!("{}{}{}", sign, symbol, grouped)
    } else {
        format!("{}{}{}.{:02}", sign, symbol, grouped, paise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> MoneyManagementService {
        MoneyManagementService::new()
    }

    #[test]
    fn test_validate_expense_form_success() {
        let service = create_test_service();

        let validation = service.validate_expense_form("Fuel", "120.50");

        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
        assert_eq!(validation.cleaned_amount, Some(120.50));
        assert!(validation.suggestions.is_empty());
    }

    #[test]
    fn test_validate_expense_form_empty_category() {
        let service = create_test_service();

        let validation = service.validate_expense_form("   ", "80");

        assert!(!validation.is_valid);
        assert!(matches!(validation.errors[0], MoneyValidationError::EmptyDescription));
        assert!(!validation.suggestions.is_empty());
    }

    #[test]
    fn test_validate_expense_form_invalid_amount() {
        let service = create_test_service();

        let validation = service.validate_expense_form("Food", "eighty");

        assert!(!validation.is_valid);
        assert!(matches!(validation.errors[0], MoneyValidationError::InvalidAmountFormat(_)));
        assert_eq!(validation.cleaned_amount, None);
    }

    #[test]
    fn test_validate_expense_form_negative_amount() {
        let service = create_test_service();

        let validation = service.validate_expense_form("Food", "-80");

        assert!(!validation.is_valid);
        assert!(matches!(validation.errors[0], MoneyValidationError::AmountNotPositive));
    }

    #[test]
    fn test_validate_expense_form_limits() {
        let service = create_test_service();

        let too_small = service.validate_expense_form("Tea", "0.50");
        assert!(matches!(too_small.errors[0], MoneyValidationError::AmountTooSmall(_)));

        let too_large = service.validate_expense_form("Bike", "250000");
        assert!(matches!(too_large.errors[0], MoneyValidationError::AmountTooLarge(_)));

        let too_precise = service.validate_expense_form("Tea", "12.345");
        assert!(matches!(too_precise.errors[0], MoneyValidationError::AmountPrecisionTooHigh));
    }

    #[test]
    fn test_clean_and_parse_amount() {
        let service = create_test_service();

        assert_eq!(service.clean_and_parse_amount("80").unwrap(), 80.0);
        assert_eq!(service.clean_and_parse_amount("₹80.50").unwrap(), 80.50);
        assert_eq!(service.clean_and_parse_amount(" ₹1,250 ").unwrap(), 1250.0);
        assert_eq!(service.clean_and_parse_amount("Rs. 99").unwrap(), 99.0);

        assert!(service.clean_and_parse_amount("abc").is_err());
        assert!(service.clean_and_parse_amount("₹").is_err());
        assert!(service.clean_and_parse_amount("inf").is_err());
    }

    #[test]
    fn test_format_amount_uses_indian_grouping() {
        assert_eq!(format_rupees("₹", 80.0), "₹80");
        assert_eq!(format_rupees("₹", 4250.0), "₹4,250");
        assert_eq!(format_rupees("₹", 12450.0), "₹12,450");
        assert_eq!(format_rupees("₹", 1234567.0), "₹12,34,567");
        assert_eq!(format_rupees("₹", 80.5), "₹80.50");
        assert_eq!(format_rupees("₹", -150.0), "-₹150");
    }

    #[test]
    fn test_error_messages() {
        let service = create_test_service();

        let error = MoneyValidationError::EmptyAmount;
        assert_eq!(service.get_error_message(&error), "Please enter an amount");

        let error = MoneyValidationError::AmountTooSmall(1.0);
        assert_eq!(service.get_error_message(&error), "Amount is too small. Minimum is ₹1");

        assert_eq!(service.get_first_error_message(&[]), None);
    }
}
