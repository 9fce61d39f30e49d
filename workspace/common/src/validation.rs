//! Form checks run before any marketplace action is invoked.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::client::{AssetDraft, BidDraft, CampaignDraft, DaoDraft, ProposalDraft};
use crate::error::{MarketError, Result};

pub const BID_TOO_LOW: &str = "Your bid must be higher than the current bid.";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Username and email are required"))]
    pub username: String,
    #[validate(
        length(min = 1, message = "Username and email are required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
    pub mobile: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub identifier: String,
}

/// A validated input form. Text fields are trimmed before the checks run.
pub trait FormInput: Validate + Sized {
    /// Field names in the order their messages should be reported.
    const FIELDS: &'static [&'static str];

    fn trimmed(self) -> Self;

    fn validated(self) -> Result<Self> {
        let form = self.trimmed();
        form.validate()
            .map_err(|errors| first_error(&errors, Self::FIELDS))?;
        Ok(form)
    }
}

fn first_error(errors: &ValidationErrors, fields: &[&str]) -> MarketError {
    let field_errors = errors.field_errors();
    let message = fields
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|list| list.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string());
    MarketError::Validation(message)
}

fn trim(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl FormInput for RegisterForm {
    const FIELDS: &'static [&'static str] = &["username", "email"];

    fn trimmed(self) -> Self {
        Self {
            username: trim(self.username),
            email: trim(self.email),
            mobile: self.mobile.map(trim).filter(|m| !m.is_empty()),
            avatar_url: self.avatar_url.map(trim).filter(|a| !a.is_empty()),
        }
    }
}

impl FormInput for LoginForm {
    const FIELDS: &'static [&'static str] = &["identifier"];

    fn trimmed(self) -> Self {
        Self {
            identifier: trim(self.identifier),
        }
    }
}

impl FormInput for ContactForm {
    const FIELDS: &'static [&'static str] = &["name", "email", "message"];

    fn trimmed(self) -> Self {
        Self {
            name: trim(self.name),
            email: trim(self.email),
            subject: trim(self.subject),
            message: trim(self.message),
        }
    }
}

impl FormInput for AssetDraft {
    const FIELDS: &'static [&'static str] = &["name", "description"];

    fn trimmed(self) -> Self {
        Self {
            name: trim(self.name),
            description: trim(self.description),
            ..self
        }
    }
}

impl FormInput for BidDraft {
    const FIELDS: &'static [&'static str] = &["title", "description", "asset_id"];

    fn trimmed(self) -> Self {
        Self {
            title: trim(self.title),
            description: trim(self.description),
            ..self
        }
    }
}

impl FormInput for CampaignDraft {
    const FIELDS: &'static [&'static str] = &["title", "description"];

    fn trimmed(self) -> Self {
        Self {
            title: trim(self.title),
            description: trim(self.description),
            ..self
        }
    }
}

impl FormInput for DaoDraft {
    const FIELDS: &'static [&'static str] = &["name", "description"];

    fn trimmed(self) -> Self {
        Self {
            name: trim(self.name),
            description: trim(self.description),
            ..self
        }
    }
}

impl FormInput for ProposalDraft {
    const FIELDS: &'static [&'static str] = &["title", "description", "dao_id"];

    fn trimmed(self) -> Self {
        Self {
            title: trim(self.title),
            description: trim(self.description),
            ..self
        }
    }
}

/// Parses an amount typed into a form. Must be a positive decimal.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        return Err(MarketError::Validation("Please enter an amount".to_string()));
    }
    let amount = Decimal::from_str(input)
        .map_err(|_| MarketError::Validation("Please enter a valid amount".to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(MarketError::Validation(
            "Amount must be greater than zero".to_string(),
        ));
    }
    Ok(amount)
}

/// A new bid must strictly exceed the current price.
pub fn bid_amount(input: &str, current_price: Decimal) -> Result<Decimal> {
    let amount = parse_amount(input)?;
    if amount <= current_price {
        return Err(MarketError::Validation(BID_TOO_LOW.to_string()));
    }
    Ok(amount)
}

pub fn funding_amount(input: &str) -> Result<Decimal> {
    parse_amount(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProposalType;

    fn message(result: Result<impl std::fmt::Debug>) -> String {
        match result.unwrap_err() {
            MarketError::Validation(message) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_register_requires_both_fields() {
        let form = RegisterForm {
            username: "  ".to_string(),
            email: "alice@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(message(form.validated()), "Username and email are required");
    }

    #[test]
    fn test_register_rejects_malformed_email() {
        let form = RegisterForm {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert_eq!(message(form.validated()), "Please enter a valid email address");
    }

    #[test]
    fn test_register_trims_and_drops_empty_optionals() {
        let form = RegisterForm {
            username: " alice ".to_string(),
            email: "alice@example.com".to_string(),
            mobile: Some("   ".to_string()),
            avatar_url: None,
        }
        .validated()
        .unwrap();
        assert_eq!(form.username, "alice");
        assert_eq!(form.mobile, None);
    }

    #[test]
    fn test_login_requires_identifier() {
        assert_eq!(
            message(LoginForm::default().validated()),
            "Email or username is required"
        );
        assert!(
            LoginForm {
                identifier: "admin".to_string()
            }
            .validated()
            .is_ok()
        );
    }

    #[test]
    fn test_contact_reports_fields_in_order() {
        let form = ContactForm {
            email: "bad".to_string(),
            ..Default::default()
        };
        assert_eq!(message(form.validated()), "Name is required");

        let form = ContactForm {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            subject: String::new(),
            message: " Hello ".to_string(),
        }
        .validated()
        .unwrap();
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn test_drafts_require_title_and_description() {
        let draft = CampaignDraft {
            title: "Solar".to_string(),
            ..Default::default()
        };
        assert_eq!(message(draft.validated()), "Description is required");

        let draft = DaoDraft {
            description: "Pooled funds".to_string(),
            ..Default::default()
        };
        assert_eq!(message(draft.validated()), "DAO name is required");

        let draft = ProposalDraft {
            title: "Buy land".to_string(),
            description: "Metaverse HQ".to_string(),
            proposal_type: ProposalType::AssetPurchase,
            dao_id: String::new(),
            proposer_id: "user-1".to_string(),
            amount: None,
            currency: None,
        };
        assert_eq!(message(draft.validated()), "Select a DAO");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 ").unwrap(), Decimal::new(125, 1));
        assert_eq!(message(parse_amount("")), "Please enter an amount");
        assert_eq!(message(parse_amount("abc")), "Please enter a valid amount");
        assert_eq!(message(parse_amount("0")), "Amount must be greater than zero");
        assert_eq!(message(parse_amount("-3")), "Amount must be greater than zero");
    }

    #[test]
    fn test_bid_must_exceed_current_price() {
        let current = Decimal::from(47_500);
        assert_eq!(message(bid_amount("47500", current)), BID_TOO_LOW);
        assert_eq!(message(bid_amount("100", current)), BID_TOO_LOW);
        assert_eq!(bid_amount("47500.01", current).unwrap(), Decimal::new(4_750_001, 2));
    }

    #[test]
    fn test_funding_amount_positive() {
        assert!(funding_amount("1").is_ok());
        assert!(funding_amount("0.0").is_err());
    }
}
