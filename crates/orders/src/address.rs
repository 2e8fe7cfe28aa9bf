//! Shipping address value object.

use core::fmt;

use serde::{Deserialize, Serialize};

use orderflow_core::ValueObject;

use crate::error::{DomainError, DomainResult};

/// An immutable shipping address.
///
/// Country, province, city, street, recipient name and recipient phone must be
/// non-empty; district and postal code may be blank. The phone check is
/// deliberately simple: after stripping `-` and spaces the remainder must be
/// all digits. Changing an address means constructing a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    country: String,
    province: String,
    city: String,
    district: String,
    street: String,
    postal_code: String,
    recipient_name: String,
    recipient_phone: String,
}

impl Address {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        country: impl Into<String>,
        province: impl Into<String>,
        city: impl Into<String>,
        district: impl Into<String>,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        recipient_name: impl Into<String>,
        recipient_phone: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            country: country.into(),
            province: province.into(),
            city: city.into(),
            district: district.into(),
            street: street.into(),
            postal_code: postal_code.into(),
            recipient_name: recipient_name.into(),
            recipient_phone: recipient_phone.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> DomainResult<()> {
        let required: [(&'static str, &str); 6] = [
            ("country", &self.country),
            ("province", &self.province),
            ("city", &self.city),
            ("street", &self.street),
            ("recipient_name", &self.recipient_name),
            ("recipient_phone", &self.recipient_phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidAddressField(field));
            }
        }

        let digits: String = self
            .recipient_phone
            .chars()
            .filter(|c| *c != '-' && *c != ' ')
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhoneFormat);
        }

        Ok(())
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn recipient_phone(&self) -> &str {
        &self.recipient_phone
    }
}

impl ValueObject for Address {}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}{}{}{}",
            self.country, self.province, self.city, self.district, self.street
        )?;
        write!(
            f,
            "recipient: {} ({})",
            self.recipient_name, self.recipient_phone
        )
    }
}
