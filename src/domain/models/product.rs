use serde::{Deserialize, Serialize};

/// One of the three product form fields.
///
/// Validation failures are reported per field so the UI can attach each
/// message to the input it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Category,
    Keywords,
}

impl ProfileField {
    /// All fields in form order.
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Name,
        ProfileField::Category,
        ProfileField::Keywords,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Product name",
            ProfileField::Category => "Category",
            ProfileField::Keywords => "Keywords (comma-separated)",
        }
    }

    /// Message shown next to the field when it is left empty.
    pub fn required_message(&self) -> &'static str {
        match self {
            ProfileField::Name => "Enter a product name",
            ProfileField::Category => "Enter a category",
            ProfileField::Keywords => "Enter keywords",
        }
    }
}

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: ProfileField,
    message: &'static str,
}

impl ValidationError {
    pub fn required(field: ProfileField) -> Self {
        Self {
            field,
            message: field.required_message(),
        }
    }

    pub fn field(&self) -> ProfileField {
        self.field
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// The user-supplied description of a product to analyze.
///
/// All three fields are non-empty: the only way to construct a profile is
/// [`ProductProfile::validate`], which rejects missing fields. Field values
/// are kept verbatim and serialize unchanged to the `/analyze` wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductProfile {
    name: String,
    category: String,
    keywords: String,
}

impl ProductProfile {
    /// Validate raw form input.
    ///
    /// Returns one [`ValidationError`] per empty field (whitespace-only
    /// counts as empty), or the assembled profile when all fields pass.
    pub fn validate(
        name: &str,
        category: &str,
        keywords: &str,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if name.trim().is_empty() {
            errors.push(ValidationError::required(ProfileField::Name));
        }
        if category.trim().is_empty() {
            errors.push(ValidationError::required(ProfileField::Category));
        }
        if keywords.trim().is_empty() {
            errors.push(ValidationError::required(ProfileField::Keywords));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            keywords: keywords.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile_keeps_values_verbatim() {
        let profile = ProductProfile::validate("Trail Shoes", "Sportswear", "running, trail")
            .expect("profile should validate");

        assert_eq!(profile.name(), "Trail Shoes");
        assert_eq!(profile.category(), "Sportswear");
        assert_eq!(profile.keywords(), "running, trail");
    }

    #[test]
    fn test_empty_name_reports_name_message() {
        let errors = ProductProfile::validate("", "Sportswear", "running")
            .expect_err("empty name should fail");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), ProfileField::Name);
        assert_eq!(errors[0].message(), "Enter a product name");
    }

    #[test]
    fn test_empty_category_reports_category_message() {
        let errors = ProductProfile::validate("Trail Shoes", "", "running")
            .expect_err("empty category should fail");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), ProfileField::Category);
        assert_eq!(errors[0].message(), "Enter a category");
    }

    #[test]
    fn test_empty_keywords_reports_keywords_message() {
        let errors = ProductProfile::validate("Trail Shoes", "Sportswear", "")
            .expect_err("empty keywords should fail");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), ProfileField::Keywords);
        assert_eq!(errors[0].message(), "Enter keywords");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = ProductProfile::validate("   ", "\t", " ")
            .expect_err("whitespace-only fields should fail");

        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_profile_serializes_to_wire_field_names() {
        let profile = ProductProfile::validate("Trail Shoes", "Sportswear", "running, trail")
            .expect("profile should validate");

        let value = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Trail Shoes",
                "category": "Sportswear",
                "keywords": "running, trail",
            })
        );
    }
}
