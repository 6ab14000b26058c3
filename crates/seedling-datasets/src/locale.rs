//! Locale word tables.

use serde::Deserialize;

use seedling_core::error::RandomizerError;

const ENGLISH: &str = include_str!("../data/en.json");

/// A currency entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Currency {
    /// Human-readable name, e.g. "US Dollar".
    pub description: String,
    /// ISO 4217 code.
    pub code: String,
    /// Display symbol; may be empty.
    pub symbol: String,
}

/// Commerce tables.
#[derive(Debug, Clone, Deserialize)]
pub struct CommerceTables {
    pub department: Vec<String>,
    pub product_adjective: Vec<String>,
    pub product_material: Vec<String>,
    pub product: Vec<String>,
    pub color: Vec<String>,
}

/// Company tables.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyTables {
    pub catch_phrase_adjective: Vec<String>,
    pub catch_phrase_descriptor: Vec<String>,
    pub catch_phrase_noun: Vec<String>,
    pub bs_adjective: Vec<String>,
    pub bs_buzz: Vec<String>,
    pub bs_noun: Vec<String>,
}

/// Address tables.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressTables {
    pub street_suffix: Vec<String>,
    pub county: Vec<String>,
    pub country: Vec<String>,
    pub state: Vec<String>,
}

/// Finance tables.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceTables {
    pub account_type: Vec<String>,
    pub transaction_type: Vec<String>,
    pub currency: Vec<Currency>,
}

/// Hacker-speak tables.
#[derive(Debug, Clone, Deserialize)]
pub struct HackerTables {
    pub abbreviation: Vec<String>,
    pub adjective: Vec<String>,
    pub noun: Vec<String>,
    pub verb: Vec<String>,
    pub ing_verb: Vec<String>,
}

/// Job title tables.
#[derive(Debug, Clone, Deserialize)]
pub struct NameTables {
    pub job_descriptor: Vec<String>,
    pub job_area: Vec<String>,
    pub job_type: Vec<String>,
}

/// Every table a locale provides.
///
/// A `Locale` only exists once every table has been checked non-empty, so
/// the fields are read through accessors and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LocaleData")]
pub struct Locale {
    commerce: CommerceTables,
    company: CompanyTables,
    address: AddressTables,
    finance: FinanceTables,
    hacker: HackerTables,
    name: NameTables,
}

#[derive(Deserialize)]
struct LocaleData {
    commerce: CommerceTables,
    company: CompanyTables,
    address: AddressTables,
    finance: FinanceTables,
    hacker: HackerTables,
    name: NameTables,
}

impl TryFrom<LocaleData> for Locale {
    type Error = RandomizerError;

    fn try_from(data: LocaleData) -> Result<Self, Self::Error> {
        let locale = Self {
            commerce: data.commerce,
            company: data.company,
            address: data.address,
            finance: data.finance,
            hacker: data.hacker,
            name: data.name,
        };
        if let Some((table, _)) = locale.table_sizes().into_iter().find(|(_, len)| *len == 0) {
            return Err(RandomizerError::Dataset(format!("table {table} is empty")));
        }
        Ok(locale)
    }
}

impl Locale {
    /// Load the embedded English tables.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::Dataset` if the embedded data is malformed
    /// or contains an empty table.
    pub fn english() -> Result<Self, RandomizerError> {
        Self::from_json(ENGLISH)
    }

    /// Parse a locale from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::Dataset` if `text` does not parse or any
    /// table is empty.
    pub fn from_json(text: &str) -> Result<Self, RandomizerError> {
        let data: LocaleData = serde_json::from_str(text)
            .map_err(|e| RandomizerError::Dataset(format!("locale parse failed: {e}")))?;
        let locale = Self::try_from(data)?;
        tracing::debug!(tables = locale.table_sizes().len(), "locale loaded");
        Ok(locale)
    }

    /// Commerce tables.
    #[must_use]
    pub fn commerce(&self) -> &CommerceTables {
        &self.commerce
    }

    /// Company tables.
    #[must_use]
    pub fn company(&self) -> &CompanyTables {
        &self.company
    }

    /// Address tables.
    #[must_use]
    pub fn address(&self) -> &AddressTables {
        &self.address
    }

    /// Finance tables.
    #[must_use]
    pub fn finance(&self) -> &FinanceTables {
        &self.finance
    }

    /// Hacker-speak tables.
    #[must_use]
    pub fn hacker(&self) -> &HackerTables {
        &self.hacker
    }

    /// Job title tables.
    #[must_use]
    pub fn name(&self) -> &NameTables {
        &self.name
    }

    fn table_sizes(&self) -> [(&'static str, usize); 26] {
        [
            ("commerce.department", self.commerce.department.len()),
            ("commerce.product_adjective", self.commerce.product_adjective.len()),
            ("commerce.product_material", self.commerce.product_material.len()),
            ("commerce.product", self.commerce.product.len()),
            ("commerce.color", self.commerce.color.len()),
            ("company.catch_phrase_adjective", self.company.catch_phrase_adjective.len()),
            ("company.catch_phrase_descriptor", self.company.catch_phrase_descriptor.len()),
            ("company.catch_phrase_noun", self.company.catch_phrase_noun.len()),
            ("company.bs_adjective", self.company.bs_adjective.len()),
            ("company.bs_buzz", self.company.bs_buzz.len()),
            ("company.bs_noun", self.company.bs_noun.len()),
            ("address.street_suffix", self.address.street_suffix.len()),
            ("address.county", self.address.county.len()),
            ("address.country", self.address.country.len()),
            ("address.state", self.address.state.len()),
            ("finance.account_type", self.finance.account_type.len()),
            ("finance.transaction_type", self.finance.transaction_type.len()),
            ("finance.currency", self.finance.currency.len()),
            ("hacker.abbreviation", self.hacker.abbreviation.len()),
            ("hacker.adjective", self.hacker.adjective.len()),
            ("hacker.noun", self.hacker.noun.len()),
            ("hacker.verb", self.hacker.verb.len()),
            ("hacker.ing_verb", self.hacker.ing_verb.len()),
            ("name.job_descriptor", self.name.job_descriptor.len()),
            ("name.job_area", self.name.job_area.len()),
            ("name.job_type", self.name.job_type.len()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_tables_load() {
        let locale = Locale::english().unwrap();

        assert!(locale.commerce().department.contains(&"Books".to_owned()));
        assert_eq!(locale.finance().currency[0].code, "USD");
    }

    #[test]
    fn test_malformed_json_is_a_dataset_error() {
        assert!(matches!(
            Locale::from_json("{ not json"),
            Err(RandomizerError::Dataset(_))
        ));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(ENGLISH).unwrap();
        value["address"]["county"] = serde_json::json!([]);

        match Locale::from_json(&value.to_string()) {
            Err(RandomizerError::Dataset(msg)) => assert_eq!(msg, "table address.county is empty"),
            other => panic!("expected Dataset error, got {other:?}"),
        }
    }

    #[test]
    fn test_direct_deserialize_rejects_empty_table() {
        let mut value: serde_json::Value = serde_json::from_str(ENGLISH).unwrap();
        value["commerce"]["department"] = serde_json::json!([]);

        let err = serde_json::from_value::<Locale>(value).unwrap_err();
        assert_eq!(err.to_string(), "dataset error: table commerce.department is empty");
    }
}
