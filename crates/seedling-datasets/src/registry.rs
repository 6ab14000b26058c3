//! Standard word registry wiring.

use std::sync::Arc;

use seedling_core::error::RandomizerError;
use seedling_randomizer::{Randomizer, WordComposer, WordRegistry};

use crate::categories::{Address, Commerce, Company, Finance, Hacker, Name};
use crate::locale::Locale;

/// The category generators for one locale, sharing one randomizer.
#[derive(Debug, Clone)]
pub struct Datasets {
    randomizer: Randomizer,
    pub commerce: Arc<Commerce>,
    pub company: Arc<Company>,
    pub address: Arc<Address>,
    pub finance: Arc<Finance>,
    pub hacker: Arc<Hacker>,
    pub name: Arc<Name>,
}

fn bind<C>(category: &Arc<C>, op: fn(&C) -> String) -> impl Fn() -> String + Send + Sync + use<C>
where
    C: Send + Sync + 'static,
{
    let category = Arc::clone(category);
    move || op(&category)
}

impl Datasets {
    /// Build every generator over `locale`.
    #[must_use]
    pub fn new(randomizer: Randomizer, locale: Arc<Locale>) -> Self {
        Self {
            commerce: Arc::new(Commerce::new(randomizer.clone(), Arc::clone(&locale))),
            company: Arc::new(Company::new(randomizer.clone(), Arc::clone(&locale))),
            address: Arc::new(Address::new(randomizer.clone(), Arc::clone(&locale))),
            finance: Arc::new(Finance::new(randomizer.clone(), Arc::clone(&locale))),
            hacker: Arc::new(Hacker::new(randomizer.clone(), Arc::clone(&locale))),
            name: Arc::new(Name::new(randomizer.clone(), locale)),
            randomizer,
        }
    }

    /// Build every generator over the embedded English tables.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::Dataset` if the embedded tables fail to load.
    pub fn english(randomizer: Randomizer) -> Result<Self, RandomizerError> {
        Ok(Self::new(randomizer, Arc::new(Locale::english()?)))
    }

    /// The standard registry: 28 entries, with product name and street
    /// suffix each registered twice.
    ///
    /// # Errors
    ///
    /// Propagates `WordRegistryBuilder::build` errors; the standard registry
    /// is never empty.
    pub fn word_registry(&self) -> Result<WordRegistry, RandomizerError> {
        WordRegistry::builder()
            .register("commerce.department", bind(&self.commerce, Commerce::department))
            .register("commerce.product_name", bind(&self.commerce, Commerce::product_name))
            .register(
                "commerce.product_adjective",
                bind(&self.commerce, Commerce::product_adjective),
            )
            .register(
                "commerce.product_material",
                bind(&self.commerce, Commerce::product_material),
            )
            .register("commerce.product_name", bind(&self.commerce, Commerce::product_name))
            .register("commerce.color", bind(&self.commerce, Commerce::color))
            .register(
                "company.catch_phrase_adjective",
                bind(&self.company, Company::catch_phrase_adjective),
            )
            .register(
                "company.catch_phrase_descriptor",
                bind(&self.company, Company::catch_phrase_descriptor),
            )
            .register(
                "company.catch_phrase_noun",
                bind(&self.company, Company::catch_phrase_noun),
            )
            .register("company.bs_adjective", bind(&self.company, Company::bs_adjective))
            .register("company.bs_buzz", bind(&self.company, Company::bs_buzz))
            .register("company.bs_noun", bind(&self.company, Company::bs_noun))
            .register("address.street_suffix", bind(&self.address, Address::street_suffix))
            .register("address.county", bind(&self.address, Address::county))
            .register("address.country", bind(&self.address, Address::country))
            .register("address.state", bind(&self.address, Address::state))
            .register("address.street_suffix", bind(&self.address, Address::street_suffix))
            .register("finance.account_name", bind(&self.finance, Finance::account_name))
            .register(
                "finance.transaction_type",
                bind(&self.finance, Finance::transaction_type),
            )
            .register(
                "finance.currency",
                bind(&self.finance, |finance: &Finance| finance.currency().description),
            )
            .register("hacker.noun", bind(&self.hacker, Hacker::noun))
            .register("hacker.verb", bind(&self.hacker, Hacker::verb))
            .register("hacker.adjective", bind(&self.hacker, Hacker::adjective))
            .register("hacker.ing_verb", bind(&self.hacker, Hacker::ing_verb))
            .register("hacker.abbreviation", bind(&self.hacker, Hacker::abbreviation))
            .register("name.job_descriptor", bind(&self.name, Name::job_descriptor))
            .register("name.job_area", bind(&self.name, Name::job_area))
            .register("name.job_type", bind(&self.name, Name::job_type))
            .build()
    }

    /// A word composer over the standard registry.
    ///
    /// # Errors
    ///
    /// Same as [`Datasets::word_registry`].
    pub fn word_composer(&self) -> Result<WordComposer, RandomizerError> {
        Ok(WordComposer::new(
            self.randomizer.clone(),
            Arc::new(self.word_registry()?),
        ))
    }
}
