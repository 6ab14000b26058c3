//! Category generators.
//!
//! Each generator shares the process randomizer and a locale; every method is
//! one or more element draws over its tables.

use std::sync::Arc;

use seedling_randomizer::Randomizer;

use crate::locale::{Currency, Locale};

// A `Locale` cannot be built with an empty table, so the fallback is
// unreachable.
fn pick(randomizer: &Randomizer, table: &[String]) -> String {
    randomizer
        .element(table)
        .map_or_else(|_| String::new(), Clone::clone)
}

macro_rules! category {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            randomizer: Randomizer,
            locale: Arc<Locale>,
        }

        impl $name {
            /// Create a generator drawing through `randomizer`.
            #[must_use]
            pub fn new(randomizer: Randomizer, locale: Arc<Locale>) -> Self {
                Self { randomizer, locale }
            }
        }
    };
}

category!(
    /// Shop departments, products and colours.
    Commerce
);
category!(
    /// Catch phrases and business-speak.
    Company
);
category!(
    /// Address fragments.
    Address
);
category!(
    /// Accounts, transactions and currencies.
    Finance
);
category!(
    /// Technical jargon.
    Hacker
);
category!(
    /// Job titles.
    Name
);

impl Commerce {
    /// A shop department.
    #[must_use]
    pub fn department(&self) -> String {
        pick(&self.randomizer, &self.locale.commerce().department)
    }

    /// Adjective, material and product, space separated, drawn in that order.
    #[must_use]
    pub fn product_name(&self) -> String {
        format!(
            "{} {} {}",
            self.product_adjective(),
            self.product_material(),
            self.product()
        )
    }

    /// A product noun.
    #[must_use]
    pub fn product(&self) -> String {
        pick(&self.randomizer, &self.locale.commerce().product)
    }

    /// An adjective for a product.
    #[must_use]
    pub fn product_adjective(&self) -> String {
        pick(&self.randomizer, &self.locale.commerce().product_adjective)
    }

    /// A product material.
    #[must_use]
    pub fn product_material(&self) -> String {
        pick(&self.randomizer, &self.locale.commerce().product_material)
    }

    /// A colour name.
    #[must_use]
    pub fn color(&self) -> String {
        pick(&self.randomizer, &self.locale.commerce().color)
    }
}

impl Company {
    /// Opening adjective of a catch phrase.
    #[must_use]
    pub fn catch_phrase_adjective(&self) -> String {
        pick(&self.randomizer, &self.locale.company().catch_phrase_adjective)
    }

    /// Middle descriptor of a catch phrase.
    #[must_use]
    pub fn catch_phrase_descriptor(&self) -> String {
        pick(&self.randomizer, &self.locale.company().catch_phrase_descriptor)
    }

    /// Closing noun of a catch phrase.
    #[must_use]
    pub fn catch_phrase_noun(&self) -> String {
        pick(&self.randomizer, &self.locale.company().catch_phrase_noun)
    }

    /// Business-speak adjective.
    #[must_use]
    pub fn bs_adjective(&self) -> String {
        pick(&self.randomizer, &self.locale.company().bs_adjective)
    }

    /// Business-speak verb.
    #[must_use]
    pub fn bs_buzz(&self) -> String {
        pick(&self.randomizer, &self.locale.company().bs_buzz)
    }

    /// Business-speak noun.
    #[must_use]
    pub fn bs_noun(&self) -> String {
        pick(&self.randomizer, &self.locale.company().bs_noun)
    }
}

impl Address {
    /// A street suffix such as "Alley".
    #[must_use]
    pub fn street_suffix(&self) -> String {
        pick(&self.randomizer, &self.locale.address().street_suffix)
    }

    /// A county name.
    #[must_use]
    pub fn county(&self) -> String {
        pick(&self.randomizer, &self.locale.address().county)
    }

    /// A country name.
    #[must_use]
    pub fn country(&self) -> String {
        pick(&self.randomizer, &self.locale.address().country)
    }

    /// A state name.
    #[must_use]
    pub fn state(&self) -> String {
        pick(&self.randomizer, &self.locale.address().state)
    }
}

impl Finance {
    /// An account type followed by "Account".
    #[must_use]
    pub fn account_name(&self) -> String {
        format!(
            "{} Account",
            pick(&self.randomizer, &self.locale.finance().account_type)
        )
    }

    /// A transaction kind.
    #[must_use]
    pub fn transaction_type(&self) -> String {
        pick(&self.randomizer, &self.locale.finance().transaction_type)
    }

    /// A full currency entry.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.randomizer
            .element_cloned(&self.locale.finance().currency)
            .unwrap_or_default()
    }
}

impl Hacker {
    /// A technical abbreviation.
    #[must_use]
    pub fn abbreviation(&self) -> String {
        pick(&self.randomizer, &self.locale.hacker().abbreviation)
    }

    /// A technical adjective.
    #[must_use]
    pub fn adjective(&self) -> String {
        pick(&self.randomizer, &self.locale.hacker().adjective)
    }

    /// A technical noun.
    #[must_use]
    pub fn noun(&self) -> String {
        pick(&self.randomizer, &self.locale.hacker().noun)
    }

    /// A technical verb phrase.
    #[must_use]
    pub fn verb(&self) -> String {
        pick(&self.randomizer, &self.locale.hacker().verb)
    }

    /// A technical verb in its -ing form.
    #[must_use]
    pub fn ing_verb(&self) -> String {
        pick(&self.randomizer, &self.locale.hacker().ing_verb)
    }
}

impl Name {
    /// Seniority part of a job title.
    #[must_use]
    pub fn job_descriptor(&self) -> String {
        pick(&self.randomizer, &self.locale.name().job_descriptor)
    }

    /// Area part of a job title.
    #[must_use]
    pub fn job_area(&self) -> String {
        pick(&self.randomizer, &self.locale.name().job_area)
    }

    /// Role part of a job title.
    #[must_use]
    pub fn job_type(&self) -> String {
        pick(&self.randomizer, &self.locale.name().job_type)
    }
}
