//! Localized user-visible messages
//!
//! Validation failures, permission denials and the account-creation notice
//! are shown to the person preparing the document, so they are rendered from
//! Fluent resources in the user's locale rather than from `Display`.
//!
//! ```rust
//! use core_kernel::messages::Messages;
//!
//! let messages = Messages::for_locale("de-DE");
//! let text = messages.format("account-created", &[("account", "Acme - C".to_string())]);
//! assert_eq!(text, "Konto angelegt: Acme - C");
//! ```

use std::fmt;
use std::sync::Arc;

use fluent::concurrent::FluentBundle;
use fluent::{FluentArgs, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use once_cell::sync::Lazy;
use tracing::warn;
use unic_langid::LanguageIdentifier;

const DEFAULT_LOCALE: &str = "en-US";

const EN_US: &str = r#"
company-required = Please select company first.
party-required = Please select a { $party_type } first.
not-permitted = Not permitted: you cannot read { $party_type } { $party }.
account-created = Account Created: { $account }
missing-parent-group = Company { $company } has no { $group } group configured.
date-out-of-range = Due date is out of range: { $date } plus { $days } days.
validation-failed = Validation error: { $detail }
configuration-invalid = Configuration error: { $detail }
record-not-found = { $entity } { $name } not found.
store-error = The record store reported an error: { $detail }
"#;

const DE_DE: &str = r#"
company-required = Bitte zuerst ein Unternehmen auswählen.
party-required = Bitte zuerst einen { $party_type } auswählen.
not-permitted = Nicht erlaubt: Sie dürfen { $party_type } { $party } nicht lesen.
account-created = Konto angelegt: { $account }
missing-parent-group = Für das Unternehmen { $company } ist keine Gruppe { $group } eingerichtet.
date-out-of-range = Fälligkeitsdatum außerhalb des gültigen Bereichs: { $date } plus { $days } Tage.
validation-failed = Validierungsfehler: { $detail }
configuration-invalid = Konfigurationsfehler: { $detail }
record-not-found = { $entity } { $name } wurde nicht gefunden.
store-error = Der Datenspeicher meldete einen Fehler: { $detail }
"#;

const CATALOG: [(&str, &str); 2] = [(DEFAULT_LOCALE, EN_US), ("de-DE", DE_DE)];

type Bundle = FluentBundle<FluentResource>;

/// Bundles for every bundled locale, parsed once per process
static BUNDLES: Lazy<Vec<(LanguageIdentifier, Arc<Bundle>)>> = Lazy::new(|| {
    CATALOG
        .iter()
        .filter_map(|(tag, source)| {
            let locale: LanguageIdentifier = match tag.parse() {
                Ok(locale) => locale,
                Err(error) => {
                    warn!(tag, ?error, "invalid catalog locale");
                    return None;
                }
            };
            Some((locale.clone(), Arc::new(build_bundle(locale, source))))
        })
        .collect()
});

fn build_bundle(locale: LanguageIdentifier, source: &str) -> Bundle {
    let resource = FluentResource::try_new(source.to_string()).unwrap_or_else(|(resource, errors)| {
        warn!(%locale, ?errors, "message catalog failed to parse");
        resource
    });

    let mut bundle = Bundle::new_concurrent(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        warn!(%locale, ?errors, "message catalog has duplicate entries");
    }
    bundle
}

/// A message that can be rendered in the user's language
pub trait LocalizedMessage {
    /// Fluent message identifier
    fn message_id(&self) -> &'static str;

    /// Named arguments substituted into the message
    fn message_args(&self) -> Vec<(&'static str, String)>;
}

/// Renders localized messages for one locale
#[derive(Clone)]
pub struct Messages {
    locale: LanguageIdentifier,
    bundle: Option<Arc<Bundle>>,
}

impl Messages {
    /// Selects the catalog closest to the requested locale
    ///
    /// Negotiation filters the bundled locales against the request (exact
    /// tag, then same language with any region); anything else falls back
    /// to `en-US`.
    pub fn for_locale(requested: &str) -> Self {
        let requested: Vec<LanguageIdentifier> = requested.parse().ok().into_iter().collect();
        let available: Vec<LanguageIdentifier> =
            BUNDLES.iter().map(|(locale, _)| locale.clone()).collect();
        let default = available.iter().find(|locale| locale.to_string() == DEFAULT_LOCALE);

        let negotiated = negotiate_languages(
            &requested,
            &available,
            default,
            NegotiationStrategy::Filtering,
        );

        match negotiated.first() {
            Some(&locale) => Self {
                locale: locale.clone(),
                bundle: BUNDLES
                    .iter()
                    .find(|(candidate, _)| candidate == locale)
                    .map(|(_, bundle)| Arc::clone(bundle)),
            },
            None => Self {
                locale: LanguageIdentifier::default(),
                bundle: None,
            },
        }
    }

    /// Returns the locale messages are rendered in
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Renders message `id` with the given arguments
    ///
    /// Unknown identifiers render as the identifier itself so that a missing
    /// translation never hides the underlying condition.
    pub fn format(&self, id: &str, args: &[(&str, String)]) -> String {
        let Some(bundle) = &self.bundle else {
            warn!(locale = %self.locale, id, "no message catalog");
            return id.to_string();
        };

        let Some(pattern) = bundle.get_message(id).and_then(|message| message.value()) else {
            warn!(locale = %self.locale, id, "missing message");
            return id.to_string();
        };

        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }

        let mut errors = vec![];
        let text = bundle.format_pattern(pattern, Some(&fluent_args), &mut errors);
        if !errors.is_empty() {
            warn!(locale = %self.locale, id, ?errors, "message formatted with errors");
        }
        text.into_owned()
    }

    /// Renders a [`LocalizedMessage`]
    pub fn localize(&self, message: &impl LocalizedMessage) -> String {
        self.format(message.message_id(), &message.message_args())
    }
}

impl fmt::Debug for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Messages").field("locale", &self.locale).finish()
    }
}

impl PartialEq for Messages {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl Eq for Messages {}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}
