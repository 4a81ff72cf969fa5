//! Address types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::AddressName;

use crate::record::{LinkedRecord, PartyLink};

/// Flag marking an address as one of the party's defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFlag {
    /// Billing address
    Primary,
    /// Shipping address
    Shipping,
}

/// A postal address linked to a party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub name: AddressName,
    pub link: PartyLink,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    pub country: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde(default)]
    pub is_primary_address: bool,
    #[serde(default)]
    pub is_shipping_address: bool,
    /// Last modification time; defaults to the Unix epoch when not stored
    #[serde(default)]
    pub modified: DateTime<Utc>,
}

impl Address {
    /// Creates a new unflagged address
    pub fn new(
        name: impl Into<AddressName>,
        link: PartyLink,
        address_line1: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            link,
            address_line1: address_line1.into(),
            address_line2: None,
            city: city.into(),
            state: None,
            pincode: None,
            country: country.into(),
            phone: None,
            email_id: None,
            is_primary_address: false,
            is_shipping_address: false,
            modified: Utc::now(),
        }
    }

    /// Returns true if the address carries `flag`
    pub fn has_flag(&self, flag: AddressFlag) -> bool {
        match flag {
            AddressFlag::Primary => self.is_primary_address,
            AddressFlag::Shipping => self.is_shipping_address,
        }
    }

    /// Formats address for display
    pub fn format(&self) -> String {
        let mut lines = vec![self.address_line1.clone()];
        if let Some(l2) = &self.address_line2 {
            lines.push(l2.clone());
        }
        let city_line = match (&self.state, &self.pincode) {
            (Some(state), Some(pincode)) => format!("{}, {} {}", self.city, state, pincode),
            (Some(state), None) => format!("{}, {}", self.city, state),
            (None, Some(pincode)) => format!("{} {}", self.city, pincode),
            (None, None) => self.city.clone(),
        };
        lines.push(city_line);
        lines.push(self.country.clone());
        if let Some(phone) = &self.phone {
            lines.push(format!("Phone: {}", phone));
        }
        if let Some(email) = &self.email_id {
            lines.push(format!("Email: {}", email));
        }
        lines.join("\n")
    }
}

impl LinkedRecord for Address {
    fn record_name(&self) -> &str {
        self.name.as_str()
    }

    fn link(&self) -> &PartyLink {
        &self.link
    }

    fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

/// Renders an address as display text
pub trait AddressFormatter: Send + Sync {
    fn display_text(&self, address: &Address) -> String;
}

/// Multi-line formatter: street, city line, country, then phone and email
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAddressFormatter;

impl AddressFormatter for StandardAddressFormatter {
    fn display_text(&self, address: &Address) -> String {
        address.format()
    }
}
