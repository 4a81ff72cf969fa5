//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating party names, credit terms,
//! and posting dates.

use chrono::{Days, NaiveDate};
use core_kernel::PartyType;
use proptest::prelude::*;

/// Strategy for generating party types
pub fn party_type_strategy() -> impl Strategy<Value = PartyType> {
    prop_oneof![
        Just(PartyType::Customer),
        Just(PartyType::Supplier),
        Just(PartyType::Lead),
    ]
}

/// Strategy for generating non-blank party names
pub fn party_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,12}( [A-Z][a-z]{2,8})?"
}

/// Strategy for generating credit days, including unset and zero
pub fn credit_days_strategy() -> impl Strategy<Value = Option<u32>> {
    prop_oneof![
        Just(None),
        Just(Some(0)),
        (1u32..365).prop_map(Some),
    ]
}

/// Strategy for generating posting dates between 2000 and roughly 2050
pub fn posting_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..18_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date") + Days::new(offset)
    })
}
