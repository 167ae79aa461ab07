//! Static suburb/postcode table used by the location step

use serde::Serialize;

use crate::value_objects::AustralianState;

/// A selectable suburb with its postcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suburb {
    pub name: &'static str,
    pub postcode: &'static str,
}

const fn suburb(name: &'static str, postcode: &'static str) -> Suburb {
    Suburb { name, postcode }
}

const NSW: &[Suburb] = &[
    suburb("Sydney", "2000"),
    suburb("Newcastle", "2300"),
    suburb("Wollongong", "2500"),
    suburb("Parramatta", "2150"),
    suburb("Blacktown", "2148"),
    suburb("Liverpool", "2170"),
    suburb("Penrith", "2750"),
    suburb("Campbelltown", "2560"),
];

const VIC: &[Suburb] = &[
    suburb("Melbourne", "3000"),
    suburb("Geelong", "3220"),
    suburb("Ballarat", "3350"),
    suburb("Bendigo", "3550"),
    suburb("Frankston", "3199"),
    suburb("Dandenong", "3175"),
    suburb("Shepparton", "3630"),
];

const QLD: &[Suburb] = &[
    suburb("Brisbane", "4000"),
    suburb("Gold Coast", "4217"),
    suburb("Townsville", "4810"),
    suburb("Cairns", "4870"),
    suburb("Toowoomba", "4350"),
    suburb("Mackay", "4740"),
    suburb("Rockhampton", "4700"),
];

const WA: &[Suburb] = &[
    suburb("Perth", "6000"),
    suburb("Fremantle", "6160"),
    suburb("Bunbury", "6230"),
    suburb("Geraldton", "6530"),
    suburb("Kalgoorlie", "6430"),
    suburb("Albany", "6330"),
];

const SA: &[Suburb] = &[
    suburb("Adelaide", "5000"),
    suburb("Mount Gambier", "5290"),
    suburb("Whyalla", "5600"),
    suburb("Murray Bridge", "5253"),
    suburb("Port Augusta", "5700"),
];

const TAS: &[Suburb] = &[
    suburb("Hobart", "7000"),
    suburb("Launceston", "7250"),
    suburb("Devonport", "7310"),
    suburb("Burnie", "7320"),
];

const ACT: &[Suburb] = &[
    suburb("Canberra", "2600"),
    suburb("Belconnen", "2617"),
    suburb("Tuggeranong", "2900"),
    suburb("Woden", "2606"),
];

const NT: &[Suburb] = &[
    suburb("Darwin", "0800"),
    suburb("Alice Springs", "0870"),
    suburb("Katherine", "0850"),
    suburb("Nhulunbuy", "0880"),
    suburb("Tennant Creek", "0860"),
];

/// Listed suburbs for a state; empty when the table has no entry
#[must_use]
pub const fn suburbs_for(state: AustralianState) -> &'static [Suburb] {
    match state {
        AustralianState::Nsw => NSW,
        AustralianState::Vic => VIC,
        AustralianState::Qld => QLD,
        AustralianState::Wa => WA,
        AustralianState::Sa => SA,
        AustralianState::Tas => TAS,
        AustralianState::Act => ACT,
        AustralianState::Nt => NT,
    }
}

/// Look up a suburb by name (case-insensitive) within a state
#[must_use]
pub fn find_suburb(state: AustralianState, name: &str) -> Option<Suburb> {
    suburbs_for(state)
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_entries() {
        for state in AustralianState::ALL {
            assert!(!suburbs_for(state).is_empty(), "{state} has no suburbs");
        }
    }

    #[test]
    fn nt_postcodes_keep_leading_zero() {
        let darwin = find_suburb(AustralianState::Nt, "darwin").unwrap();
        assert_eq!(darwin.postcode, "0800");
    }

    #[test]
    fn lookup_is_scoped_to_state() {
        assert!(find_suburb(AustralianState::Vic, "Sydney").is_none());
        assert_eq!(
            find_suburb(AustralianState::Qld, "Gold Coast").map(|s| s.postcode),
            Some("4217")
        );
    }
}
