//! Static lookup tables driving the address rewrite rules.
//!
//! Three vocabularies: unit/occupancy designators (never respelled),
//! directional tokens (always upper-cased), and the street-suffix mapping
//! between full forms and USPS abbreviations. All tables are built once and
//! never mutated, so a shared instance is safe to query from any thread.

use std::collections::{HashMap, HashSet};

use crate::case::title_case;

/// Unit and occupancy designators, stored in their canonical title-cased
/// form. Membership is tested on the title-cased word.
const UNIT_DESIGNATORS: &[&str] = &[
    "Apartment",
    "Apartments",
    "Apt",
    "Penthouse",
    "Ph",
    "Basement",
    "Bsmt",
    "Pier",
    "Building",
    "Bldg",
    "Rear",
    "Department",
    "Dept",
    "Room",
    "Rm",
    "Floor",
    "Fl",
    "Side",
    "Front",
    "Frnt",
    "Slip",
    "Hanger",
    "Hngr",
    "Space",
    "Spc",
    "Key",
    "Stop",
    "Lobby",
    "Lbby",
    "Suite",
    "Ste",
    "Lot",
    "Trailer",
    "Trlr",
    "Lower",
    "Lowr",
    "Unit",
    "Office",
    "Ofc",
    "Upper",
    "Uppr",
];

/// Compass tokens, matched on the upper-cased word. "PO" rides along so
/// PO-box prefixes keep their casing through the final capitalization pass.
const DIRECTIONALS: &[&str] = &["S", "W", "N", "E", "SE", "SW", "NE", "NW", "PO"];

/// Full street-suffix word to USPS abbreviation, in definition order.
///
/// Order is load-bearing: the reverse table keeps the LAST full form for a
/// duplicated abbreviation, so "Apt" expands to "Apartments" and "Anx" to
/// "Annex". Several words map to themselves ("Fall", "Park", "Mall", ...);
/// for those the suffix rules are a no-op beyond title-casing.
const SUFFIX_PAIRS: &[(&str, &str)] = &[
    ("Alley", "Aly"),
    ("Anex", "Anx"),
    ("Annex", "Anx"),
    ("Apartment", "Apt"),
    ("Apartments", "Apt"),
    ("Arcade", "Arc"),
    ("Avenue", "Ave"),
    ("Bayou", "Byu"),
    ("Beach", "Bch"),
    ("Bend", "Bnd"),
    ("Bluff", "Blf"),
    ("Bluffs", "Blfs"),
    ("Bottom", "Btm"),
    ("Boulevard", "Blvd"),
    ("Branch", "Br"),
    ("Bridge", "Brg"),
    ("Brook", "Brk"),
    ("Brooks", "Brks"),
    ("Burg", "Bg"),
    ("Burgs", "Bgs"),
    ("Bypass", "Byp"),
    ("Camp", "Cp"),
    ("Canyon", "Cyn"),
    ("Cape", "Cpe"),
    ("Causeway", "Cswy"),
    ("Center", "Ctr"),
    ("Centers", "Ctrs"),
    ("Circle", "Cir"),
    ("Circles", "Cirs"),
    ("Cliff", "Clf"),
    ("Cliffs", "Clfs"),
    ("Club", "Clb"),
    ("Common", "Cmn"),
    ("Commons", "Cmns"),
    ("Corner", "Cor"),
    ("Corners", "Cors"),
    ("Course", "Crse"),
    ("Court", "Ct"),
    ("Courts", "Cts"),
    ("Cove", "Cv"),
    ("Coves", "Cvs"),
    ("Creek", "Crk"),
    ("Crescent", "Cres"),
    ("Crest", "Crst"),
    ("Crossing", "Xing"),
    ("Crossroad", "Xrd"),
    ("Crossroads", "Xrds"),
    ("Curve", "Curv"),
    ("Dale", "Dl"),
    ("Dam", "Dm"),
    ("Divide", "Dv"),
    ("Drive", "Dr"),
    ("Drives", "Drs"),
    ("Estate", "Est"),
    ("Estates", "Ests"),
    ("Expressway", "Expy"),
    ("Extension", "Ext"),
    ("Extensions", "Exts"),
    ("Fall", "Fall"),
    ("Falls", "Fls"),
    ("Ferry", "Fry"),
    ("Field", "Fld"),
    ("Fields", "Flds"),
    ("Flat", "Flt"),
    ("Flats", "Flts"),
    ("Ford", "Frd"),
    ("Fords", "Frds"),
    ("Forest", "Frst"),
    ("Forge", "Frg"),
    ("Forges", "Frgs"),
    ("Fork", "Frk"),
    ("Forks", "Frks"),
    ("Fort", "Ft"),
    ("Freeway", "Fwy"),
    ("Garden", "Gdn"),
    ("Gardens", "Gdns"),
    ("Gateway", "Gtwy"),
    ("Glen", "Gln"),
    ("Glens", "Glns"),
    ("Green", "Grn"),
    ("Greens", "Grns"),
    ("Grove", "Grv"),
    ("Groves", "Grvs"),
    ("Harbor", "Hbr"),
    ("Harbors", "Hbrs"),
    ("Haven", "Hvn"),
    ("Heights", "Hts"),
    ("Highway", "Hwy"),
    ("Hill", "Hl"),
    ("Hills", "Hls"),
    ("Hollow", "Holw"),
    ("Inlet", "Inlt"),
    ("Island", "Is"),
    ("Islands", "Iss"),
    ("Isle", "Isle"),
    ("Junction", "Jct"),
    ("Junctions", "Jcts"),
    ("Key", "Ky"),
    ("Keys", "Kys"),
    ("Knoll", "Knl"),
    ("Knolls", "Knls"),
    ("Lake", "Lk"),
    ("Lakes", "Lks"),
    ("Land", "Land"),
    ("Landing", "Lndg"),
    ("Lane", "Ln"),
    ("Light", "Lgt"),
    ("Lights", "Lgts"),
    ("Loaf", "Lf"),
    ("Lock", "Lck"),
    ("Locks", "Lcks"),
    ("Lodge", "Ldg"),
    ("Loop", "Lp"),
    ("Mall", "Mall"),
    ("Manor", "Mnr"),
    ("Manors", "Mnrs"),
    ("Meadow", "Mdw"),
    ("Meadows", "Mdws"),
    ("Mews", "Mews"),
    ("Mill", "Ml"),
    ("Mills", "Mls"),
    ("Mission", "Msn"),
    ("Motorway", "Mtwy"),
    ("Mount", "Mt"),
    ("Mountain", "Mtn"),
    ("Mountains", "Mtns"),
    ("Neck", "Nck"),
    ("Orchard", "Orch"),
    ("Oval", "Oval"),
    ("Overpass", "Opas"),
    ("Park", "Park"),
    ("Parkway", "Pkwy"),
    ("Pass", "Pass"),
    ("Passage", "Psge"),
    ("Path", "Path"),
    ("Pike", "Pike"),
    ("Pine", "Pne"),
    ("Pines", "Pnes"),
    ("Place", "Pl"),
    ("Plain", "Pln"),
    ("Plains", "Plns"),
    ("Plaza", "Plz"),
    ("Point", "Pt"),
    ("Points", "Pts"),
    ("Port", "Prt"),
    ("Ports", "Prts"),
    ("Prairie", "Pr"),
    ("Radial", "Radl"),
    ("Ranch", "Rnch"),
    ("Rapid", "Rpd"),
    ("Rapids", "Rpds"),
    ("Rest", "Rst"),
    ("Ridge", "Rdg"),
    ("Ridges", "Rdgs"),
    ("River", "Riv"),
    ("Road", "Rd"),
    ("Roads", "Rds"),
    ("Route", "Rte"),
    ("Row", "Row"),
    ("Rue", "Rue"),
    ("Run", "Run"),
    ("Shoal", "Shl"),
    ("Shoals", "Shls"),
    ("Shore", "Shr"),
    ("Shores", "Shrs"),
    ("Skyway", "Skyway"),
    ("Spring", "Spg"),
    ("Springs", "Spgs"),
    ("Spur", "Spur"),
    ("Square", "Sq"),
    ("Squares", "Sqs"),
    ("Station", "Sta"),
    ("Stravenue", "Stra"),
    ("Stream", "Strm"),
    ("Street", "St"),
    ("Streets", "Sts"),
    ("Summit", "Smt"),
    ("Terrace", "Ter"),
    ("Throughway", "Trwy"),
    ("Trace", "Trce"),
    ("Track", "Trak"),
    ("Trafficway", "Trfy"),
    ("Trail", "Trl"),
    ("Trailer", "Trlr"),
    ("Tunnel", "Tunl"),
    ("Turnpike", "Tpke"),
    ("Underpass", "Upas"),
    ("Union", "Un"),
    ("Valley", "Vly"),
    ("Valleys", "Vlys"),
    ("Viaduct", "Via"),
    ("View", "Vw"),
    ("Views", "Vws"),
    ("Village", "Vlg"),
    ("Villages", "Vlgs"),
    ("Vista", "Vis"),
    ("Walk", "Walk"),
    ("Way", "Way"),
    ("Well", "Wl"),
    ("Wells", "Wls"),
    ("North", "N"),
    ("East", "E"),
    ("South", "S"),
    ("West", "W"),
    ("Northeast", "NE"),
    ("Southeast", "SE"),
    ("Northwest", "NW"),
    ("Southwest", "SW"),
];

/// Read-only lookup tables backing the rewrite rules.
#[derive(Debug)]
pub struct LookupTables {
    unit_designators: HashSet<&'static str>,
    directionals: HashSet<&'static str>,
    full_to_abbr: HashMap<&'static str, &'static str>,
    abbr_to_full: HashMap<&'static str, &'static str>,
}

impl LookupTables {
    #[must_use]
    pub fn new() -> Self {
        let mut full_to_abbr = HashMap::with_capacity(SUFFIX_PAIRS.len());
        let mut abbr_to_full = HashMap::with_capacity(SUFFIX_PAIRS.len());
        for (full, abbr) in SUFFIX_PAIRS {
            full_to_abbr.insert(*full, *abbr);
            // Later entries overwrite: last definition wins for shared
            // abbreviations.
            abbr_to_full.insert(*abbr, *full);
        }
        Self {
            unit_designators: UNIT_DESIGNATORS.iter().copied().collect(),
            directionals: DIRECTIONALS.iter().copied().collect(),
            full_to_abbr,
            abbr_to_full,
        }
    }

    /// True when the word's title-cased form is a unit/occupancy designator.
    #[must_use]
    pub fn is_unit_designator(&self, word: &str) -> bool {
        self.unit_designators.contains(title_case(word).as_str())
    }

    /// True when the word's upper-cased form is a compass token.
    #[must_use]
    pub fn is_directional(&self, word: &str) -> bool {
        self.directionals.contains(word.to_uppercase().as_str())
    }

    /// True when the word is a recognized street suffix in either spelling.
    #[must_use]
    pub fn is_suffix(&self, word: &str) -> bool {
        let key = title_case(word);
        self.full_to_abbr.contains_key(key.as_str())
            || self.abbr_to_full.contains_key(key.as_str())
    }

    /// USPS abbreviation for a full-form suffix word, if the word is one.
    #[must_use]
    pub fn abbreviate(&self, word: &str) -> Option<&'static str> {
        self.full_to_abbr.get(title_case(word).as_str()).copied()
    }

    /// Full form for an abbreviated suffix word, if the word is one.
    #[must_use]
    pub fn expand(&self, word: &str) -> Option<&'static str> {
        self.abbr_to_full.get(title_case(word).as_str()).copied()
    }

    /// The suffix mapping in definition order, for listings.
    pub fn suffix_pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        SUFFIX_PAIRS.iter().copied()
    }

    /// Directional tokens in definition order, for listings.
    pub fn directional_tokens(&self) -> impl Iterator<Item = &'static str> {
        DIRECTIONALS.iter().copied()
    }

    /// Unit designators in definition order, for listings.
    pub fn unit_designator_words(&self) -> impl Iterator<Item = &'static str> {
        UNIT_DESIGNATORS.iter().copied()
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::LookupTables;

    #[test]
    fn designator_lookup_is_case_insensitive() {
        let tables = LookupTables::new();
        assert!(tables.is_unit_designator("apt"));
        assert!(tables.is_unit_designator("SUITE"));
        assert!(tables.is_unit_designator("Unit"));
        assert!(!tables.is_unit_designator("Street"));
    }

    #[test]
    fn directional_lookup_is_case_insensitive() {
        let tables = LookupTables::new();
        assert!(tables.is_directional("ne"));
        assert!(tables.is_directional("N"));
        assert!(tables.is_directional("po"));
        assert!(!tables.is_directional("North"));
    }

    #[test]
    fn suffix_recognizes_both_spellings() {
        let tables = LookupTables::new();
        assert!(tables.is_suffix("Boulevard"));
        assert!(tables.is_suffix("blvd"));
        assert_eq!(tables.abbreviate("Boulevard"), Some("Blvd"));
        assert_eq!(tables.abbreviate("Blvd"), None);
        assert_eq!(tables.expand("blvd"), Some("Boulevard"));
    }

    #[test]
    fn two_letter_directionals_are_not_suffixes() {
        // Title-casing turns "NE" into "Ne", which matches neither table.
        let tables = LookupTables::new();
        assert!(!tables.is_suffix("NE"));
        assert!(!tables.is_suffix("sw"));
        // The single-letter compass abbreviations, by contrast, title-case
        // to themselves and stay reverse-map keys.
        assert!(tables.is_suffix("N"));
        assert_eq!(tables.expand("n"), Some("North"));
    }

    #[test]
    fn reverse_map_keeps_last_definition_for_shared_abbreviations() {
        let tables = LookupTables::new();
        assert_eq!(tables.expand("Apt"), Some("Apartments"));
        assert_eq!(tables.expand("Anx"), Some("Annex"));
    }

    #[test]
    fn self_mapped_suffixes_round_trip() {
        let tables = LookupTables::new();
        assert_eq!(tables.abbreviate("Park"), Some("Park"));
        assert_eq!(tables.expand("Park"), Some("Park"));
    }
}
