//! Static catalog of healthcare standards per geography

use std::collections::HashMap;

use lazy_static::lazy_static;
use shared_types::Standard;

use crate::jurisdiction::Geography;

fn standard(id: &str, name: &str, description: &str) -> Standard {
    Standard {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

lazy_static! {
    static ref CATALOG: HashMap<Geography, Vec<Standard>> = {
        let mut catalog = HashMap::new();
        catalog.insert(
            Geography::US,
            vec![
                standard(
                    "hipaa",
                    "HIPAA",
                    "Health Insurance Portability and Accountability Act",
                ),
                standard(
                    "fda_21_cfr_part_11",
                    "FDA 21 CFR Part 11",
                    "FDA regulations on electronic records and signatures",
                ),
                standard(
                    "hitech",
                    "HITECH Act",
                    "Health Information Technology for Economic and Clinical Health Act",
                ),
            ],
        );
        catalog.insert(
            Geography::LATAM,
            vec![
                standard("lgpd", "LGPD (Brazil)", "Lei Geral de Proteção de Dados"),
                standard(
                    "anmat",
                    "ANMAT (Argentina)",
                    "Regulations for medical devices and drugs",
                ),
            ],
        );
        catalog.insert(
            Geography::EMEA,
            vec![
                standard("gdpr", "GDPR", "General Data Protection Regulation"),
                standard("mdr", "MDR", "Medical Device Regulation (EU) 2017/745"),
                standard(
                    "ivdr",
                    "IVDR",
                    "In Vitro Diagnostic Regulation (EU) 2017/746",
                ),
            ],
        );
        catalog.insert(
            Geography::JAPAC,
            vec![
                standard(
                    "appi",
                    "APPI (Japan)",
                    "Act on the Protection of Personal Information",
                ),
                standard(
                    "tga",
                    "TGA (Australia)",
                    "Therapeutic Goods Administration regulations",
                ),
                standard("pdpd", "PDPD (India)", "Personal Data Protection Draft"),
            ],
        );
        catalog
    };
}

/// Standards available for a geography, in menu order
pub fn standards_for(geography: Geography) -> &'static [Standard] {
    CATALOG
        .get(&geography)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Look up a standard by id within a geography
pub fn find_standard(geography: Geography, id: &str) -> Option<&'static Standard> {
    standards_for(geography).iter().find(|s| s.id == id)
}
