//! Metadata: identifiers, roles and the mandatory-property case.

use std::sync::Arc;

use geoapi_bridge::{geoapi, opengis};

use crate::helpers::geoapi_fixtures::{Grs80, Organisation};
use crate::helpers::opengis_fixtures::{Meta, Party, Remark, code};

#[test]
fn test_reference_identifier_keeps_code_space() {
    let identifier = code("4326");
    let adapted = geoapi(&identifier);
    assert_eq!(adapted.code(), "4326");
    assert_eq!(adapted.code_space().as_deref(), Some("EPSG"));
    assert_eq!(adapted.to_string(), "EPSG:4326");
}

#[test]
fn test_identifier_resolves_to_reference_identifier() {
    let identifier: Arc<dyn opengis::Identifier> = code("4326");
    assert!(geoapi(&identifier).as_reference_identifier().is_some());
}

#[test]
fn test_role_is_translated() {
    let party: Arc<dyn opengis::ResponsibleParty> = Arc::new(Party {
        organisation: "IOGP".to_string(),
        role: Some(opengis::Role::Custodian),
    });
    let adapted = geoapi(&party);
    assert_eq!(adapted.role(), geoapi::Role::Custodian);
    assert_eq!(adapted.organisation_name().as_deref(), Some("IOGP"));
}

#[test]
#[should_panic(expected = "mandatory property `role`")]
fn test_missing_role_is_unsupported() {
    let party: Arc<dyn opengis::ResponsibleParty> = Arc::new(Party {
        organisation: "IOGP".to_string(),
        role: None,
    });
    geoapi(&party).role();
}

#[test]
fn test_mandatory_role_becomes_optional() {
    let party: Arc<dyn geoapi::ResponsibleParty> = Arc::new(Organisation {
        name: "IOGP".to_string(),
        role: geoapi::Role::PointOfContact,
    });
    assert_eq!(opengis(&party).role(), Some(opengis::Role::PointOfContact));
}

#[test]
fn test_generic_names_become_alias_text() {
    let ellipsoid: Arc<dyn geoapi::Ellipsoid> = Arc::new(Grs80);
    let adapted = opengis(&ellipsoid);
    assert_eq!(adapted.alias(), vec!["EPSG:GRS80", "International 1979"]);
    assert_eq!(adapted.remarks().as_deref(), Some("Adopted by IUGG 1979 Canberra."));
}

#[test]
fn test_unclassified_object_has_no_aliases() {
    let object: Arc<dyn opengis::IdentifiedObject> = Arc::new(Remark {
        meta: Meta::with_aliases("note", &["EPSG:note", "memo"]),
    });
    let adapted = geoapi(&object);
    assert!(adapted.alias().is_empty());
    assert_eq!(adapted.name().code(), "note");
}
