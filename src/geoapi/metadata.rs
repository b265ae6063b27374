//! Citation, responsible party, address and identifier interfaces.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::base::Object;

code_list! {
    /// Function performed by a responsible party.
    pub enum Role {
        ResourceProvider = "resourceProvider",
        Custodian = "custodian",
        Owner = "owner",
        User = "user",
        Distributor = "distributor",
        Originator = "originator",
        PointOfContact = "pointOfContact",
        PrincipalInvestigator = "principalInvestigator",
        Processor = "processor",
        Publisher = "publisher",
        Author = "author",
    }
}

code_list! {
    /// Event a citation date refers to.
    pub enum DateType {
        Creation = "creation",
        Publication = "publication",
        Revision = "revision",
    }
}

code_list! {
    /// Mode in which a cited resource is represented.
    pub enum PresentationForm {
        DocumentDigital = "documentDigital",
        DocumentHardcopy = "documentHardcopy",
        ImageDigital = "imageDigital",
        MapDigital = "mapDigital",
        ModelDigital = "modelDigital",
        TableDigital = "tableDigital",
    }
}

/// Reference date of a cited resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitationDate {
    /// Milliseconds since 1970-01-01T00:00:00Z.
    pub epoch_millis: i64,
    pub date_type: DateType,
}

/// Standardized resource reference.
pub trait Citation: Object {
    fn title(&self) -> String;
    fn alternate_titles(&self) -> Vec<String>;
    fn dates(&self) -> Vec<CitationDate>;
    fn edition(&self) -> Option<String>;
    fn identifiers(&self) -> Vec<Arc<dyn Identifier>>;
    fn cited_responsible_parties(&self) -> Vec<Arc<dyn ResponsibleParty>>;
    fn presentation_forms(&self) -> IndexSet<PresentationForm>;
    fn other_citation_details(&self) -> Option<String>;
}

/// Identification of, and means of communication with, a person or organization.
pub trait ResponsibleParty: Object {
    fn individual_name(&self) -> Option<String>;
    fn organisation_name(&self) -> Option<String>;
    fn position_name(&self) -> Option<String>;
    fn address(&self) -> Option<Arc<dyn Address>>;
    fn role(&self) -> Role;
}

/// Postal and electronic address.
pub trait Address: Object {
    fn delivery_points(&self) -> Vec<String>;
    fn city(&self) -> Option<String>;
    fn administrative_area(&self) -> Option<String>;
    fn postal_code(&self) -> Option<String>;
    fn country(&self) -> Option<String>;
    /// `None` when the address has no electronic mail information at all.
    fn electronic_mail_addresses(&self) -> Option<IndexSet<String>>;
}

/// Value uniquely identifying an object within a namespace.
pub trait Identifier: Object {
    fn code(&self) -> String;
    fn authority(&self) -> Option<Arc<dyn Citation>>;

    fn as_reference_identifier(self: Arc<Self>) -> Option<Arc<dyn ReferenceIdentifier>> {
        None
    }
}

/// Identifier qualified by a code space and version.
pub trait ReferenceIdentifier: Identifier {
    fn code_space(&self) -> Option<String>;
    fn version(&self) -> Option<String>;
}
